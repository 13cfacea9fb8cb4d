use assert_cmd::Command;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn cargo_bin() -> Command {
    Command::cargo_bin("tulkki").unwrap()
}

fn program_file(code: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(code.as_bytes()).unwrap();
    file
}

#[test]
fn decimal_in_decimal_out_echoes_with_newline() {
    let file = program_file(",.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--input-mode", "1", "--output-mode", "1"])
        .write_stdin("65\n")
        .assert()
        .success()
        .stdout("65\n");
}

#[test]
fn decimal_in_byte_out_renders_the_character() {
    let file = program_file(",.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--input-mode", "1", "--output-mode", "0"])
        .write_stdin("65\n")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn byte_in_decimal_out_prints_the_code_point() {
    let file = program_file(",.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--input-mode", "0", "--output-mode", "1"])
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("65\n");
}

#[test]
fn both_modes_default_to_bytes() {
    let file = program_file(",.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn cell_count_flag_sizes_the_tape() {
    let file = program_file(">>");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--cell-count", "3"])
        .assert()
        .success();

    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--cell-count", "2"])
        .assert()
        .failure();
}
