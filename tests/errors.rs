use assert_cmd::Command;
use predicates::prelude::*;
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
fn bracket_count_mismatch_aborts_before_execution() {
    // The '.' precedes the stray '[', but validation runs first, so no
    // output ever reaches stdout.
    let file = program_file("+.[");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bracket count doesn't match"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn balanced_but_misnested_brackets_are_rejected() {
    let file = program_file("][");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("closes no loop"));
}

#[test]
fn pointer_underflow_fails_with_no_output() {
    let file = program_file("+.<");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("underflow"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn pointer_overflow_reports_the_tape_size() {
    let file = program_file(">>>");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--cell-count", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflow"))
        .stderr(predicate::str::contains("3 cells"));
}

#[test]
fn malformed_decimal_input_is_reported() {
    let file = program_file(",");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--input-mode", "1"])
        .write_stdin("sixty-five\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn input_at_eof_is_reported_as_exhausted() {
    let file = program_file(",");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input exhausted"));
}

#[test]
fn missing_file_exits_with_code_one() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("no/such/file.bf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn out_of_range_mode_flag_is_a_usage_error() {
    let file = program_file("+");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--input-mode", "2"])
        .assert()
        .code(2);
}

#[test]
fn zero_cell_count_is_a_usage_error() {
    let file = program_file("+");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .args(["--cell-count", "0"])
        .assert()
        .code(2);
}
