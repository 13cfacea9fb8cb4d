use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tulkki::{
    program, Error, Mode, RuntimeError, Session, SessionConfig, StdinInput, StdoutSink,
    StructuralError,
};

/// Interpreter for brainfuck
#[derive(Parser, Debug)]
#[command(name = "tulkki", version)]
struct Cli {
    /// Path to bf-file
    file_path: PathBuf,

    /// 0=bytes, 1=decimal
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    input_mode: u8,

    /// 0=bytes, 1=decimal
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    output_mode: u8,

    /// Number of cells in the tape
    #[arg(long, default_value_t = 30_000, value_parser = clap::value_parser!(u32).range(1..))]
    cell_count: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let raw = match fs::read_to_string(&cli.file_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("tulkki: failed to read {}: {e}", cli.file_path.display());
            return ExitCode::from(1);
        }
    };

    let config = SessionConfig {
        input_mode: Mode::from_flag(cli.input_mode),
        output_mode: Mode::from_flag(cli.output_mode),
        cell_count: cli.cell_count as usize,
    };

    let mut session = Session::new(config);
    let mut input = StdinInput::new();
    let mut sink = StdoutSink::new();

    match session.run(&raw, &mut input, &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&raw, &err);
            ExitCode::from(1)
        }
    }
}

/// Print the error to stderr, with a caret context window into the
/// sanitized instruction stream when the error carries a position.
fn report_error(raw: &str, err: &Error) {
    let (label, ip) = match err {
        Error::Structural(e) => ("parse error", structural_ip(e)),
        Error::Runtime(e) => ("runtime error", runtime_ip(e)),
    };
    eprintln!("tulkki: {label}: {err}");

    if let Some(ip) = ip {
        print_instruction_context(&program::sanitize(raw), ip);
    }
    let _ = io::stderr().flush();
}

fn structural_ip(err: &StructuralError) -> Option<usize> {
    match err {
        StructuralError::BracketMismatch { .. } => None,
        StructuralError::StrayClose { ip } | StructuralError::StrayOpen { ip } => Some(*ip),
    }
}

fn runtime_ip(err: &RuntimeError) -> Option<usize> {
    match err {
        RuntimeError::PointerOverflow { ip, .. }
        | RuntimeError::PointerUnderflow { ip }
        | RuntimeError::BadInput { ip, .. }
        | RuntimeError::InputExhausted { ip }
        | RuntimeError::BadCodePoint { ip, .. } => Some(*ip),
        RuntimeError::Io(_) => None,
    }
}

/// Show a short window of instructions around `ip` with a caret under the
/// offending one. The sanitized stream is pure ASCII, so byte and character
/// positions coincide.
fn print_instruction_context(code: &str, ip: usize) {
    const WINDOW: usize = 32;

    let start = ip.saturating_sub(WINDOW);
    let end = (ip + WINDOW + 1).min(code.len());
    if start >= end {
        return;
    }

    eprintln!("  {}", &code[start..end]);
    eprintln!("  {}^", " ".repeat(ip - start));
}
