//! The execution engine.
//!
//! A [`Session`] owns the tape, the data pointer, and the output
//! accumulator for one program run, and drives the fetch-execute loop over
//! a validated [`Program`]. Loops jump through the precomputed bracket
//! table, so no scanning happens at run time.

use std::io;

use crate::channel::{InputSource, OutputSink};
use crate::program::Program;
use crate::Error;

/// Default tape length.
pub const DEFAULT_CELL_COUNT: usize = 30_000;

/// How `,` decodes tokens and `.` renders cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Values are character code points.
    Bytes,
    /// Values are textual integers.
    Decimal,
}

impl Mode {
    /// Map a numeric CLI flag to a mode: 1 is decimal, anything else bytes.
    pub fn from_flag(flag: u8) -> Self {
        if flag == 1 { Mode::Decimal } else { Mode::Bytes }
    }
}

/// Configuration for one run.
///
/// `cell_count` must be positive; the CLI enforces this, and embedders are
/// expected to as well.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub input_mode: Mode,
    pub output_mode: Mode,
    pub cell_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input_mode: Mode::Bytes,
            output_mode: Mode::Bytes,
            cell_count: DEFAULT_CELL_COUNT,
        }
    }
}

/// Errors that abort a run in progress.
///
/// All of these are fatal: the run stops at the offending instruction and
/// whatever output had accumulated is discarded.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// `>` would move the pointer past the last cell.
    #[error("pointer overflow at instruction {ip} (tape has {cells} cells)")]
    PointerOverflow { ip: usize, cells: usize },

    /// `<` would move the pointer below cell 0.
    #[error("pointer underflow at instruction {ip}")]
    PointerUnderflow { ip: usize },

    /// An input token the current input mode cannot decode.
    #[error("malformed input token {token:?} at instruction {ip}")]
    BadInput { token: String, ip: usize },

    /// `,` with nothing left to read.
    #[error("input exhausted at instruction {ip}")]
    InputExhausted { ip: usize },

    /// Byte-mode `.` on a cell that is not a Unicode scalar value.
    #[error("cell value {value} at instruction {ip} is not a valid code point")]
    BadCodePoint { value: i64, ip: usize },

    /// An input or output channel failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One program run: tape, pointer, and output accumulator.
///
/// Create a fresh session per run. A session carries no global state, so
/// any number of them can coexist (the test suite relies on this).
pub struct Session {
    config: SessionConfig,
    cells: Vec<i64>,
    pointer: usize,
    output: String,
}

impl Session {
    /// Create a session with a zeroed tape of `config.cell_count` cells.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            cells: vec![0; config.cell_count],
            pointer: 0,
            output: String::new(),
        }
    }

    /// Sanitize, validate, and execute `raw` to completion.
    ///
    /// On success the accumulated output (if any) is delivered to `sink` as
    /// a single unit, with a trailing newline appended in decimal output
    /// mode only. On failure nothing is delivered.
    pub fn run<I, O>(&mut self, raw: &str, input: &mut I, sink: &mut O) -> Result<(), Error>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        let program = Program::parse(raw)?;
        self.execute(&program, input)?;

        if !self.output.is_empty() {
            if self.config.output_mode == Mode::Decimal {
                self.output.push('\n');
            }
            sink.deliver(&self.output).map_err(RuntimeError::Io)?;
        }
        Ok(())
    }

    fn execute<I>(&mut self, program: &Program, input: &mut I) -> Result<(), RuntimeError>
    where
        I: InputSource + ?Sized,
    {
        let mut ip = 0;
        while ip < program.len() {
            match program.op(ip) {
                '>' => {
                    // Valid pointer domain is [0, cell_count): fail the
                    // moment the pointer would leave it, not one step later.
                    if self.pointer + 1 >= self.cells.len() {
                        return Err(RuntimeError::PointerOverflow {
                            ip,
                            cells: self.cells.len(),
                        });
                    }
                    self.pointer += 1;
                }
                '<' => {
                    if self.pointer == 0 {
                        return Err(RuntimeError::PointerUnderflow { ip });
                    }
                    self.pointer -= 1;
                }
                '+' => {
                    self.cells[self.pointer] = self.cells[self.pointer].wrapping_add(1);
                }
                '-' => {
                    self.cells[self.pointer] = self.cells[self.pointer].wrapping_sub(1);
                }
                ',' => {
                    let Some(token) = input.next_token()? else {
                        return Err(RuntimeError::InputExhausted { ip });
                    };
                    self.cells[self.pointer] = self.decode(&token, ip)?;
                }
                '.' => {
                    let value = self.cells[self.pointer];
                    match self.config.output_mode {
                        Mode::Decimal => self.output.push_str(&value.to_string()),
                        Mode::Bytes => {
                            let ch = u32::try_from(value)
                                .ok()
                                .and_then(char::from_u32)
                                .ok_or(RuntimeError::BadCodePoint { value, ip })?;
                            self.output.push(ch);
                        }
                    }
                }
                '[' => {
                    // Zero cell skips the body: land on the partner ']' and
                    // let the cursor advance past it below.
                    if self.cells[self.pointer] == 0 {
                        ip = program.partner(ip);
                    }
                }
                ']' => {
                    // Nonzero cell re-enters: land on the partner '[' and
                    // advance into the body below.
                    if self.cells[self.pointer] != 0 {
                        ip = program.partner(ip);
                    }
                }
                _ => {} // parse admits only the eight instructions
            }
            ip += 1;
        }
        Ok(())
    }

    fn decode(&self, token: &str, ip: usize) -> Result<i64, RuntimeError> {
        match self.config.input_mode {
            Mode::Decimal => token.trim().parse().map_err(|_| RuntimeError::BadInput {
                token: token.to_string(),
                ip,
            }),
            Mode::Bytes => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c as i64),
                    _ => Err(RuntimeError::BadInput {
                        token: token.to_string(),
                        ip,
                    }),
                }
            }
        }
    }
}
