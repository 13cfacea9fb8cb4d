//! Injectable input/output channels.
//!
//! The execution engine never touches stdin or stdout itself: `,` pulls one
//! token at a time from an [`InputSource`], and the accumulated output is
//! handed to an [`OutputSink`] at the end of a successful run. The CLI wires
//! up the terminal implementations; tests script their own.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Supplies one token per `,` instruction.
///
/// A token is a single character in byte mode or a textual integer in
/// decimal mode; the session decides how to decode it.
pub trait InputSource {
    /// Next input token, or `None` when the source is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Receives the full accumulated output once, at normal termination.
pub trait OutputSink {
    fn deliver(&mut self, output: &str) -> io::Result<()>;
}

/// Interactive input: prompts on stderr and reads one line per token.
///
/// The prompt goes to stderr so program output on stdout stays clean enough
/// to pipe.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        eprint!("Input: ");
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None); // EOF
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A fixed sequence of tokens, consumed front to back. For tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }
}

/// Writes delivered output to stdout and flushes.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn deliver(&mut self, output: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()
    }
}

/// Captures delivered output in memory. For tests.
#[derive(Debug, Default)]
pub struct StringSink {
    captured: String,
}

impl StringSink {
    pub fn as_str(&self) -> &str {
        &self.captured
    }

    pub fn into_string(self) -> String {
        self.captured
    }
}

impl OutputSink for StringSink {
    fn deliver(&mut self, output: &str) -> io::Result<()> {
        self.captured.push_str(output);
        Ok(())
    }
}
