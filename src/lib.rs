//! A Brainfuck interpreter with byte and decimal I/O modes.
//!
//! The interpreter operates on a fixed tape of integer cells (30,000 by
//! default) with a single data pointer.
//!
//! Features and behaviors:
//! - Tape cells are wrapping `i64` values initialized to 0, so `-` on a
//!   fresh cell yields -1 rather than wrapping at 255.
//! - Strict pointer bounds: moving left from cell 0 or right past the last
//!   cell returns an error.
//! - Two input modes for `,`: byte mode stores the code point of a single
//!   character, decimal mode parses a textual integer.
//! - Two output modes for `.`: byte mode renders the cell as a character,
//!   decimal mode renders its decimal text.
//! - Output accumulates during the run and is delivered to the sink once at
//!   normal termination; a failed run delivers nothing. Decimal output gets
//!   a trailing newline, byte output does not.
//! - Comments are free: any character outside `><,.[]+-` is stripped before
//!   execution.
//! - Brackets are validated up front; balanced-but-misnested programs are
//!   rejected before any instruction runs.
//!
//! Quick start:
//!
//! ```
//! use tulkki::{Session, SessionConfig, ScriptedInput, StringSink};
//!
//! let code = "
//!     ++++++++++[>+++++++>++++++++++>+++>+<<<<-]
//!     >++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.
//! ";
//! let mut session = Session::new(SessionConfig::default());
//! let mut input = ScriptedInput::default();
//! let mut sink = StringSink::default();
//! session.run(code, &mut input, &mut sink).expect("program should run");
//! assert_eq!(sink.as_str(), "Hello World!");
//! ```

pub mod channel;
pub mod program;
pub mod session;

pub use channel::{InputSource, OutputSink, ScriptedInput, StdinInput, StdoutSink, StringSink};
pub use program::{Program, StructuralError};
pub use session::{Mode, RuntimeError, Session, SessionConfig, DEFAULT_CELL_COUNT};

/// Any failure the interpreter can report, split by when it is detected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected during sanitization/validation, before any instruction ran.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Aborted mid-run; accumulated output is discarded.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
