//! Source sanitization and bracket validation.
//!
//! A [`Program`] is built once from raw source text: everything outside the
//! eight-instruction alphabet is dropped, bracket balance is checked, and
//! matching bracket positions are precomputed so the execution loop can jump
//! in O(1) without rescanning.

/// Errors detected before any instruction executes.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    /// The counts of `[` and `]` differ.
    #[error("bracket count doesn't match ({open} '[' vs {close} ']')")]
    BracketMismatch { open: usize, close: usize },

    /// A `]` that closes no open loop (balanced counts, bad nesting).
    #[error("']' at instruction {ip} closes no loop")]
    StrayClose { ip: usize },

    /// A `[` that is never closed.
    #[error("'[' at instruction {ip} is never closed")]
    StrayOpen { ip: usize },
}

/// Keep only the eight instruction characters, preserving their order.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| matches!(c, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']'))
        .collect()
}

/// A validated instruction sequence with precomputed loop jump targets.
///
/// Immutable once built; one `Program` can back any number of runs.
#[derive(Debug)]
pub struct Program {
    ops: Vec<char>,
    // jumps[i] holds the matching bracket index for '[' or ']' at i,
    // and None for the other six instructions.
    jumps: Vec<Option<usize>>,
}

impl Program {
    /// Sanitize and validate `raw` into an executable program.
    ///
    /// Validation is strict: equal bracket counts are required, and so is
    /// well-formed nesting, so every bracket has a known partner before the
    /// first instruction runs.
    pub fn parse(raw: &str) -> Result<Self, StructuralError> {
        let ops: Vec<char> = sanitize(raw).chars().collect();

        let open = ops.iter().filter(|&&c| c == '[').count();
        let close = ops.iter().filter(|&&c| c == ']').count();
        if open != close {
            return Err(StructuralError::BracketMismatch { open, close });
        }

        let mut jumps: Vec<Option<usize>> = vec![None; ops.len()];
        let mut stack: Vec<usize> = Vec::new();
        for (i, &c) in ops.iter().enumerate() {
            if c == '[' {
                stack.push(i);
            } else if c == ']' {
                let Some(open_ip) = stack.pop() else {
                    return Err(StructuralError::StrayClose { ip: i });
                };
                jumps[open_ip] = Some(i);
                jumps[i] = Some(open_ip);
            }
        }
        if let Some(&ip) = stack.last() {
            return Err(StructuralError::StrayOpen { ip });
        }

        Ok(Self { ops, jumps })
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Instruction at `ip`.
    pub fn op(&self, ip: usize) -> char {
        self.ops[ip]
    }

    /// Partner index for the bracket at `ip`.
    pub fn partner(&self, ip: usize) -> usize {
        self.jumps[ip].expect("validated bracket")
    }
}
