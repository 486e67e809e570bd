#![forbid(unsafe_code)]

use std::fmt;

/// An unrecognized name for a style enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What was being parsed, e.g. `"border style"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted spellings, e.g. `"ascii|single|double"`.
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} `{}` (expected {})",
            self.kind, self.value, self.expected
        )
    }
}

impl std::error::Error for ParseError {}
