#![forbid(unsafe_code)]

use std::fmt;

use boxgrid_core::ParseError;

use crate::cell::CellPos;

/// Grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "row",
            Self::Columns => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the table mutation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A span of zero was requested for the cell at `pos`.
    ZeroSpan { pos: CellPos, axis: Axis },
    /// A style name could not be parsed.
    Parse(ParseError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSpan { pos, axis } => {
                write!(f, "cell {pos}: {axis} span must be at least 1")
            }
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::ZeroSpan { .. } => None,
        }
    }
}

impl From<ParseError> for TableError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
