//! Errors raised while deriving a [`BlockGrid`](crate::BlockGrid).

use std::fmt;

/// Errors that can occur when building a grid from raw markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows, or its first row has no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
