use std::error::Error;
use std::fmt;

/// Shape disagreement between two matrices or between a shape and a buffer.
///
/// Returned by the checked arithmetic surface (`Matrix::try_add` and friends)
/// and by `Matrix::from_shape_vec`. The permissive operators log the same
/// condition and fall back to a zero-filled result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Two operands with incompatible extents.
    Mismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A requested shape does not cover the provided buffer.
    BufferLength {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Mismatch { left, right } => write!(
                f,
                "shape mismatch: ({}, {}) vs ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            ShapeError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for ShapeError {}

/// Failure while parsing the bracketed textual matrix format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token count does not divide evenly across the counted rows.
    RaggedRows { rows: usize, tokens: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::RaggedRows { rows, tokens } => write!(
                f,
                "the number of columns are not equal in each row ({} tokens over {} rows)",
                tokens, rows
            ),
        }
    }
}

impl Error for ParseError {}
