//! Error type shared by the matrix container, the algorithms and the text codec.

use thiserror::Error;

/// Errors raised by matrix construction, element access and the linear
/// algebra routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Dimension mismatch or wrong shape for an operation.
    #[error("shape error: {reason}")]
    Shape {
        /// Description of the offending shape
        reason: String,
    },

    /// A pivot required for a unique result was numerically zero.
    #[error("singular matrix: zero pivot in column {index} (value: {value})")]
    SingularMatrix {
        /// Column of the failing pivot
        index: usize,
        /// Magnitude found at the pivot position
        value: f64,
    },

    /// The linear system has no solution at all.
    #[error("inconsistent system: row {row} reduces to 0 = non-zero")]
    InconsistentSystem {
        /// Row of the eliminated system that is contradictory
        row: usize,
    },

    /// Element access outside of the logical shape.
    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    Index {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Malformed pipe-delimited text.
    #[error("parse error at token {position}: {reason}")]
    Parse {
        /// Zero-based index of the offending token
        position: usize,
        /// Description of what went wrong
        reason: String,
    },
}

impl LinalgError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        LinalgError::Shape {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(position: usize, reason: impl Into<String>) -> Self {
        LinalgError::Parse {
            position,
            reason: reason.into(),
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, LinalgError::Shape { .. })
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, LinalgError::SingularMatrix { .. })
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(self, LinalgError::InconsistentSystem { .. })
    }

    pub fn is_index(&self) -> bool {
        matches!(self, LinalgError::Index { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LinalgError::Parse { .. })
    }
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
