//! Error types for sparse matrix operations

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the store, the codec, the loader/saver and the arithmetic routines.
///
/// None of these are recovered from internally; they surface to the caller as-is.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A header or entry line does not match the text format
    #[error("malformed line{}: {line_content:?}", line_suffix(.line_number))]
    Format {
        line_content: String,
        line_number: Option<usize>,
    },

    /// A negative row or column count
    #[error("invalid dimension {value}: matrix dimensions must be non-negative")]
    InvalidDimension { value: i64 },

    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error(
        "dimension mismatch: {}x{} and {}x{} are incompatible",
        .a_dims.0, .a_dims.1, .b_dims.0, .b_dims.1
    )]
    DimensionMismatch {
        a_dims: (usize, usize),
        b_dims: (usize, usize),
    },

    /// Checked integer arithmetic overflowed while computing the value at `(row, col)`
    #[error("integer overflow while computing entry ({row}, {col})")]
    Overflow { row: usize, col: usize },

    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for sparse matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn format(line_content: impl Into<String>) -> Self {
        MatrixError::Format {
            line_content: line_content.into(),
            line_number: None,
        }
    }

    /// Tags a `Format` error with the 1-based line it came from. Other kinds pass through.
    pub(crate) fn at_line(self, number: usize) -> Self {
        match self {
            MatrixError::Format { line_content, .. } => MatrixError::Format {
                line_content,
                line_number: Some(number),
            },
            other => other,
        }
    }

    /// Attaches the file path to an `Io` error raised while streaming.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            MatrixError::Io { source, .. } => MatrixError::Io {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for MatrixError {
    fn from(source: std::io::Error) -> Self {
        MatrixError::Io { path: None, source }
    }
}

fn line_suffix(line_number: &Option<usize>) -> String {
    match line_number {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" on {}", p.display()),
        None => String::new(),
    }
}
