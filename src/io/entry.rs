//! Text codec for a single `(row, col, value)` entry line.
//!
//! The accepted shape is exact: open paren, integer, `", "`, integer, `", "`, integer, close
//! paren. Only whitespace surrounding the whole line is tolerated.

use std::fmt;

use crate::error::{MatrixError, Result};
use crate::sparse::{Index, Value};

const SEPARATOR: &str = ", ";

/// One decoded entry line. Indices are kept signed so that bounds are checked by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub row: Index,
    pub col: Index,
    pub value: Value,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_entry(self.row, self.col, self.value))
    }
}

/// Parses one entry line such as `(3, 14, -2)`.
pub fn decode_line(line: &str) -> Result<Entry> {
    let malformed = || MatrixError::format(line);

    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = inner.split(SEPARATOR);
    let mut next_integer = || -> Result<i64> {
        fields
            .next()
            .and_then(parse_integer)
            .ok_or_else(malformed)
    };
    let row = next_integer()?;
    let col = next_integer()?;
    let value = next_integer()?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Entry { row, col, value })
}

/// Formats an entry as `(row, col, value)`.
pub fn encode_entry(row: Index, col: Index, value: Value) -> String {
    format!("({row}{SEPARATOR}{col}{SEPARATOR}{value})")
}

/// Base-10 integer with an optional leading sign and at least one digit.
pub(crate) fn parse_integer(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
