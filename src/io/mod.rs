//! Plain-text matrix files.
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (row, col, value)
//! ...
//! ```
//!
//! Blank lines are skipped anywhere. The two header lines must come first, in this order.
//! Each entry line goes through [`SparseMatrix::set`], so a later line for the same position
//! replaces an earlier one and a zero value removes it.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{MatrixError, Result};
use crate::sparse::{Index, SparseMatrix};

pub mod entry;

pub use entry::{decode_line, encode_entry, Entry};

const ROWS_KEY: &str = "rows";
const COLS_KEY: &str = "cols";

/// Reads a matrix from a text stream.
pub fn load<R: BufRead>(reader: R) -> Result<SparseMatrix> {
    let mut lines = NonBlankLines::new(reader);

    let rows = read_header(&mut lines, ROWS_KEY)?;
    let cols = read_header(&mut lines, COLS_KEY)?;
    let mut matrix = SparseMatrix::new(rows, cols)?;

    while let Some((number, line)) = lines.next_line()? {
        let entry = decode_line(&line).map_err(|e| e.at_line(number))?;
        matrix.set(entry.row, entry.col, entry.value)?;
    }
    Ok(matrix)
}

/// Writes a matrix to a text stream, entries in row-major order.
pub fn save<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    let (rows, cols) = matrix.dimensions();
    writeln!(writer, "{ROWS_KEY}={rows}")?;
    writeln!(writer, "{COLS_KEY}={cols}")?;
    for (row, col, value) in matrix.sorted_entries() {
        // Dimensions came from an `Index`, so both indices fit
        writeln!(writer, "{}", encode_entry(row as Index, col as Index, value))?;
    }
    writer.flush()?;
    Ok(())
}

/// Opens `path` and reads a matrix from it.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatrixError::from(e).with_path(path))?;
    let matrix = load(BufReader::new(file)).map_err(|e| e.with_path(path))?;

    debug!(
        "Loaded {}x{} matrix with {} entries from {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nonzero_count(),
        path.display()
    );
    Ok(matrix)
}

/// Creates (or truncates) `path` and writes the matrix to it.
pub fn save_matrix(matrix: &SparseMatrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MatrixError::from(e).with_path(path))?;
    save(matrix, BufWriter::new(file)).map_err(|e| e.with_path(path))?;

    debug!(
        "Saved {}x{} matrix with {} entries to {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nonzero_count(),
        path.display()
    );
    Ok(())
}

pub fn load_str(text: &str) -> Result<SparseMatrix> {
    load(text.as_bytes())
}

pub fn save_to_string(matrix: &SparseMatrix) -> Result<String> {
    let mut buffer = Vec::new();
    save(matrix, &mut buffer)?;
    // Every byte written above is ASCII
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Reads `key=<integer>` from the next non-blank line.
fn read_header<R: BufRead>(lines: &mut NonBlankLines<R>, key: &str) -> Result<Index> {
    let (number, line) = lines.next_line()?.ok_or_else(|| {
        MatrixError::format(String::new()).at_line(lines.line_number() + 1)
    })?;

    let value = line
        .trim()
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .and_then(entry::parse_integer)
        .ok_or_else(|| MatrixError::format(line.as_str()).at_line(number))?;

    if value < 0 {
        return Err(MatrixError::InvalidDimension { value });
    }
    Ok(value)
}

/// Line reader that skips blank lines and remembers 1-based line numbers.
struct NonBlankLines<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> NonBlankLines<R> {
    fn new(reader: R) -> Self {
        NonBlankLines {
            reader,
            line_number: 0,
        }
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    /// A line that is not valid UTF-8 is a `Format` error for that line.
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            let mut bytes = Vec::new();
            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            let mut line = String::from_utf8(bytes).map_err(|e| {
                MatrixError::format(String::from_utf8_lossy(e.as_bytes()).trim_end())
                    .at_line(self.line_number)
            })?;
            if !line.trim().is_empty() {
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                return Ok(Some((self.line_number, line)));
            }
        }
    }
}
