//! Coordinate-keyed sparse matrix storage.
//!
//! A [`SparseMatrix`] keeps only its non-zero entries in a map from `(row, col)` to value.
//! Reading a position with no stored entry yields zero, and writing zero removes the entry,
//! so the number of stored entries always equals the number of non-zero positions.

use std::collections::HashMap;
use std::ops::AddAssign;

use num_traits::{NumCast, PrimInt, Unsigned, Zero};

use crate::error::{MatrixError, Result};

pub mod coo;
pub mod csr;
pub mod preview;
mod stats;

pub use preview::PreviewConfig;

/// Signed index type accepted at the API boundary. Negative indices are rejected as out of bounds.
pub type Index = i64;

/// Element type. Values are exact integers.
pub type Value = i64;

/// Sparse integer matrix with fixed dimensions.
///
/// Storage is proportional to the number of non-zero entries, never to `rows * cols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), Value>,
}

impl SparseMatrix {
    /// Creates an empty matrix, failing with `InvalidDimension` when either dimension is negative.
    pub fn new(rows: Index, cols: Index) -> Result<Self> {
        let rows = usize::try_from(rows).map_err(|_| MatrixError::InvalidDimension { value: rows })?;
        let cols = usize::try_from(cols).map_err(|_| MatrixError::InvalidDimension { value: cols })?;
        Ok(Self::zeros(rows, cols))
    }

    /// Creates an empty matrix from dimensions known to fit in an `Index`.
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(Index::try_from(rows).is_ok() && Index::try_from(cols).is_ok());
        SparseMatrix {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Like [`SparseMatrix::new`] for unsigned dimensions. Anything above `Index::MAX` is rejected,
    /// reported with the value it wraps to.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self> {
        let check = |dim: usize| {
            Index::try_from(dim).map_err(|_| MatrixError::InvalidDimension { value: dim as Index })
        };
        check(rows)?;
        check(cols)?;
        Ok(Self::zeros(rows, cols))
    }

    /// Returns the value at `(row, col)`, which is zero when nothing is stored there.
    pub fn get(&self, row: Index, col: Index) -> Result<Value> {
        let key = self.check_bounds(row, col)?;
        Ok(self.entries.get(&key).copied().unwrap_or(0))
    }

    /// Writes `value` at `(row, col)`. Writing zero removes the stored entry.
    pub fn set(&mut self, row: Index, col: Index, value: Value) -> Result<()> {
        let (row, col) = self.check_bounds(row, col)?;
        self.put(row, col, value);
        Ok(())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) entries.
    pub fn nonzero_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of positions holding a non-zero value. An empty shape has density `0.0`.
    pub fn density(&self) -> f64 {
        let positions = self.rows as f64 * self.cols as f64;
        if positions == 0.0 {
            return 0.0;
        }
        self.entries.len() as f64 / positions
    }

    /// Iterates over stored entries as `(row, col, value)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Value)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries in row-major order.
    pub fn sorted_entries(&self) -> Vec<(usize, usize, Value)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Groups stored entries by row: `row -> [(col, value)]`. Rows without entries are absent.
    pub fn rows_index(&self) -> HashMap<usize, Vec<(usize, Value)>> {
        let mut index: HashMap<usize, Vec<(usize, Value)>> = HashMap::new();
        for (row, col, value) in self.iter() {
            index.entry(row).or_default().push((col, value));
        }
        index
    }

    /// Raw value lookup for a key already known to be in bounds.
    pub(crate) fn value_at(&self, row: usize, col: usize) -> Value {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Insert-or-remove for a key already known to be in bounds.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Value) {
        debug_assert!(row < self.rows && col < self.cols);
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    fn check_bounds(&self, row: Index, col: Index) -> Result<(usize, usize)> {
        let out_of_bounds = || MatrixError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        };
        let r = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds())?;
        if r >= self.rows || c >= self.cols {
            return Err(out_of_bounds());
        }
        Ok((r, c))
    }
}

pub trait MatrixNonZero {
    /// Number of stored entries in each column
    fn nonzero_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;

    /// Number of stored entries in each row
    fn nonzero_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign;
}

pub trait MatrixSum {
    /// Exact column totals converted to `T`. Fails when a total does not fit.
    fn sum_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: NumCast;

    fn sum_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: NumCast;
}
