//! Sparsity-aware matrix arithmetic.
//!
//! Every routine only visits stored entries. Operands are borrowed and left untouched; the
//! result is a freshly allocated matrix. Integer arithmetic is checked and reports
//! [`MatrixError::Overflow`] instead of wrapping.

use std::collections::HashMap;

use log::trace;

use crate::error::{MatrixError, Result};
use crate::sparse::{SparseMatrix, Value};

/// Element-wise sum. Positions that cancel to zero are left out of the result.
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, Value::checked_add)
}

/// Element-wise difference `a - b`.
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, Value::checked_sub)
}

/// Matrix product `a * b`.
///
/// `b` is grouped by row once up front, so each stored entry `(i, k)` of `a` only meets the
/// stored entries of row `k` in `b`.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            a_dims: a.dimensions(),
            b_dims: b.dimensions(),
        });
    }

    let b_rows = b.rows_index();
    // Partial sums are kept wide so that only the final value has to fit in a `Value`
    let mut accumulated: HashMap<(usize, usize), i128> = HashMap::new();

    for (i, k, v1) in a.iter() {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };
        for &(j, v2) in b_row {
            let product = i128::from(v1) * i128::from(v2);
            let slot = accumulated.entry((i, j)).or_insert(0);
            *slot = slot
                .checked_add(product)
                .ok_or(MatrixError::Overflow { row: i, col: j })?;
        }
    }

    let mut result = SparseMatrix::zeros(a.nrows(), b.ncols());
    for ((row, col), sum) in accumulated {
        let value = Value::try_from(sum).map_err(|_| MatrixError::Overflow { row, col })?;
        result.put(row, col, value);
    }

    trace!(
        "multiply {:?} x {:?}: {} x {} entries -> {}",
        a.dimensions(),
        b.dimensions(),
        a.nonzero_count(),
        b.nonzero_count(),
        result.nonzero_count()
    );
    Ok(result)
}

/// Applies `op` over the union of stored keys of two equally shaped matrices.
fn combine<F>(a: &SparseMatrix, b: &SparseMatrix, op: F) -> Result<SparseMatrix>
where
    F: Fn(Value, Value) -> Option<Value>,
{
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::DimensionMismatch {
            a_dims: a.dimensions(),
            b_dims: b.dimensions(),
        });
    }

    let mut result = SparseMatrix::zeros(a.nrows(), a.ncols());
    for (row, col, value) in a.iter() {
        let combined = op(value, b.value_at(row, col)).ok_or(MatrixError::Overflow { row, col })?;
        result.put(row, col, combined);
    }
    // Keys only present in `b`
    for (row, col, value) in b.iter() {
        if a.value_at(row, col) == 0 {
            let combined = op(0, value).ok_or(MatrixError::Overflow { row, col })?;
            result.put(row, col, combined);
        }
    }

    trace!(
        "combine {:?}: {} + {} entries -> {}",
        a.dimensions(),
        a.nonzero_count(),
        b.nonzero_count(),
        result.nonzero_count()
    );
    Ok(result)
}
