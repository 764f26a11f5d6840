//! Conversions between [`SparseMatrix`] and nalgebra-sparse's coordinate format.

use std::collections::HashMap;

use nalgebra_sparse::CooMatrix;

use crate::error::{MatrixError, Result};

use super::{SparseMatrix, Value};

impl From<&SparseMatrix> for CooMatrix<Value> {
    fn from(matrix: &SparseMatrix) -> Self {
        let mut coo = CooMatrix::new(matrix.nrows(), matrix.ncols());
        for (row, col, value) in matrix.sorted_entries() {
            coo.push(row, col, value);
        }
        coo
    }
}

/// Duplicate triplets are summed, as nalgebra-sparse does when compressing a COO matrix.
/// Positions that sum to zero are not stored, and only the final sum has to fit in a `Value`.
impl TryFrom<&CooMatrix<Value>> for SparseMatrix {
    type Error = MatrixError;

    fn try_from(coo: &CooMatrix<Value>) -> Result<Self> {
        let mut matrix = SparseMatrix::with_dimensions(coo.nrows(), coo.ncols())?;

        let mut sums: HashMap<(usize, usize), i128> = HashMap::with_capacity(coo.nnz());
        for (row, col, &value) in coo.triplet_iter() {
            let slot = sums.entry((row, col)).or_insert(0);
            *slot = slot
                .checked_add(i128::from(value))
                .ok_or(MatrixError::Overflow { row, col })?;
        }

        for ((row, col), sum) in sums {
            let value = Value::try_from(sum).map_err(|_| MatrixError::Overflow { row, col })?;
            matrix.put(row, col, value);
        }
        Ok(matrix)
    }
}
