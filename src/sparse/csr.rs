use nalgebra_sparse::{CooMatrix, CsrMatrix};

use crate::error::{MatrixError, Result};

use super::{SparseMatrix, Value};

impl From<&SparseMatrix> for CsrMatrix<Value> {
    fn from(matrix: &SparseMatrix) -> Self {
        CsrMatrix::from(&CooMatrix::from(matrix))
    }
}

/// Explicitly stored zeros in the CSR data are dropped.
impl TryFrom<&CsrMatrix<Value>> for SparseMatrix {
    type Error = MatrixError;

    fn try_from(csr: &CsrMatrix<Value>) -> Result<Self> {
        let mut matrix = SparseMatrix::with_dimensions(csr.nrows(), csr.ncols())?;
        for (row, col, &value) in csr.triplet_iter() {
            matrix.put(row, col, value);
        }
        Ok(matrix)
    }
}
