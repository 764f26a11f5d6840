use std::ops::AddAssign;

use anyhow::anyhow;
use num_traits::{CheckedAdd, NumCast, PrimInt, Unsigned, Zero};

use super::{MatrixNonZero, MatrixSum, SparseMatrix};

impl MatrixNonZero for SparseMatrix {
    fn nonzero_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        let mut result = vec![T::zero(); self.ncols()];
        for (_, col, _) in self.iter() {
            result[col] = result[col]
                .checked_add(&T::one())
                .ok_or_else(|| anyhow!("Count overflow in column {}", col))?;
        }
        Ok(result)
    }

    fn nonzero_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: PrimInt + Unsigned + Zero + AddAssign,
    {
        let mut result = vec![T::zero(); self.nrows()];
        for (row, _, _) in self.iter() {
            result[row] = result[row]
                .checked_add(&T::one())
                .ok_or_else(|| anyhow!("Count overflow in row {}", row))?;
        }
        Ok(result)
    }
}

impl MatrixSum for SparseMatrix {
    fn sum_col<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: NumCast,
    {
        let mut sums = vec![0i128; self.ncols()];
        for (_, col, value) in self.iter() {
            sums[col] = sums[col]
                .checked_add(value.into())
                .ok_or_else(|| anyhow!("Sum overflow in column {}", col))?;
        }
        cast_sums(sums)
    }

    fn sum_row<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: NumCast,
    {
        let mut sums = vec![0i128; self.nrows()];
        for (row, _, value) in self.iter() {
            sums[row] = sums[row]
                .checked_add(value.into())
                .ok_or_else(|| anyhow!("Sum overflow in row {}", row))?;
        }
        cast_sums(sums)
    }
}

/// Sums are exact in `i128`; only the final totals are converted to the target type.
fn cast_sums<T: NumCast>(sums: Vec<i128>) -> anyhow::Result<Vec<T>> {
    sums.into_iter()
        .map(|sum| T::from(sum).ok_or_else(|| anyhow!("Failed to convert to target type")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_matrix() -> SparseMatrix {
        // [1 0 2]
        // [0 0 0]
        // [3 4 0]
        // [0 5 6]
        let mut matrix = SparseMatrix::new(4, 3).unwrap();
        for &(r, c, v) in &[(0, 0, 1), (0, 2, 2), (2, 0, 3), (2, 1, 4), (3, 1, 5), (3, 2, 6)] {
            matrix.set(r, c, v).unwrap();
        }
        matrix
    }

    #[test]
    fn test_nonzero_col() {
        let matrix = create_test_matrix();
        let result: Vec<u32> = matrix.nonzero_col().unwrap();
        assert_eq!(result, vec![2, 2, 2]);
    }

    #[test]
    fn test_nonzero_row() {
        let matrix = create_test_matrix();
        let result: Vec<u32> = matrix.nonzero_row().unwrap();
        assert_eq!(result, vec![2, 0, 2, 2]);
    }

    #[test]
    fn test_different_integer_types() {
        let matrix = create_test_matrix();

        let result_u8: Vec<u8> = matrix.nonzero_col().unwrap();
        assert_eq!(result_u8, vec![2, 2, 2]);

        let result_u64: Vec<u64> = matrix.nonzero_row().unwrap();
        assert_eq!(result_u64, vec![2, 0, 2, 2]);
    }

    #[test]
    fn test_sum_col_and_row() {
        let matrix = create_test_matrix();

        let cols: Vec<i64> = matrix.sum_col().unwrap();
        assert_eq!(cols, vec![4, 9, 8]);

        let rows: Vec<f64> = matrix.sum_row().unwrap();
        assert_relative_eq!(rows[0], 3.0);
        assert_relative_eq!(rows[1], 0.0);
        assert_relative_eq!(rows[2], 7.0);
        assert_relative_eq!(rows[3], 11.0);
    }

    #[test]
    fn test_sum_conversion_failure() {
        let mut matrix = SparseMatrix::new(1, 1).unwrap();
        matrix.set(0, 0, 1_000).unwrap();
        assert!(matrix.sum_row::<u8>().is_err());

        matrix.set(0, 0, -1).unwrap();
        assert!(matrix.sum_col::<u32>().is_err());
    }

    #[test]
    fn test_sum_exceeding_value_range() {
        let mut matrix = SparseMatrix::new(2, 3).unwrap();
        matrix.set(0, 0, i64::MAX).unwrap();
        matrix.set(0, 1, 1).unwrap();

        assert!(matrix.sum_row::<i64>().is_err());
        let wide: Vec<i128> = matrix.sum_row().unwrap();
        assert_eq!(wide, vec![i64::MAX as i128 + 1, 0]);
        let float: Vec<f64> = matrix.sum_row().unwrap();
        assert_relative_eq!(float[0], 9.223372036854775808e18);

        // Totals that fit are exact regardless of the order entries are visited in
        matrix.set(0, 2, -1).unwrap();
        let exact: Vec<i64> = matrix.sum_row().unwrap();
        assert_eq!(exact, vec![i64::MAX, 0]);
    }

    #[test]
    fn test_nonzero_count_overflow() {
        let mut matrix = SparseMatrix::new(300, 1).unwrap();
        for r in 0..300 {
            matrix.set(r, 0, 1).unwrap();
        }
        assert!(matrix.nonzero_col::<u8>().is_err());
        assert_eq!(matrix.nonzero_col::<u16>().unwrap(), vec![300]);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SparseMatrix::new(0, 0).unwrap();
        assert!(matrix.nonzero_col::<u32>().unwrap().is_empty());
        assert!(matrix.nonzero_row::<u32>().unwrap().is_empty());
        assert!(matrix.sum_row::<i64>().unwrap().is_empty());
    }
}
