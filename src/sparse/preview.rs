//! Human-readable rendering of the top-left corner of a matrix.

use std::fmt;

use super::SparseMatrix;

/// Size of the window rendered by [`SparseMatrix::preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    pub max_rows: usize,
    pub max_cols: usize,
    /// Minimum width of each right-aligned cell
    pub cell_width: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_cols: 10,
            cell_width: 5,
        }
    }
}

impl SparseMatrix {
    /// Renders at most `max_rows x max_cols` cells, followed by `...` when the matrix was cut off.
    pub fn preview(&self, config: &PreviewConfig) -> String {
        let (rows, cols) = self.dimensions();
        let shown_rows = rows.min(config.max_rows);
        let shown_cols = cols.min(config.max_cols);

        let mut out = format!("Matrix ({rows}x{cols})\n");
        for row in 0..shown_rows {
            let line = (0..shown_cols)
                .map(|col| format!("{:>width$}", self.value_at(row, col), width = config.cell_width))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        if rows > config.max_rows || cols > config.max_cols {
            out.push_str("...\n");
        }
        out
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preview(&PreviewConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_small() {
        let mut matrix = SparseMatrix::new(2, 3).unwrap();
        matrix.set(0, 0, 5).unwrap();
        matrix.set(1, 2, -12).unwrap();

        let expected = "Matrix (2x3)\n    5     0     0\n    0     0   -12\n";
        assert_eq!(matrix.preview(&PreviewConfig::default()), expected);
        assert_eq!(matrix.to_string(), expected);
    }

    #[test]
    fn test_preview_truncates() {
        let mut matrix = SparseMatrix::new(1_000_000, 1_000_000).unwrap();
        matrix.set(999_999, 999_999, 1).unwrap();
        matrix.set(1, 1, 8).unwrap();

        let config = PreviewConfig {
            max_rows: 2,
            max_cols: 2,
            cell_width: 2,
        };
        assert_eq!(
            matrix.preview(&config),
            "Matrix (1000000x1000000)\n 0  0\n 0  8\n...\n"
        );
    }

    #[test]
    fn test_preview_empty_shape() {
        let matrix = SparseMatrix::new(0, 4).unwrap();
        assert_eq!(matrix.preview(&PreviewConfig::default()), "Matrix (0x4)\n");
    }
}
