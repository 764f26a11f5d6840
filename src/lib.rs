pub mod arithmetic;
pub mod error;
pub mod io;
pub mod sparse;

pub use arithmetic::{add, multiply, subtract};
pub use error::{MatrixError, Result};
pub use io::{decode_line, encode_entry, load, load_matrix, load_str, save, save_matrix, save_to_string, Entry};
pub use sparse::{Index, MatrixNonZero, MatrixSum, PreviewConfig, SparseMatrix, Value};
