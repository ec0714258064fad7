//! Symbolic sparse matrix types and permutation helpers.
//!
//! The ordering engine only ever looks at where the nonzeros of a matrix
//! are, never at their values, so the sparse type used throughout is a
//! value-free compressed sparse column pattern.

mod csc;
pub use csc::*;
mod error_types;
pub use error_types::*;
mod utils;
pub use utils::*;

/// Shape information for matrix types
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if rows == columns
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
