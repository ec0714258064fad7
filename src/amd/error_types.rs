use crate::algebra::SparseFormatError;
use thiserror::Error;

/// Error type returned when the input is not a square two dimensional array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Input is not an array at all
    #[error("Expected a 2 dimensional array")]
    NotAnArray,
    /// Row `row` is a scalar rather than a sequence
    #[error("Expected a 2 dimensional array, row {row} is not a sequence")]
    NotTwoDimensional { row: usize },
    /// Entry holds a nested array
    #[error("Expected a 2 dimensional array, entry ({row}, {col}) is itself an array")]
    TooManyDimensions { row: usize, col: usize },
    /// Rows have different lengths
    #[error("Row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Equal length rows, but not a square matrix
    #[error("Expected a square matrix, got {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Error type returned by the ordering entry points.
#[derive(Error, Debug)]
pub enum AmdError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("Unsupported dtype or NaN/Inf encountered at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },
    #[error(transparent)]
    Format(#[from] SparseFormatError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Recoverable problem found while reading a dense input.
///
/// The entry at `(row, col)` could not be read as a number.  It was
/// treated as an edge if `present` is true and ignored otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConversionWarning {
    pub row: usize,
    pub col: usize,
    /// debug representation of the offending value
    pub value: String,
    pub present: bool,
}

impl std::fmt::Display for TypeConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "entry ({}, {}) = {} is not numeric, treated as {}",
            self.row,
            self.col,
            self.value,
            if self.present { "nonzero" } else { "zero" }
        )
    }
}
