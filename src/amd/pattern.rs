//! Conversion of host matrices into the symmetric adjacency structure
//! used by the elimination.

use super::{AmdError, ShapeError, TypeConversionWarning};
use crate::algebra::CscPattern;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Classification of a single matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValue {
    Zero,
    Nonzero,
    /// NaN or infinite.  Rejected.
    NonFinite,
    /// Not a number.  `present` decides whether it counts as an edge.
    NonNumeric { present: bool },
}

/// Types that can appear as entries of a dense input matrix.
pub trait PatternEntry: Debug {
    fn entry_value(&self) -> EntryValue;
}

macro_rules! impl_pattern_entry_int {
    ($($t:ty),*) => {$(
        impl PatternEntry for $t {
            fn entry_value(&self) -> EntryValue {
                if self.is_zero() {
                    EntryValue::Zero
                } else {
                    EntryValue::Nonzero
                }
            }
        }
    )*};
}
impl_pattern_entry_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_pattern_entry_float {
    ($($t:ty),*) => {$(
        impl PatternEntry for $t {
            fn entry_value(&self) -> EntryValue {
                if !Float::is_finite(*self) {
                    EntryValue::NonFinite
                } else if self.is_zero() {
                    EntryValue::Zero
                } else {
                    EntryValue::Nonzero
                }
            }
        }
    )*};
}
impl_pattern_entry_float!(f32, f64);

impl PatternEntry for bool {
    fn entry_value(&self) -> EntryValue {
        if *self {
            EntryValue::Nonzero
        } else {
            EntryValue::Zero
        }
    }
}

// Text that reads as a finite number is numeric.  Anything else is
// an edge iff it is non-empty.
impl PatternEntry for str {
    fn entry_value(&self) -> EntryValue {
        match self.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v.entry_value(),
            _ => EntryValue::NonNumeric {
                present: !self.is_empty(),
            },
        }
    }
}

impl PatternEntry for String {
    fn entry_value(&self) -> EntryValue {
        self.as_str().entry_value()
    }
}

impl<T: PatternEntry> PatternEntry for Option<T> {
    fn entry_value(&self) -> EntryValue {
        match self {
            Some(v) => v.entry_value(),
            None => EntryValue::NonNumeric { present: false },
        }
    }
}

impl<T: PatternEntry + ?Sized> PatternEntry for &T {
    fn entry_value(&self) -> EntryValue {
        (**self).entry_value()
    }
}

#[cfg(feature = "serde")]
impl PatternEntry for serde_json::Value {
    fn entry_value(&self) -> EntryValue {
        use serde_json::Value;
        match self {
            Value::Null => EntryValue::NonNumeric { present: false },
            Value::Bool(b) => b.entry_value(),
            Value::Number(x) => match x.as_f64() {
                Some(v) => v.entry_value(),
                None => EntryValue::NonNumeric { present: true },
            },
            Value::String(s) => s.entry_value(),
            Value::Array(a) => EntryValue::NonNumeric {
                present: !a.is_empty(),
            },
            Value::Object(o) => EntryValue::NonNumeric {
                present: !o.is_empty(),
            },
        }
    }
}

// rows must all have the same length, equal to the number of rows
fn check_square<I>(lengths: I, nrows: usize) -> Result<(), ShapeError>
where
    I: Iterator<Item = usize>,
{
    let mut expected = None;
    for (row, len) in lengths.enumerate() {
        match expected {
            None => expected = Some(len),
            Some(e) if e != len => {
                return Err(ShapeError::Ragged {
                    row,
                    len,
                    expected: e,
                })
            }
            _ => {}
        }
    }
    match expected {
        Some(cols) if cols != nrows => Err(ShapeError::NotSquare { rows: nrows, cols }),
        _ => Ok(()),
    }
}

/// Reads a dense square matrix into a sparse pattern.
///
/// Row `k` of the input becomes column `k` of the pattern, so each
/// column is sorted and duplicate free.
pub(crate) fn extract_rows<R, E>(
    rows: &[R],
) -> Result<(CscPattern, Vec<TypeConversionWarning>), AmdError>
where
    R: AsRef<[E]>,
    E: PatternEntry,
{
    let n = rows.len();
    check_square(rows.iter().map(|r| r.as_ref().len()), n)?;

    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    let mut warnings = Vec::new();
    colptr.push(0);

    for (k, row) in rows.iter().enumerate() {
        for (j, entry) in row.as_ref().iter().enumerate() {
            match entry.entry_value() {
                EntryValue::Zero => {}
                EntryValue::Nonzero => rowval.push(j),
                EntryValue::NonFinite => return Err(AmdError::NonFiniteEntry { row: k, col: j }),
                EntryValue::NonNumeric { present } => {
                    warnings.push(TypeConversionWarning {
                        row: k,
                        col: j,
                        value: format!("{:?}", entry),
                        present,
                    });
                    if present {
                        rowval.push(j);
                    }
                }
            }
        }
        colptr.push(rowval.len());
    }

    Ok((CscPattern::new(n, n, colptr, rowval), warnings))
}

/// Reads a JSON array of arrays into a sparse pattern.
#[cfg(feature = "serde")]
pub(crate) fn extract_json(
    value: &serde_json::Value,
) -> Result<(CscPattern, Vec<TypeConversionWarning>), AmdError> {
    let rows = value.as_array().ok_or(ShapeError::NotAnArray)?;

    let mut slices = Vec::with_capacity(rows.len());
    for (row, r) in rows.iter().enumerate() {
        let r = r.as_array().ok_or(ShapeError::NotTwoDimensional { row })?;
        if let Some(col) = r.iter().position(|x| x.is_array()) {
            return Err(ShapeError::TooManyDimensions { row, col }.into());
        }
        slices.push(r.as_slice());
    }

    extract_rows(&slices)
}

/// Undirected graph of A + A' without self loops, together with the
/// input statistics gathered while building it.
#[derive(Debug, Clone, Default)]
pub(crate) struct SymmetricPattern {
    pub adjacency: Vec<Vec<usize>>,
    pub nz: usize,
    pub nzdiag: usize,
    /// total length of all adjacency lists
    pub nz_a_plus_at: usize,
    pub symmetry: f64,
}

/// Builds the adjacency of A + A'.
///
/// `a` must be square with sorted, duplicate free columns.  Both
/// triangles are walked in step so that each off-diagonal pair is
/// seen once, and the lists are filled in a fixed order that the
/// downstream tie breaking depends on.
pub(crate) fn symmetrize(a: &CscPattern) -> SymmetricPattern {
    let n = a.n;
    let (colptr, rowval) = (&a.colptr, &a.rowval);

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    // tp[j] is the first unvisited entry of column j
    let mut tp = vec![0usize; n];
    let mut nzdiag = 0;
    let mut nzboth = 0;

    for k in 0..n {
        let p2 = colptr[k + 1];
        let mut p = colptr[k];
        while p < p2 {
            let j = rowval[p];
            if j < k {
                adjacency[j].push(k);
                adjacency[k].push(j);
                p += 1;
            } else {
                if j == k {
                    p += 1;
                    nzdiag += 1;
                }
                break;
            }

            // entries of column j above row k are only in the lower part
            let pj2 = colptr[j + 1];
            let mut pj = tp[j];
            while pj < pj2 {
                let i = rowval[pj];
                if i < k {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                    pj += 1;
                } else {
                    if i == k {
                        pj += 1;
                        nzboth += 1;
                    }
                    break;
                }
            }
            tp[j] = pj;
        }
        tp[k] = p;
    }

    // whatever is left is strictly lower and unmatched
    for j in 0..n {
        for &i in &rowval[tp[j]..colptr[j + 1]] {
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
    }

    let nz = a.nnz();
    let symmetry = if nz == nzdiag {
        1.0
    } else {
        (2 * nzboth) as f64 / (nz - nzdiag) as f64
    };
    let nz_a_plus_at = adjacency.iter().map(|l| l.len()).sum();

    SymmetricPattern {
        adjacency,
        nz,
        nzdiag,
        nz_a_plus_at,
        symmetry,
    }
}
