use crate::algebra::{ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sparsity pattern in standard Compressed Sparse Column (CSC) format
///
/// Only the positions of the nonzeros are stored.
///
/// __Example usage__ : To construct the pattern of the 3 x 3 matrix
/// ```text
/// A = [x  x  x]
///     [x  .  x]
///     [.  x  x]
/// ```
///
/// ```no_run
/// use amdorder::algebra::CscPattern;
///
/// let A = CscPattern::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CscPattern {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the length
    /// of the `rowval` field.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
}

/// Arrangement of the row indices within the columns of a valid pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// row indices strictly increase within every column
    Sorted,
    /// some column has unsorted or repeated row indices
    Jumbled,
}

impl CscPattern {
    /// `CscPattern` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  Row bounds and ordering are checked by
    /// [`check_format`](CscPattern::check_format).
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>) -> Self {
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscPattern {
            m,
            n,
            colptr,
            rowval,
        }
    }

    /// Pattern of the identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        CscPattern::new(n, n, colptr, rowval)
    }

    /// Square `n x n` pattern from a list of `(row, col)` positions.
    ///
    /// Positions may be given in any order and may repeat.  The
    /// result has sorted, duplicate free columns.
    ///
    /// # Panics
    /// Panics if a position is out of bounds.
    pub fn from_entries(n: usize, entries: &[(usize, usize)]) -> Self {
        let mut colptr = vec![0; n + 1];
        for &(r, c) in entries {
            assert!(r < n && c < n);
            colptr[c + 1] += 1;
        }
        for c in 0..n {
            colptr[c + 1] += colptr[c];
        }
        let mut next = colptr.clone();
        let mut rowval = vec![0; entries.len()];
        for &(r, c) in entries {
            rowval[next[c]] = r;
            next[c] += 1;
        }

        // sort and compact every column in place
        let mut nz = 0;
        for c in 0..n {
            let col = &mut rowval[colptr[c]..colptr[c + 1]];
            col.sort_unstable();
            let start = nz;
            for p in colptr[c]..colptr[c + 1] {
                let r = rowval[p];
                if nz == start || rowval[nz - 1] != r {
                    rowval[nz] = r;
                    nz += 1;
                }
            }
            colptr[c] = start;
        }
        colptr[n] = nz;
        rowval.truncate(nz);

        CscPattern::new(n, n, colptr, rowval)
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// row indices stored in column `col`
    pub fn column(&self, col: usize) -> &[usize] {
        &self.rowval[self.colptr[col]..self.colptr[col + 1]]
    }

    /// Check that pattern data is usable as an ordering input.
    ///
    /// Unsorted or repeated row indices are allowed and reported
    /// as [`ColumnLayout::Jumbled`].
    pub fn check_format(&self) -> Result<ColumnLayout, SparseFormatError> {
        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr[0] != 0 {
            return Err(SparseFormatError::BadColptr);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        let jumbled =
            (0..self.n).any(|col| self.column(col).windows(2).any(|c| c[0] >= c[1]));

        if jumbled {
            Ok(ColumnLayout::Jumbled)
        } else {
            Ok(ColumnLayout::Sorted)
        }
    }

    /// Transpose with sorted, duplicate free columns.
    ///
    /// Column `i` of the result lists every `j` such that `i` appears
    /// in column `j` of `self`.  Requires a pattern that passes
    /// [`check_format`](CscPattern::check_format).
    pub fn transpose_compact(&self) -> Self {
        let (m, n) = (self.m, self.n);

        // mark[i] == j once row i has been counted for column j
        let mut mark = vec![usize::MAX; m];
        let mut counts = vec![0usize; m];
        for j in 0..n {
            for &i in self.column(j) {
                if mark[i] != j {
                    counts[i] += 1;
                    mark[i] = j;
                }
            }
        }

        let mut colptr = vec![0; m + 1];
        for i in 0..m {
            colptr[i + 1] = colptr[i] + counts[i];
        }

        let mut next = colptr[..m].to_vec();
        let mut rowval = vec![0; colptr[m]];
        mark.fill(usize::MAX);
        for j in 0..n {
            for &i in self.column(j) {
                if mark[i] != j {
                    rowval[next[i]] = j;
                    next[i] += 1;
                    mark[i] = j;
                }
            }
        }

        CscPattern::new(n, m, colptr, rowval)
    }
}

impl ShapedMatrix for CscPattern {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
