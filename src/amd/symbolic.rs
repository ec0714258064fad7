//! Exact symbolic fill of a Cholesky factor under a given ordering.

use crate::algebra::{invperm, CscPattern, ShapedMatrix, SparseFormatError};

/// Number of strictly lower triangular nonzeros in the Cholesky factor
/// of `P (A + A') P'`, where `P` is the ordering `perm`.
///
/// Works on the pattern alone, through the elimination tree and its
/// column counts.  Entries of `a` may be unsorted or repeated.
///
/// # Panics
/// Panics if `perm` is not a permutation of `0..n`.
pub fn cholesky_nnz(a: &CscPattern, perm: &[usize]) -> Result<usize, SparseFormatError> {
    if !a.is_square() {
        return Err(SparseFormatError::NotSquare(a.m, a.n));
    }
    a.check_format()?;
    let n = a.n;
    assert_eq!(perm.len(), n);
    let iperm = invperm(perm);

    // upper triangle of the permuted symmetric pattern, one list per column
    let mut upper: Vec<Vec<usize>> = vec![Vec::new(); n];
    for j in 0..n {
        for &i in a.column(j) {
            if i == j {
                continue;
            }
            let (pi, pj) = (iperm[i], iperm[j]);
            upper[pi.max(pj)].push(pi.min(pj));
        }
    }

    Ok(etree_column_counts(&upper).iter().sum())
}

// Walks from every entry of column j up the elimination tree, stopping
// at nodes already visited for this column.  Each step adds one
// nonzero to L in the row being walked.
fn etree_column_counts(upper: &[Vec<usize>]) -> Vec<usize> {
    let n = upper.len();
    let mut etree: Vec<Option<usize>> = vec![None; n];
    let mut work = vec![usize::MAX; n];
    let mut lnz = vec![0; n];

    for j in 0..n {
        work[j] = j;
        for &start in &upper[j] {
            let mut i = start;
            while work[i] != j {
                let parent = *etree[i].get_or_insert(j);
                lnz[i] += 1;
                work[i] = j;
                i = parent;
            }
        }
    }
    lnz
}
