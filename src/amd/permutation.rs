use super::postorder::{compress_paths, postorder};
use super::quotient::{AssemblyTree, NodeStatus};
use super::{AmdInfo, TypeConversionWarning};
use crate::algebra::invperm;

/// Fill reducing permutation, as an index vector or as a 0/1 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permutation {
    /// `p[k]` is the original index of the k-th pivot
    Vector(Vec<usize>),
    /// row `k` holds its single 1 in column `p[k]`
    Matrix(Vec<Vec<u8>>),
}

impl Permutation {
    /// Wraps `p`, expanding it to an n x n matrix if `as_matrix` is set.
    pub fn new(p: Vec<usize>, as_matrix: bool) -> Self {
        if !as_matrix {
            return Permutation::Vector(p);
        }
        let n = p.len();
        let rows = p
            .iter()
            .map(|&col| {
                let mut row = vec![0u8; n];
                row[col] = 1;
                row
            })
            .collect();
        Permutation::Matrix(rows)
    }

    pub fn len(&self) -> usize {
        match self {
            Permutation::Vector(p) => p.len(),
            Permutation::Matrix(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index vector form
    pub fn to_vec(&self) -> Vec<usize> {
        match self {
            Permutation::Vector(p) => p.clone(),
            Permutation::Matrix(m) => m
                .iter()
                .map(|row| row.iter().position(|&x| x == 1).unwrap_or(usize::MAX))
                .collect(),
        }
    }
}

/// Result of a successful ordering
#[derive(Debug, Clone)]
pub struct AmdOrdering {
    pub permutation: Permutation,
    /// `inverse[p[k]] == k`
    pub inverse: Vec<usize>,
    pub info: AmdInfo,
    /// entries that were not numeric
    pub warnings: Vec<TypeConversionWarning>,
}

impl AmdOrdering {
    pub(crate) fn new(
        p: Vec<usize>,
        info: AmdInfo,
        warnings: Vec<TypeConversionWarning>,
        as_matrix: bool,
    ) -> Self {
        let inverse = invperm(&p);
        AmdOrdering {
            permutation: Permutation::new(p, as_matrix),
            inverse,
            info,
            warnings,
        }
    }

    /// `(permutation, info)`
    pub fn into_parts(self) -> (Permutation, AmdInfo) {
        (self.permutation, self.info)
    }
}

/// Turns the assembly tree into the final ordering.
///
/// Elements are numbered in postorder.  Each element occupies as many
/// consecutive slots as variables it eliminated, with the variables
/// merged into it or eliminated along with it (ascending) first and
/// the element's own variable last.  Dense variables follow, ascending.
pub(crate) fn assemble(mut tree: AssemblyTree) -> Vec<usize> {
    let n = tree.nv.len();
    compress_paths(&mut tree);

    // next free slot of each element
    let mut next = vec![usize::MAX; n];
    let mut nel = 0;
    for e in postorder(&tree) {
        next[e] = nel;
        nel += tree.nv[e];
    }

    for i in 0..n {
        if tree.nv[i] != 0 {
            continue;
        }
        match tree.parent[i] {
            Some(e) => {
                next[i] = next[e];
                next[e] += 1;
            }
            None => {
                debug_assert_eq!(tree.status[i], NodeStatus::Dense);
                next[i] = nel;
                nel += 1;
            }
        }
    }
    assert_eq!(nel, n);

    let mut p = vec![0; n];
    for (i, &k) in next.iter().enumerate() {
        p[k] = i;
    }
    p
}
