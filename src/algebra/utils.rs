//! Permutation helpers.

/// True if `p` is a permutation of `0..p.len()`
pub fn is_permutation(p: &[usize]) -> bool {
    let mut seen = vec![false; p.len()];
    for &j in p {
        if j >= p.len() || seen[j] {
            return false;
        }
        seen[j] = true;
    }
    true
}

/// Construct an inverse permutation from a permutation
///
/// # Panics
/// Panics if `p` is not a permutation.
pub fn invperm(p: &[usize]) -> Vec<usize> {
    let mut b = vec![usize::MAX; p.len()];
    for (i, j) in p.iter().enumerate() {
        assert!(*j < p.len() && b[*j] == usize::MAX);
        b[*j] = i;
    }
    b
}

#[test]
fn test_invperm() {
    let perm = vec![3, 0, 2, 1];
    assert_eq!(invperm(&perm), vec![1, 3, 2, 0]);
    assert!(is_permutation(&perm));
}

#[test]
fn test_not_permutation() {
    assert!(!is_permutation(&[3, 0, 2, 0])); //repeated index
    assert!(!is_permutation(&[4, 0, 2, 1])); //index too big
    assert!(is_permutation(&[]));
}

#[test]
#[should_panic]
fn test_invperm_bad_perm() {
    invperm(&[3, 0, 2, 0]);
}
