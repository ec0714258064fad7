use amdorder::{algebra::*, amd::*};

// random square pattern with a full diagonal, unsymmetric in general
fn random_pattern(rng: &mut fastrand::Rng, n: usize, density: f64) -> Vec<Vec<u8>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| u8::from(i == j || rng.f64() < density))
                .collect()
        })
        .collect()
}

fn to_csc(a: &[Vec<u8>]) -> CscPattern {
    let n = a.len();
    let entries: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| a[i][j] != 0)
        .collect();
    CscPattern::from_entries(n, &entries)
}

#[test]
fn test_random_permutations() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let settings = AmdSettings::default();

    for _ in 0..40 {
        let n = rng.usize(1..60);
        let density = rng.f64() * 0.3;
        let a = random_pattern(&mut rng, n, density);
        let ordering = order(&a, &settings).unwrap();
        let p = ordering.permutation.to_vec();

        assert_eq!(p.len(), n);
        assert!(is_permutation(&p));
        for (k, &i) in p.iter().enumerate() {
            assert_eq!(ordering.inverse[i], k);
        }
    }
}

#[test]
fn test_deterministic() {
    let mut rng = fastrand::Rng::with_seed(17);
    let a = random_pattern(&mut rng, 80, 0.05);
    let settings = AmdSettings::default();

    let first = order(&a, &settings).unwrap();
    for _ in 0..3 {
        let again = order(&a, &settings).unwrap();
        assert_eq!(first.permutation, again.permutation);
        assert_eq!(first.info.lnz, again.info.lnz);
    }
}

#[test]
fn test_fill_estimate_is_an_upper_bound() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..20 {
        let n = rng.usize(2..50);
        let a = random_pattern(&mut rng, n, 0.1);
        let ordering = order(&a, &AmdSettings::default()).unwrap();

        // degrees are overestimated, never underestimated
        let exact = symbolic::cholesky_nnz(&to_csc(&a), &ordering.permutation.to_vec()).unwrap();
        assert!(ordering.info.lnz >= exact as f64);
    }
}

#[test]
fn test_reduces_fill_on_grid() {
    // 2D five point Laplacian: natural order fills in a band of width k
    let k = 12;
    let n = k * k;
    let mut entries = vec![];
    for r in 0..k {
        for c in 0..k {
            let i = r * k + c;
            entries.push((i, i));
            if c + 1 < k {
                entries.push((i, i + 1));
                entries.push((i + 1, i));
            }
            if r + 1 < k {
                entries.push((i, i + k));
                entries.push((i + k, i));
            }
        }
    }
    let a = CscPattern::from_entries(n, &entries);
    let ordering = order_csc(&a, &AmdSettings::default()).unwrap();
    let p = ordering.permutation.to_vec();

    let natural: Vec<usize> = (0..n).collect();
    let natural_fill = symbolic::cholesky_nnz(&a, &natural).unwrap();
    let amd_fill = symbolic::cholesky_nnz(&a, &p).unwrap();
    assert!(amd_fill < natural_fill);
}

#[test]
fn test_dense_rows_go_last() {
    let mut rng = fastrand::Rng::with_seed(3);
    let n = 300;
    let mut a = random_pattern(&mut rng, n, 0.005);
    // two full rows and columns
    for &d in &[7, 123] {
        for j in 0..n {
            a[d][j] = 1;
            a[j][d] = 1;
        }
    }

    let ordering = order(&a, &AmdSettings::default()).unwrap();
    let p = ordering.permutation.to_vec();
    assert_eq!(ordering.info.ndense, 2);
    assert_eq!(&p[n - 2..], &[7, 123]);
}
