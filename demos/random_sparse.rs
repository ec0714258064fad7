use amdorder::algebra::*;
use amdorder::amd::*;

fn main() {
    // Random symmetric pattern with a couple of dense rows

    let n = 2000;
    let mut rng = fastrand::Rng::with_seed(1);

    let mut entries: Vec<(usize, usize)> = (0..n).map(|i| (i, i)).collect();
    for _ in 0..4 * n {
        let (i, j) = (rng.usize(0..n), rng.usize(0..n));
        entries.push((i, j));
        entries.push((j, i));
    }
    for d in [10, 1000] {
        for j in 0..n {
            entries.push((d, j));
            entries.push((j, d));
        }
    }
    let a = CscPattern::from_entries(n, &entries);

    let settings = AmdSettingsBuilder::default()
        .dense(10.0)
        .aggressive(true)
        .verbose(true)
        .build()
        .unwrap();

    let ordering = order_csc(&a, &settings).unwrap();
    let p = ordering.permutation.to_vec();

    let natural: Vec<usize> = (0..n).collect();
    println!(
        "nnz(L), natural order = {}",
        symbolic::cholesky_nnz(&a, &natural).unwrap()
    );
    println!(
        "nnz(L), AMD order     = {}",
        symbolic::cholesky_nnz(&a, &p).unwrap()
    );
    println!("last pivots = {:?}", &p[n - 2..]);
}
