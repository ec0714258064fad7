// Fixtures are stored as `<name>_A.csv`, one `row,col,value` triple per
// line, and `<name>_P.csv`, the expected permutation on a single line.

use amdorder::amd::*;
use std::path::PathBuf;

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file)
}

fn parse_line(line: &str) -> Vec<i64> {
    line.trim()
        .split(',')
        .map(|x| x.trim().parse().unwrap())
        .collect()
}

fn load_fixture(name: &str) -> (Vec<Vec<i64>>, Vec<usize>) {
    let p = std::fs::read_to_string(data_path(&format!("{}_P.csv", name))).unwrap();
    let expected: Vec<usize> = parse_line(p.lines().next().unwrap())
        .into_iter()
        .map(|x| x as usize)
        .collect();

    let n = expected.len();
    let mut a = vec![vec![0i64; n]; n];
    let text = std::fs::read_to_string(data_path(&format!("{}_A.csv", name))).unwrap();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let v = parse_line(line);
        a[v[0] as usize][v[1] as usize] = v[2];
    }
    (a, expected)
}

#[test]
fn test_arrowhead_fixture() {
    let (a, expected) = load_fixture("arrowhead");
    let ordering = order(&a, &AmdSettings::default()).unwrap();
    assert_eq!(ordering.permutation.to_vec(), expected);
    assert_eq!(ordering.info.ndense, 0);
    assert_eq!(ordering.info.lnz, (expected.len() - 1) as f64);
}

#[test]
fn test_dense_arrow_fixture() {
    let (a, expected) = load_fixture("dense_arrow");
    let n = expected.len();
    let ordering = order(&a, &AmdSettings::default()).unwrap();
    assert_eq!(ordering.permutation.to_vec(), expected);
    assert_eq!(ordering.info.ndense, 1);
    assert_eq!(ordering.info.nzdiag, n);
    assert_eq!(ordering.info.lnz, (n - 1) as f64);
    assert_eq!(ordering.info.dmax, 2.0);
}
