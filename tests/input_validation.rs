use amdorder::amd::*;

#[test]
fn test_ragged_rows() {
    let a: Vec<Vec<i32>> = vec![vec![0], vec![0, 1]];
    let result = order(&a, &AmdSettings::default());
    assert!(matches!(
        result,
        Err(AmdError::Shape(ShapeError::Ragged {
            row: 1,
            len: 2,
            expected: 1
        }))
    ));
}

#[test]
fn test_not_square() {
    let a: Vec<Vec<i32>> = vec![vec![]];
    let result = order(&a, &AmdSettings::default());
    assert!(matches!(
        result,
        Err(AmdError::Shape(ShapeError::NotSquare { rows: 1, cols: 0 }))
    ));

    let a = [[1, 0, 0], [0, 1, 0]];
    let result = order(&a, &AmdSettings::default());
    assert!(matches!(
        result,
        Err(AmdError::Shape(ShapeError::NotSquare { rows: 2, cols: 3 }))
    ));
}

#[test]
fn test_non_finite_entries() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let a = [[1.0, 0.0], [0.0, bad]];
        let result = order(&a, &AmdSettings::default());
        assert!(matches!(
            result,
            Err(AmdError::NonFiniteEntry { row: 1, col: 1 })
        ));
    }
}

#[test]
fn test_non_numeric_warning() {
    let a = [["0", "0"], ["0", "s"]];
    let ordering = order(&a, &AmdSettings::default()).unwrap();

    assert_eq!(ordering.permutation.to_vec(), vec![0, 1]);
    assert_eq!(ordering.warnings.len(), 1);
    let w = &ordering.warnings[0];
    assert_eq!((w.row, w.col), (1, 1));
    assert!(w.present);
    assert!(w.to_string().contains("not numeric"));
}

#[test]
fn test_string_matrix() {
    // non-empty text is an edge, empty text is not
    let a = [
        ["a", "bc", "d", "e"],
        ["ff", "gg", "", ""],
        ["qq", "", "q", ""],
        ["f", "", "", "laugh"],
    ];
    let ordering = order(&a, &AmdSettings::default()).unwrap();
    assert_eq!(ordering.permutation.to_vec(), vec![3, 2, 1, 0]);
    assert_eq!(ordering.warnings.len(), 16);
    assert_eq!(ordering.warnings.iter().filter(|w| w.present).count(), 10);
    assert_eq!(ordering.info.nz, 10);

    let b = [[1, 1, 1, 1], [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1]];
    let numeric = order(&b, &AmdSettings::default()).unwrap();
    assert!(numeric.warnings.is_empty());
    assert_eq!(ordering.permutation, numeric.permutation);
    assert_eq!(ordering.inverse, numeric.inverse);
    assert_eq!(ordering.info.lnz, numeric.info.lnz);
    assert_eq!(ordering.info.nz_a_plus_at, numeric.info.nz_a_plus_at);
}

#[test]
fn test_numeric_strings() {
    // numbers written as text are read as numbers
    let a = [
        ["1", "1", "1", "1"],
        ["1", "1", "0", "0"],
        ["1", "0", "1.0", " 0 "],
        ["1", "0", "0", "1"],
    ];
    let ordering = order(&a, &AmdSettings::default()).unwrap();
    assert_eq!(ordering.permutation.to_vec(), vec![3, 2, 1, 0]);
    assert!(ordering.warnings.is_empty());
}

#[test]
fn test_missing_entries() {
    // None is not numeric and counts as zero
    let a = [
        [Some(1), None, Some(1)],
        [None, Some(1), None],
        [Some(1), None, Some(1)],
    ];
    let ordering = order(&a, &AmdSettings::default()).unwrap();
    assert_eq!(ordering.warnings.len(), 4);
    assert!(ordering.warnings.iter().all(|w| !w.present));
    assert_eq!(ordering.info.nz, 5);
    assert_eq!(ordering.info.nz_a_plus_at, 2);
}

#[test]
fn test_bad_settings() {
    let settings = AmdSettings {
        dense: f64::NAN,
        ..AmdSettings::default()
    };
    let result = order(&[[1]], &settings);
    assert!(matches!(
        result,
        Err(AmdError::Settings(SettingsError::BadFieldValue("dense")))
    ));

    assert!(AmdSettingsBuilder::default()
        .dense(f64::NAN)
        .build()
        .is_err());
}

#[test]
fn test_error_messages() {
    let e = AmdError::from(ShapeError::NotSquare { rows: 2, cols: 3 });
    assert_eq!(e.to_string(), "Expected a square matrix, got 2 x 3");

    let e = AmdError::NonFiniteEntry { row: 0, col: 4 };
    assert!(e.to_string().contains("(0, 4)"));
}
