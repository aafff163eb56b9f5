use approx::assert_abs_diff_eq;
use rirt::constants::{COEFFICIENT_TABLE, METALLICITY_GRID, lanzafame_2023};
use rirt::{ActivityIndexCalculator, CalibrationTable, CoefficientInterpolator, RirtError};

#[test]
fn test_anchor_rows_exact() {
    let interp = CoefficientInterpolator::global();
    for (m, row) in METALLICITY_GRID.iter().zip(COEFFICIENT_TABLE.iter()) {
        let c = interp.coefficients(*m).unwrap();
        for k in 0..4 {
            assert_abs_diff_eq!(c[k], row[k], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_midpoint_interpolation() {
    let c = CoefficientInterpolator::global().coefficients(-0.25).unwrap();
    let expected = [-3.3429, -0.17765, -0.1033, 0.033];
    for k in 0..4 {
        assert_abs_diff_eq!(c[k], expected[k], epsilon = 1e-12);
    }
}

#[test]
fn test_no_extrapolation() {
    let interp = CoefficientInterpolator::global();
    assert_eq!(interp.domain(), (-0.5, 0.5));
    assert_eq!(
        interp.coefficients(0.6),
        Err(RirtError::MetallicityOutOfRange {
            value: 0.6,
            min: -0.5,
            max: 0.5
        })
    );
    assert!(interp.coefficients(-0.51).is_err());
}

#[test]
fn test_global_is_shared() {
    let a = CoefficientInterpolator::global();
    let b = CoefficientInterpolator::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.source(), lanzafame_2023().source);
}

#[test]
fn test_postcard_calibration_roundtrip() {
    let bytes = CoefficientInterpolator::global().to_bytes().unwrap();
    let loaded = CoefficientInterpolator::from_bytes(&bytes).unwrap();
    assert_eq!(&loaded, CoefficientInterpolator::global());
}

#[test]
fn test_corrupt_bytes_rejected() {
    assert!(matches!(
        CoefficientInterpolator::from_bytes(&[0xff, 0xff]),
        Err(RirtError::InvalidCalibration(_))
    ));
}

#[test]
fn test_invalid_tables_rejected() {
    let mut table = lanzafame_2023();
    table.metallicity.swap(1, 2);
    assert!(CoefficientInterpolator::from_table(&table).is_err());

    let mut table = lanzafame_2023();
    table.coefficients.pop();
    assert!(CoefficientInterpolator::from_table(&table).is_err());

    let mut table = lanzafame_2023();
    table.coefficients[2][3] = f64::INFINITY;
    assert!(CoefficientInterpolator::from_table(&table).is_err());

    let table = CalibrationTable {
        source: "single".into(),
        metallicity: vec![0.0],
        coefficients: vec![[0.0; 4]],
    };
    assert!(CoefficientInterpolator::from_table(&table).is_err());
}

#[test]
fn test_custom_calibration_domain() {
    let table = CalibrationTable {
        source: "flat".into(),
        metallicity: vec![-1.0, 1.0],
        coefficients: vec![[-4.0, 0.0, 0.0, 0.0], [-4.0, 0.0, 0.0, 0.0]],
    };
    let interp = CoefficientInterpolator::from_table(&table).unwrap();
    let calc = ActivityIndexCalculator::with_interpolator(&interp);

    // The wider grid admits [M/H] = 0.7; the result is C0 + log10(alpha).
    assert_abs_diff_eq!(calc.log_rirt_one(0.1, 0.7, 5000.0), -5.0, epsilon = 1e-12);
    assert!(calc.log_rirt_one(0.1, 1.0, 5000.0).is_nan());
}
