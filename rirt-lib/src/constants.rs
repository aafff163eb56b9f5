use rirt_data::CalibrationTable;

/// Bibliographic tag of the tabulated calibration (A&A 674, A30, Eq. 7).
pub const CALIBRATION_SOURCE: &str = "Lanzafame et al. (2023), A&A 674, A30";

/// Metallicity anchors [M/H] at which the coefficients are tabulated.
pub const METALLICITY_GRID: [f64; 4] = [-0.5, 0.0, 0.25, 0.5];

/// Polynomial coefficients `[C0, C1, C2, C3]`, one row per entry of
/// [`METALLICITY_GRID`].
pub const COEFFICIENT_TABLE: [[f64; 4]; 4] = [
    [-3.3391, -0.1564, -0.1046, 0.0311],
    [-3.3467, -0.1989, -0.1020, 0.0349],
    [-3.3501, -0.2137, -0.1029, 0.0357],
    [-3.3527, -0.2219, -0.1056, 0.0353],
];

/// Effective temperatures (K) spanned by the calibrating sample.
///
/// Not enforced; results outside this range should be used with caution.
pub const TEFF_CALIBRATION_RANGE: (f64, f64) = (3000.0, 7000.0);

/// The built-in calibration in its serializable form.
pub fn lanzafame_2023() -> CalibrationTable {
    CalibrationTable {
        source: CALIBRATION_SOURCE.into(),
        metallicity: METALLICITY_GRID.to_vec(),
        coefficients: COEFFICIENT_TABLE.to_vec(),
    }
}
