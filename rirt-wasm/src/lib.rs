//! WASM bindings for the R'_IRT activity index.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p rirt-wasm
//! ```

use wasm_bindgen::prelude::*;

use rirt::{ActivityIndexCalculator, CoefficientInterpolator, Validity};

fn calc() -> ActivityIndexCalculator<'static> {
    ActivityIndexCalculator::new()
}

fn to_js(e: rirt::RirtError) -> JsError {
    JsError::new(&e.to_string())
}

// ── Activity index ──

/// Returns log10(R'_IRT) for one star; NaN outside the model's domain.
#[wasm_bindgen]
pub fn log_rirt_one(alpha: f64, m_h: f64, teff: f64) -> f64 {
    calc().log_rirt_one(alpha, m_h, teff)
}

/// Returns log10(R'_IRT) elementwise.
///
/// Arrays of length 1 broadcast against the others; any other length
/// mismatch is an error.
#[wasm_bindgen]
pub fn log_rirt(alpha: &[f64], m_h: &[f64], teff: &[f64]) -> Result<Vec<f64>, JsError> {
    calc().log_rirt_slices(alpha, m_h, teff).map_err(to_js)
}

/// Returns why a star would be masked: "valid", "metallicity",
/// "width", or "temperature".
#[wasm_bindgen]
pub fn validity(alpha: f64, m_h: f64, teff: f64) -> String {
    match calc().check(alpha, m_h, teff) {
        Validity::Valid => "valid",
        Validity::MetallicityOutOfDomain => "metallicity",
        Validity::NonPositiveWidth => "width",
        Validity::NonPositiveTemperature => "temperature",
    }
    .to_string()
}

// ── Calibration ──

/// Returns [C0, C1, C2, C3] at metallicity `m_h`.
#[wasm_bindgen]
pub fn coefficients(m_h: f64) -> Result<Vec<f64>, JsError> {
    CoefficientInterpolator::global()
        .coefficients(m_h)
        .map(|c| c.to_vec())
        .map_err(to_js)
}

/// Returns the closed [M/H] range of the calibration as [min, max].
#[wasm_bindgen]
pub fn metallicity_domain() -> js_sys::Float64Array {
    let (min, max) = CoefficientInterpolator::global().domain();
    js_sys::Float64Array::from(&[min, max][..])
}

/// Whether `teff` (K) lies within the calibrating sample's range.
#[wasm_bindgen]
pub fn teff_in_calibrated_range(teff: f64) -> bool {
    rirt::teff_in_calibrated_range(teff)
}
