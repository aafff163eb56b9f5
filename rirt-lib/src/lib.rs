//! The R'_IRT chromospheric activity index of Lanzafame et al. (2023).
//!
//! Converts the Gaia `activityindex_espcs` equivalent width of the Ca II
//! infrared triplet into the temperature-insensitive index
//!
//! ```text
//! log10(R'_IRT) = C0 + C1 θ + C2 θ² + C3 θ³ + log10(α),   θ = log10(Teff)
//! ```
//!
//! where the coefficients are interpolated in metallicity.
//!
//! ```
//! let log_r = rirt::log_rirt(0.2, 0.0, 5500.0).unwrap();
//! assert!(log_r.as_scalar().unwrap().is_finite());
//! ```

pub mod activity;
pub mod broadcast;
pub mod constants;
pub mod error;
pub mod interp;
pub mod polynomial;

pub use activity::{ActivityIndexCalculator, Validity, log_rirt, teff_in_calibrated_range};
pub use broadcast::{ActivityIndex, Input};
pub use error::{Result, RirtError};
pub use interp::CoefficientInterpolator;
pub use rirt_data;
pub use rirt_data::CalibrationTable;
