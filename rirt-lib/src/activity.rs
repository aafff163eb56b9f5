use ndarray::ArrayView1;

use crate::broadcast::{ActivityIndex, Input, map3};
use crate::constants::TEFF_CALIBRATION_RANGE;
use crate::error::Result;
use crate::interp::CoefficientInterpolator;
use crate::polynomial::horner;

/// Why an input element does or does not produce a finite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// [M/H] is NaN or not strictly inside the tabulated range.
    MetallicityOutOfDomain,
    /// The equivalent width is zero, negative, or NaN.
    NonPositiveWidth,
    /// The effective temperature is zero, negative, or NaN.
    NonPositiveTemperature,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

/// Evaluates log10(R'_IRT) from Gaia Ca II IRT equivalent widths.
///
/// Cheap to create and `Copy`: it only borrows its coefficient
/// interpolator, which by default is the process-wide built-in calibration.
#[derive(Debug, Clone, Copy)]
pub struct ActivityIndexCalculator<'a> {
    interp: &'a CoefficientInterpolator,
}

impl ActivityIndexCalculator<'static> {
    pub fn new() -> Self {
        ActivityIndexCalculator {
            interp: CoefficientInterpolator::global(),
        }
    }
}

impl Default for ActivityIndexCalculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ActivityIndexCalculator<'a> {
    /// Use a custom calibration instead of the built-in table.
    pub fn with_interpolator(interp: &'a CoefficientInterpolator) -> Self {
        ActivityIndexCalculator { interp }
    }

    /// Classify one element of input.
    ///
    /// Metallicity must lie strictly inside the tabulated range; the anchors
    /// at either end are excluded.
    pub fn check(&self, alpha: f64, m_h: f64, teff: f64) -> Validity {
        let (min, max) = self.interp.domain();
        if m_h.is_nan() || m_h <= min || m_h >= max {
            Validity::MetallicityOutOfDomain
        } else if alpha.is_nan() || alpha <= 0.0 {
            Validity::NonPositiveWidth
        } else if teff.is_nan() || teff <= 0.0 {
            Validity::NonPositiveTemperature
        } else {
            Validity::Valid
        }
    }

    /// log10(R'_IRT) for a single star, or NaN when the inputs are outside
    /// the model's domain.
    ///
    /// * `alpha` - Ca II IRT equivalent width in nm (Gaia `activityindex_espcs`)
    /// * `m_h` - solar-scaled metallicity [M/H]
    /// * `teff` - effective temperature in K
    pub fn log_rirt_one(&self, alpha: f64, m_h: f64, teff: f64) -> f64 {
        if !self.check(alpha, m_h, teff).is_valid() {
            return f64::NAN;
        }
        let c = self.interp.coefficients_in_domain(m_h);
        horner(&c, teff.log10()) + alpha.log10()
    }

    /// log10(R'_IRT) over the broadcast of the three inputs.
    ///
    /// Each argument may be a scalar or an array; shapes broadcast as in
    /// NumPy. Out-of-domain elements become NaN. A result with exactly one
    /// element is returned as [`ActivityIndex::Scalar`].
    ///
    /// Only incompatible shapes are an error.
    pub fn log_rirt(
        &self,
        alpha: impl Into<Input>,
        m_h: impl Into<Input>,
        teff: impl Into<Input>,
    ) -> Result<ActivityIndex> {
        let (alpha, m_h, teff) = (alpha.into(), m_h.into(), teff.into());
        let values = map3(&alpha.view(), &m_h.view(), &teff.view(), |a, m, t| {
            self.log_rirt_one(a, m, t)
        })?;
        Ok(ActivityIndex::from_values(values))
    }

    /// Flat variant of [`log_rirt`](Self::log_rirt) that always returns a
    /// vector. Length-1 slices broadcast against the others.
    pub fn log_rirt_slices(&self, alpha: &[f64], m_h: &[f64], teff: &[f64]) -> Result<Vec<f64>> {
        let values = map3(
            &ArrayView1::from(alpha).into_dyn(),
            &ArrayView1::from(m_h).into_dyn(),
            &ArrayView1::from(teff).into_dyn(),
            |a, m, t| self.log_rirt_one(a, m, t),
        )?;
        Ok(values.iter().copied().collect())
    }
}

/// log10(R'_IRT) with the built-in calibration.
///
/// See [`ActivityIndexCalculator::log_rirt`].
pub fn log_rirt(
    alpha: impl Into<Input>,
    m_h: impl Into<Input>,
    teff: impl Into<Input>,
) -> Result<ActivityIndex> {
    ActivityIndexCalculator::new().log_rirt(alpha, m_h, teff)
}

/// Whether `teff` lies within the temperatures the calibration was fit on.
pub fn teff_in_calibrated_range(teff: f64) -> bool {
    let (lo, hi) = TEFF_CALIBRATION_RANGE;
    (lo..=hi).contains(&teff)
}
