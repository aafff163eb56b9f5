use std::sync::OnceLock;

use rirt_data::CalibrationTable;

use crate::constants::lanzafame_2023;
use crate::error::{Result, RirtError};

/// Piecewise-linear interpolation of `(xp, fp)` at a single point.
///
/// `xp` must be strictly increasing and `x` must lie in `[xp[0], xp[n-1]]`;
/// callers check the range. A point that falls exactly on an anchor returns
/// the tabulated value unchanged.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let idx = xp.partition_point(|&v| v < x);
    if idx >= xp.len() {
        return fp[fp.len() - 1];
    }
    if xp[idx] == x || idx == 0 {
        return fp[idx];
    }

    let lo = idx - 1;
    let t = (x - xp[lo]) / (xp[idx] - xp[lo]);
    fp[lo] + t * (fp[idx] - fp[lo])
}

/// Metallicity-dependent coefficients of the R'_IRT polynomial.
///
/// Each coefficient column is interpolated independently and linearly
/// between the two anchors that bracket the requested [M/H]. Queries outside
/// the tabulated range are rejected rather than extrapolated.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientInterpolator {
    source: String,
    metallicity: Vec<f64>,
    // Column-major: columns[k][i] is C_k at metallicity[i].
    columns: [Vec<f64>; 4],
}

static GLOBAL: OnceLock<CoefficientInterpolator> = OnceLock::new();

impl CoefficientInterpolator {
    /// The built-in Lanzafame et al. (2023) calibration, built on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            let table = lanzafame_2023();
            log::debug!(
                "building coefficient interpolator from {} ({} anchors)",
                table.source,
                table.len()
            );
            Self::from_table(&table).expect("built-in calibration table is valid")
        })
    }

    /// Build an interpolator from anchors and their `[C0, C1, C2, C3]` rows.
    ///
    /// Validated as in [`from_table`](Self::from_table).
    pub fn new(metallicity: &[f64], rows: &[[f64; 4]]) -> Result<Self> {
        Self::from_table(&CalibrationTable {
            source: "custom".to_string(),
            metallicity: metallicity.to_vec(),
            coefficients: rows.to_vec(),
        })
    }

    /// Build an interpolator from a calibration table.
    ///
    /// The metallicity grid needs at least two finite, strictly increasing
    /// anchors and exactly one row of finite coefficients per anchor.
    pub fn from_table(table: &CalibrationTable) -> Result<Self> {
        let grid = &table.metallicity;
        if grid.len() < 2 {
            return Err(RirtError::InvalidCalibration(format!(
                "need at least 2 metallicity anchors, got {}",
                grid.len()
            )));
        }
        if table.coefficients.len() != grid.len() {
            return Err(RirtError::InvalidCalibration(format!(
                "{} coefficient rows for {} metallicity anchors",
                table.coefficients.len(),
                grid.len()
            )));
        }
        if let Some(bad) = grid.iter().find(|m| !m.is_finite()) {
            return Err(RirtError::InvalidCalibration(format!(
                "non-finite metallicity anchor {bad}"
            )));
        }
        if grid.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RirtError::InvalidCalibration(
                "metallicity anchors must be strictly increasing".to_string(),
            ));
        }
        if let Some(i) = table
            .coefficients
            .iter()
            .position(|row| row.iter().any(|c| !c.is_finite()))
        {
            return Err(RirtError::InvalidCalibration(format!(
                "non-finite coefficient in row {i} ([M/H] = {})",
                grid[i]
            )));
        }

        let columns: [Vec<f64>; 4] =
            std::array::from_fn(|k| table.coefficients.iter().map(|row| row[k]).collect());

        Ok(CoefficientInterpolator {
            source: table.source.clone(),
            metallicity: grid.clone(),
            columns,
        })
    }

    /// Decode a postcard-serialized [`CalibrationTable`] and validate it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let table: CalibrationTable = postcard::from_bytes(bytes).map_err(|e| {
            RirtError::InvalidCalibration(format!("failed to decode calibration: {e}"))
        })?;
        log::debug!(
            "decoded calibration {} ({} anchors)",
            table.source,
            table.len()
        );
        Self::from_table(&table)
    }

    /// Serialize the calibration with postcard.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        postcard::to_allocvec(&self.to_table()).map_err(|e| {
            RirtError::InvalidCalibration(format!("failed to encode calibration: {e}"))
        })
    }

    /// Returns the calibration in row-major, serializable form.
    pub fn to_table(&self) -> CalibrationTable {
        CalibrationTable {
            source: self.source.clone(),
            metallicity: self.metallicity.clone(),
            coefficients: (0..self.metallicity.len())
                .map(|i| std::array::from_fn(|k| self.columns[k][i]))
                .collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Metallicity anchors, increasing.
    pub fn metallicity(&self) -> &[f64] {
        &self.metallicity
    }

    /// Closed [M/H] interval covered by the table.
    pub fn domain(&self) -> (f64, f64) {
        (self.metallicity[0], self.metallicity[self.metallicity.len() - 1])
    }

    /// Returns `[C0, C1, C2, C3]` at metallicity `m_h`.
    ///
    /// Errors with [`RirtError::MetallicityOutOfRange`] for values outside
    /// [`domain`](Self::domain), including NaN.
    pub fn coefficients(&self, m_h: f64) -> Result<[f64; 4]> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&m_h) {
            return Err(RirtError::MetallicityOutOfRange {
                value: m_h,
                min,
                max,
            });
        }
        Ok(self.coefficients_in_domain(m_h))
    }

    /// Interpolated coefficients for a metallicity already known to be in range.
    pub(crate) fn coefficients_in_domain(&self, m_h: f64) -> [f64; 4] {
        std::array::from_fn(|k| interp_one(m_h, &self.metallicity, &self.columns[k]))
    }
}
