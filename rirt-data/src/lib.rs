#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A metallicity-dependent calibration of the R'_IRT polynomial.
///
/// Row `i` of `coefficients` holds `[C0, C1, C2, C3]` tabulated at
/// `metallicity[i]`, lowest polynomial order first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTable {
    pub source: String,
    pub metallicity: Vec<f64>,
    pub coefficients: Vec<[f64; 4]>,
}

impl CalibrationTable {
    /// Number of metallicity anchors.
    pub fn len(&self) -> usize {
        self.metallicity.len()
    }

    /// Whether the table has no metallicity anchors.
    pub fn is_empty(&self) -> bool {
        self.metallicity.is_empty()
    }
}
