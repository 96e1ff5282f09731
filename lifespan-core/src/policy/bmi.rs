//! Body-mass index scoring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmiPolicy {
    /// Linear penalties outside `[18.5, 30]`:
    /// above 30 costs 0.5 per point, below 18.5 costs 0.3 per point.
    #[default]
    Continuous,
    /// Flat deltas per band: <18.5 → −5, [18.5, 24.9) → +2,
    /// [25, 29.9) → −3, ≥30 → −6.
    ///
    /// The slivers `[24.9, 25)` and `[29.9, 30)` fall between bands and
    /// score zero.
    Banded,
}

impl BmiPolicy {
    pub fn delta(&self, bmi: f64) -> f64 {
        match self {
            Self::Continuous => {
                if bmi > 30.0 {
                    -(bmi - 30.0) * 0.5
                } else if bmi < 18.5 {
                    -(18.5 - bmi) * 0.3
                } else {
                    0.0
                }
            }
            Self::Banded => {
                if bmi < 18.5 {
                    -5.0
                } else if bmi < 24.9 {
                    2.0
                } else if (25.0..29.9).contains(&bmi) {
                    -3.0
                } else if bmi >= 30.0 {
                    -6.0
                } else {
                    0.0
                }
            }
        }
    }
}
