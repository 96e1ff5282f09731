//! Estimate output types.

use serde::{Deserialize, Serialize};

/// Headline figures for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Clamped to `[0, max_life_expectancy]` and rounded to one decimal.
    pub life_expectancy_years: f64,
    /// `life_expectancy_years - age`. Negative once the profile is older than
    /// its own estimate; never clamped.
    pub remaining_years: f64,
}

/// Additive terms that make up an estimate, before clamping and rounding.
///
/// Each field touches a disjoint term, so the order they are summed in does
/// not matter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `base - (age - pivot_age) * age_coefficient`
    pub baseline: f64,
    pub bmi: f64,
    pub smoking: f64,
    pub alcohol: f64,
    pub activity: f64,
    pub stress: f64,
}

impl ScoreBreakdown {
    /// Unclamped sum of every term.
    pub fn total(&self) -> f64 {
        self.baseline + self.bmi + self.smoking + self.alcohol + self.activity + self.stress
    }
}
