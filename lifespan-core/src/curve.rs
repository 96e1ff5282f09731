//! Age curve — the estimate re-evaluated across a range of ages.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;
use crate::domain::ProfileInput;
use crate::estimator::estimate;

/// Ages covered by the curve unless the caller asks otherwise.
pub const DEFAULT_AGES: RangeInclusive<u32> = 18..=100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub age: u32,
    pub life_expectancy: f64,
    pub remaining_years: f64,
}

/// One point per integer age in `ages`, every other input held fixed.
///
/// An empty range yields an empty curve.
pub fn age_curve(
    input: &ProfileInput,
    config: &EstimatorConfig,
    ages: RangeInclusive<u32>,
) -> Vec<CurvePoint> {
    ages.map(|age| {
        let result = estimate(&input.with_age(age), config);
        CurvePoint {
            age,
            life_expectancy: result.life_expectancy_years,
            remaining_years: result.remaining_years,
        }
    })
    .collect()
}
