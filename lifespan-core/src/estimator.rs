//! The estimator — a pure, total function from profile to estimated lifespan.
//!
//! Algorithm: start from `base - (age - pivot) * age_coefficient`, add the
//! BMI, smoking, alcohol, activity and stress deltas, clamp the sum to
//! `[0, max_life_expectancy]`, round to one decimal. No step can fail.

use crate::config::EstimatorConfig;
use crate::domain::{EstimateResult, ProfileInput, ScoreBreakdown};

/// Per-term contributions for `input`, before clamping and rounding.
pub fn score_breakdown(input: &ProfileInput, config: &EstimatorConfig) -> ScoreBreakdown {
    let age = f64::from(input.age);
    ScoreBreakdown {
        baseline: config.base_life_expectancy - (age - config.pivot_age) * config.age_coefficient,
        bmi: config.bmi_policy.delta(input.body_mass_index),
        smoking: if input.smokes {
            -config.smoking_penalty
        } else {
            0.0
        },
        alcohol: if input.drinks_alcohol {
            -config.alcohol_penalty
        } else {
            0.0
        },
        activity: config.step_policy.delta(input.daily_step_count, input.age),
        stress: config.stress_policy.delta(input.stress_level),
    }
}

/// Estimated life expectancy in years, clamped and rounded to one decimal.
pub fn compute_life_expectancy(input: &ProfileInput, config: &EstimatorConfig) -> f64 {
    let breakdown = score_breakdown(input, config);
    let raw = breakdown.total();
    // Not f64::clamp, which panics on a negative max from an unvalidated config.
    let clamped = raw.min(config.max_life_expectancy).max(0.0);
    let years = config.rounding.round_tenth(clamped);

    tracing::trace!(
        age = input.age,
        baseline = breakdown.baseline,
        bmi = breakdown.bmi,
        smoking = breakdown.smoking,
        alcohol = breakdown.alcohol,
        activity = breakdown.activity,
        stress = breakdown.stress,
        raw,
        years,
        "life expectancy computed"
    );

    years
}

/// Headline estimate plus remaining years.
///
/// Remaining years go through the same rounding so the subtraction does not
/// leak binary noise (`57.3 - 50` prints as `7.3`, not `7.299999999999997`).
pub fn estimate(input: &ProfileInput, config: &EstimatorConfig) -> EstimateResult {
    let life_expectancy_years = compute_life_expectancy(input, config);
    let remaining_years = config
        .rounding
        .round_tenth(life_expectancy_years - f64::from(input.age));
    EstimateResult {
        life_expectancy_years,
        remaining_years,
    }
}
