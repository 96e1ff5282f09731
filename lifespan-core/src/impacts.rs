//! Improvement impacts — how much each single lifestyle change would add.

use crate::config::EstimatorConfig;
use crate::domain::profile::{IDEAL_BMI, IDEAL_STEPS, IDEAL_STRESS};
use crate::domain::{ImprovementImpacts, Intervention, ProfileInput};
use crate::estimator::compute_life_expectancy;

/// Counterfactual profile for `intervention`, or `None` when that input is
/// already optimal.
pub fn counterfactual(
    input: &ProfileInput,
    intervention: Intervention,
    config: &EstimatorConfig,
) -> Option<ProfileInput> {
    match intervention {
        Intervention::NormalizeBmi if !input.has_healthy_bmi() => Some(input.with_bmi(IDEAL_BMI)),
        Intervention::StopSmoking if input.smokes => Some(input.without_smoking()),
        Intervention::StopDrinking if input.drinks_alcohol => Some(input.without_alcohol()),
        Intervention::IncreaseActivity
            if input.daily_step_count < config.step_policy.optimal_floor(input.age) =>
        {
            Some(input.with_steps(IDEAL_STEPS))
        }
        Intervention::ReduceStress if input.stress_level > IDEAL_STRESS => {
            Some(input.with_stress(IDEAL_STRESS))
        }
        _ => None,
    }
}

/// Gain from fixing each suboptimal input on its own, all else held fixed.
///
/// Gains are differences of rounded estimates, rounded again with the
/// config's mode. Clamping at `max_life_expectancy` can shrink a gain to
/// zero; no combined effect is computed.
pub fn compute_improvement_impacts(
    input: &ProfileInput,
    config: &EstimatorConfig,
) -> ImprovementImpacts {
    const INTERVENTIONS: [Intervention; 5] = [
        Intervention::NormalizeBmi,
        Intervention::StopSmoking,
        Intervention::StopDrinking,
        Intervention::IncreaseActivity,
        Intervention::ReduceStress,
    ];

    let baseline = compute_life_expectancy(input, config);
    let mut impacts = ImprovementImpacts::new();
    for intervention in INTERVENTIONS {
        if let Some(improved) = counterfactual(input, intervention, config) {
            let gain = config
                .rounding
                .round_tenth(compute_life_expectancy(&improved, config) - baseline);
            tracing::debug!(%intervention, gain, "improvement impact");
            impacts.insert(intervention, gain);
        }
    }
    impacts
}
