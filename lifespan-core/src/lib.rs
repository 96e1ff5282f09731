//! Lifespan Core — lifestyle-based life-expectancy estimator.
//!
//! This crate contains the whole computational side of the calculator:
//! - Domain types (profile input, estimate, recommendations, impacts)
//! - Scoring policies (BMI, activity, stress) and advice thresholds
//! - Configuration with TOML loading, validation and fingerprinting
//! - Named presets, one per historical calculator variant
//! - The estimator itself plus recommendation, what-if and age-curve passes
//! - Input validation for callers that collect raw values
//!
//! Every operation is a pure function of its explicit arguments. Nothing is
//! cached or shared between calls, so callers may invoke them from any thread.

pub mod assessment;
pub mod config;
pub mod curve;
pub mod domain;
pub mod estimator;
pub mod impacts;
pub mod policy;
pub mod preset;
pub mod recommendations;
pub mod validation;

pub use assessment::{assess, Assessment, AssessmentError, SCHEMA_VERSION};
pub use config::{ConfigError, EstimatorConfig};
pub use curve::{age_curve, CurvePoint, DEFAULT_AGES};
pub use domain::{
    BodyMeasurements, EstimateResult, ImprovementImpacts, Intervention, ProfileInput, RawProfile,
    Recommendation, RecommendationTag, ReferenceLink, ScoreBreakdown, Severity,
};
pub use estimator::{compute_life_expectancy, estimate, score_breakdown};
pub use impacts::compute_improvement_impacts;
pub use preset::Preset;
pub use recommendations::generate_recommendations;
pub use validation::{body_from_parts, InputBounds, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all public value types are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<ProfileInput>();
        require_sync::<ProfileInput>();
        require_send::<RawProfile>();
        require_sync::<RawProfile>();
        require_send::<EstimateResult>();
        require_sync::<EstimateResult>();
        require_send::<Recommendation>();
        require_sync::<Recommendation>();
        require_send::<ImprovementImpacts>();
        require_sync::<ImprovementImpacts>();

        // Config types
        require_send::<EstimatorConfig>();
        require_sync::<EstimatorConfig>();
        require_send::<Preset>();
        require_sync::<Preset>();
        require_send::<InputBounds>();
        require_sync::<InputBounds>();

        // Outputs
        require_send::<Assessment>();
        require_sync::<Assessment>();
        require_send::<CurvePoint>();
        require_sync::<CurvePoint>();
    }

    #[test]
    fn estimator_calls_from_threads_agree() {
        let input = ProfileInput {
            age: 50,
            body_mass_index: 32.0,
            smokes: true,
            drinks_alcohol: true,
            daily_step_count: 3000,
            stress_level: 9.0,
        };
        let config = EstimatorConfig::default();
        let expected = compute_life_expectancy(&input, &config);
        let (input, config) = (&input, &config);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || compute_life_expectancy(input, config)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
