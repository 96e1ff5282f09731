//! Estimator configuration — constants and policy selection, loadable from TOML.
//!
//! A config file only needs the keys it changes; everything else falls back
//! to the `classic` preset:
//!
//! ```toml
//! max_life_expectancy = 95.0
//! bmi_policy = "banded"
//! stress_policy = "three_band"
//!
//! [advice.bmi]
//! type = "banded"
//! underweight_below = 18.5
//! normal_below = 24.9
//! overweight_below = 29.9
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::{AdvicePolicy, BmiPolicy, RoundingMode, StepPolicy, StressPolicy};
use crate::validation::InputBounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown preset '{name}'. Valid: {valid}")]
    UnknownPreset { name: String, valid: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Upper clamp for the estimate.
    pub max_life_expectancy: f64,
    /// Estimate for a 40-year-old with every term at zero.
    pub base_life_expectancy: f64,
    /// Years removed per year of age above `pivot_age` (added below it).
    pub age_coefficient: f64,
    pub pivot_age: f64,
    /// Magnitude subtracted for smokers.
    pub smoking_penalty: f64,
    /// Magnitude subtracted for drinkers.
    pub alcohol_penalty: f64,
    pub bmi_policy: BmiPolicy,
    pub step_policy: StepPolicy,
    pub stress_policy: StressPolicy,
    pub rounding: RoundingMode,
    pub advice: AdvicePolicy,
    pub bounds: InputBounds,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_life_expectancy: 120.0,
            base_life_expectancy: 85.0,
            age_coefficient: 0.5,
            pivot_age: 40.0,
            smoking_penalty: 10.0,
            alcohol_penalty: 5.0,
            bmi_policy: BmiPolicy::Continuous,
            step_policy: StepPolicy::FlatThresholds,
            stress_policy: StressPolicy::SingleSided,
            rounding: RoundingMode::HalfEven,
            advice: AdvicePolicy::two_band(),
            bounds: InputBounds::default(),
        }
    }
}

impl EstimatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading estimator config");
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations the estimator cannot give a meaningful answer for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("max_life_expectancy", self.max_life_expectancy),
            ("base_life_expectancy", self.base_life_expectancy),
            ("age_coefficient", self.age_coefficient),
            ("pivot_age", self.pivot_age),
            ("smoking_penalty", self.smoking_penalty),
            ("alcohol_penalty", self.alcohol_penalty),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.max_life_expectancy <= 0.0 {
            return Err(ConfigError::Invalid(
                "max_life_expectancy must be positive".into(),
            ));
        }
        if self.age_coefficient < 0.0 {
            return Err(ConfigError::Invalid(
                "age_coefficient must not be negative".into(),
            ));
        }
        if self.smoking_penalty < 0.0 || self.alcohol_penalty < 0.0 {
            return Err(ConfigError::Invalid(
                "penalties are magnitudes and must not be negative".into(),
            ));
        }
        if !self.advice.is_ascending() {
            return Err(ConfigError::Invalid(
                "advice thresholds must be in ascending order".into(),
            ));
        }
        if !self.bounds.is_consistent() {
            return Err(ConfigError::Invalid(
                "input bounds must have min <= max and positive body limits".into(),
            ));
        }
        Ok(())
    }

    /// Deterministic identity of this configuration (blake3 over canonical JSON).
    ///
    /// Two configs with the same fingerprint produce identical estimates for
    /// every profile.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("EstimatorConfig must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
