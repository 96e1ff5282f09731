//! Named configuration presets.
//!
//! The calculator existed as several near-identical copies that disagreed on
//! the clamp bound, the scoring bands and the recommendation thresholds.
//! Each copy survives here as a preset of the one parameterized estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EstimatorConfig};
use crate::policy::{AdvicePolicy, BmiPolicy, StepPolicy, StressPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Classic,
    ClassicCapped,
    Banded,
    AgeAdjusted,
    AgeAdjustedExtended,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Self::Classic,
        Self::ClassicCapped,
        Self::Banded,
        Self::AgeAdjusted,
        Self::AgeAdjustedExtended,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::ClassicCapped => "classic-capped",
            Self::Banded => "banded",
            Self::AgeAdjusted => "age-adjusted",
            Self::AgeAdjustedExtended => "age-adjusted-extended",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "continuous BMI, flat step thresholds, stress above 7 only; max 120",
            Self::ClassicCapped => "classic scoring clamped at 95",
            Self::Banded => "banded BMI, flat step thresholds, three-band stress; max 95",
            Self::AgeAdjusted => {
                "banded BMI, age-adjusted steps, three-band stress, BMI advice at 27; max 95"
            }
            Self::AgeAdjustedExtended => {
                "banded BMI, age-adjusted steps, stress above 7 only; max 120"
            }
        }
    }

    pub fn config(&self) -> EstimatorConfig {
        let classic = EstimatorConfig::default();
        match self {
            Self::Classic => classic,
            Self::ClassicCapped => EstimatorConfig {
                max_life_expectancy: 95.0,
                ..classic
            },
            Self::Banded => EstimatorConfig {
                max_life_expectancy: 95.0,
                bmi_policy: BmiPolicy::Banded,
                step_policy: StepPolicy::FlatThresholds,
                stress_policy: StressPolicy::ThreeBand,
                advice: AdvicePolicy::banded(),
                ..classic
            },
            Self::AgeAdjusted => EstimatorConfig {
                max_life_expectancy: 95.0,
                bmi_policy: BmiPolicy::Banded,
                step_policy: StepPolicy::AgeAdjusted,
                stress_policy: StressPolicy::ThreeBand,
                advice: AdvicePolicy::age_aware(),
                ..classic
            },
            Self::AgeAdjustedExtended => EstimatorConfig {
                max_life_expectancy: 120.0,
                bmi_policy: BmiPolicy::Banded,
                step_policy: StepPolicy::AgeAdjusted,
                stress_policy: StressPolicy::SingleSided,
                advice: AdvicePolicy::age_aware(),
                ..classic
            },
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    /// Accepts kebab-case or snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
