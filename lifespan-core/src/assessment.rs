//! Assessment — every estimator output for one profile, bundled for export.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EstimatorConfig;
use crate::domain::{EstimateResult, ImprovementImpacts, ProfileInput, Recommendation};
use crate::estimator::estimate;
use crate::impacts::compute_improvement_impacts;
use crate::recommendations::generate_recommendations;

/// Current schema version for serialized assessments.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid assessment JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema version {found} (max supported: {max})")]
    UnsupportedSchema { found: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Fingerprint of the config that produced this assessment.
    pub config_fingerprint: String,
    pub input: ProfileInput,
    pub estimate: EstimateResult,
    pub recommendations: Vec<Recommendation>,
    pub impacts: ImprovementImpacts,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run the estimate, recommendations and impacts for one profile.
pub fn assess(input: &ProfileInput, config: &EstimatorConfig) -> Assessment {
    Assessment {
        schema_version: SCHEMA_VERSION,
        config_fingerprint: config.fingerprint(),
        input: *input,
        estimate: estimate(input, config),
        recommendations: generate_recommendations(input, config),
        impacts: compute_improvement_impacts(input, config),
    }
}

impl Assessment {
    pub fn to_json(&self) -> Result<String, AssessmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an assessment, rejecting schema versions newer than this build.
    pub fn from_json(json: &str) -> Result<Self, AssessmentError> {
        let assessment: Self = serde_json::from_str(json)?;
        if assessment.schema_version > SCHEMA_VERSION {
            return Err(AssessmentError::UnsupportedSchema {
                found: assessment.schema_version,
                max: SCHEMA_VERSION,
            });
        }
        Ok(assessment)
    }
}
