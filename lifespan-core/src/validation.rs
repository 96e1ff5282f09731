//! Input validation — the precondition gate in front of the estimator.
//!
//! The estimator accepts any [`ProfileInput`]. Whatever collects values from
//! a person (form, CLI flags, a file) runs them through
//! [`InputBounds::validate`] first, which rejects out-of-domain ages,
//! non-positive heights and weights, and similar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BodyMeasurements, ProfileInput, RawProfile};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("age {value} is outside the supported range {min}..={max}")]
    AgeOutOfRange { value: u32, min: u32, max: u32 },
    #[error("weight {value} kg must be positive and at most {max} kg")]
    InvalidWeight { value: f64, max: f64 },
    #[error("height {value} cm must be positive and at most {max} cm")]
    InvalidHeight { value: f64, max: f64 },
    #[error("body-mass index {value:.1} is outside the supported range {min}..={max}")]
    BmiOutOfRange { value: f64, min: f64, max: f64 },
    #[error("daily step count {value} exceeds the supported maximum {max}")]
    StepsOutOfRange { value: u32, max: u32 },
    #[error("stress level {value} is outside the range {min}..={max}")]
    StressOutOfRange { value: f64, min: f64, max: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("either a body-mass index or both weight and height are required")]
    MissingBodyMeasurements,
}

/// Accepted domain for every profile field.
///
/// Defaults mirror the input widgets of the original calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub min_age: u32,
    pub max_age: u32,
    pub min_bmi: f64,
    pub max_bmi: f64,
    pub max_steps: u32,
    pub min_stress: f64,
    pub max_stress: f64,
    pub max_weight_kg: f64,
    pub max_height_cm: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 100,
            min_bmi: 10.0,
            max_bmi: 50.0,
            max_steps: 20_000,
            min_stress: 0.0,
            max_stress: 10.0,
            max_weight_kg: 500.0,
            max_height_cm: 300.0,
        }
    }
}

impl InputBounds {
    /// Check every field and derive the BMI.
    pub fn validate(&self, raw: &RawProfile) -> Result<ProfileInput, ValidationError> {
        if raw.age < self.min_age || raw.age > self.max_age {
            return Err(ValidationError::AgeOutOfRange {
                value: raw.age,
                min: self.min_age,
                max: self.max_age,
            });
        }
        let body_mass_index = self.check_body(&raw.body)?;
        if raw.daily_step_count > self.max_steps {
            return Err(ValidationError::StepsOutOfRange {
                value: raw.daily_step_count,
                max: self.max_steps,
            });
        }
        finite("stress level", raw.stress_level)?;
        if raw.stress_level < self.min_stress || raw.stress_level > self.max_stress {
            return Err(ValidationError::StressOutOfRange {
                value: raw.stress_level,
                min: self.min_stress,
                max: self.max_stress,
            });
        }

        tracing::debug!(age = raw.age, bmi = body_mass_index, "profile validated");

        Ok(ProfileInput {
            age: raw.age,
            body_mass_index,
            smokes: raw.smokes,
            drinks_alcohol: raw.drinks_alcohol,
            daily_step_count: raw.daily_step_count,
            stress_level: raw.stress_level,
        })
    }

    /// Validate body measurements and return the BMI they describe.
    ///
    /// Weight and height are checked before dividing, so a zero height never
    /// reaches the BMI formula.
    pub fn check_body(&self, body: &BodyMeasurements) -> Result<f64, ValidationError> {
        if let BodyMeasurements::WeightHeight {
            weight_kg,
            height_cm,
        } = *body
        {
            finite("weight", weight_kg)?;
            finite("height", height_cm)?;
            if weight_kg <= 0.0 || weight_kg > self.max_weight_kg {
                return Err(ValidationError::InvalidWeight {
                    value: weight_kg,
                    max: self.max_weight_kg,
                });
            }
            if height_cm <= 0.0 || height_cm > self.max_height_cm {
                return Err(ValidationError::InvalidHeight {
                    value: height_cm,
                    max: self.max_height_cm,
                });
            }
        }

        let bmi = body.bmi();
        finite("body-mass index", bmi)?;
        if bmi < self.min_bmi || bmi > self.max_bmi {
            return Err(ValidationError::BmiOutOfRange {
                value: bmi,
                min: self.min_bmi,
                max: self.max_bmi,
            });
        }
        Ok(bmi)
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.min_age <= self.max_age
            && self.min_bmi <= self.max_bmi
            && self.min_stress <= self.max_stress
            && self.max_weight_kg > 0.0
            && self.max_height_cm > 0.0
    }
}

/// Combine optional body fields into measurements.
///
/// A direct BMI wins over weight and height when both are given.
pub fn body_from_parts(
    bmi: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> Result<BodyMeasurements, ValidationError> {
    match (bmi, weight_kg, height_cm) {
        (Some(value), _, _) => Ok(BodyMeasurements::Bmi { value }),
        (None, Some(weight_kg), Some(height_cm)) => Ok(BodyMeasurements::WeightHeight {
            weight_kg,
            height_cm,
        }),
        _ => Err(ValidationError::MissingBodyMeasurements),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}
