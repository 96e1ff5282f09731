//! Lifestyle profile — the input tuple of every estimator operation.

use serde::{Deserialize, Serialize};

/// Body-mass index at which the "normalize BMI" counterfactual is evaluated.
pub const IDEAL_BMI: f64 = 22.0;
/// Daily step count used by the "increase activity" counterfactual.
pub const IDEAL_STEPS: u32 = 10_000;
/// Stress level used by the "reduce stress" counterfactual.
pub const IDEAL_STRESS: f64 = 3.0;

/// A validated lifestyle profile.
///
/// The estimator is total over this type: any combination of field values
/// produces a clamped, rounded estimate. Range checks belong to the caller,
/// see [`RawProfile`] and [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in whole years.
    pub age: u32,
    pub body_mass_index: f64,
    pub smokes: bool,
    pub drinks_alcohol: bool,
    pub daily_step_count: u32,
    /// Self-reported stress, 0 (none) to 10 (high).
    pub stress_level: f64,
}

impl ProfileInput {
    /// Same profile at a different age. Used by the age curve.
    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }

    pub fn without_smoking(self) -> Self {
        Self {
            smokes: false,
            ..self
        }
    }

    pub fn without_alcohol(self) -> Self {
        Self {
            drinks_alcohol: false,
            ..self
        }
    }

    pub fn with_bmi(self, body_mass_index: f64) -> Self {
        Self {
            body_mass_index,
            ..self
        }
    }

    pub fn with_steps(self, daily_step_count: u32) -> Self {
        Self {
            daily_step_count,
            ..self
        }
    }

    pub fn with_stress(self, stress_level: f64) -> Self {
        Self {
            stress_level,
            ..self
        }
    }

    /// True when the BMI lies in the healthy band `[18.5, 25)`.
    pub fn has_healthy_bmi(&self) -> bool {
        (18.5..25.0).contains(&self.body_mass_index)
    }
}

/// How the caller supplied body composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyMeasurements {
    /// BMI entered directly.
    Bmi { value: f64 },
    /// Weight and height; BMI = weight / (height / 100)².
    WeightHeight { weight_kg: f64, height_cm: f64 },
}

impl BodyMeasurements {
    /// Body-mass index, unchecked.
    ///
    /// A zero or negative height yields a meaningless value; run
    /// [`crate::validation::InputBounds::check_body`] first.
    pub fn bmi(&self) -> f64 {
        match *self {
            Self::Bmi { value } => value,
            Self::WeightHeight {
                weight_kg,
                height_cm,
            } => {
                let height_m = height_cm / 100.0;
                weight_kg / (height_m * height_m)
            }
        }
    }
}

/// Unvalidated profile as collected by a presentation layer.
///
/// Convert with [`crate::validation::InputBounds::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub age: u32,
    pub body: BodyMeasurements,
    pub smokes: bool,
    pub drinks_alcohol: bool,
    pub daily_step_count: u32,
    pub stress_level: f64,
}
