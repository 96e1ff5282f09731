//! Recommendation threshold policies.
//!
//! These only pick the severity band a recommendation falls into; they never
//! affect the estimate. A preset pairs one advice policy with its scoring
//! policies.

use serde::{Deserialize, Serialize};

use super::activity::StepPolicy;

/// Where a value falls relative to a policy's bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityBand {
    Sedentary,
    Low,
    Optimal,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BmiAdvice {
    /// Above `obese_above` is obese, below `underweight_below` underweight,
    /// everything between is normal.
    TwoBand {
        underweight_below: f64,
        obese_above: f64,
    },
    /// `[underweight_below, normal_below)` is normal,
    /// `[normal_below, overweight_below)` overweight, the rest obese.
    Banded {
        underweight_below: f64,
        normal_below: f64,
        overweight_below: f64,
    },
}

impl BmiAdvice {
    pub fn band(&self, bmi: f64) -> BmiBand {
        match *self {
            Self::TwoBand {
                underweight_below,
                obese_above,
            } => {
                if bmi > obese_above {
                    BmiBand::Obese
                } else if bmi < underweight_below {
                    BmiBand::Underweight
                } else {
                    BmiBand::Normal
                }
            }
            Self::Banded {
                underweight_below,
                normal_below,
                overweight_below,
            } => {
                if bmi < underweight_below {
                    BmiBand::Underweight
                } else if bmi < normal_below {
                    BmiBand::Normal
                } else if bmi < overweight_below {
                    BmiBand::Overweight
                } else {
                    BmiBand::Obese
                }
            }
        }
    }

    fn is_ascending(&self) -> bool {
        match *self {
            Self::TwoBand {
                underweight_below,
                obese_above,
            } => underweight_below < obese_above,
            Self::Banded {
                underweight_below,
                normal_below,
                overweight_below,
            } => underweight_below < normal_below && normal_below < overweight_below,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityAdvice {
    /// Below `low_below` is low; anything up to `high_above` is optimal;
    /// beyond that very active.
    TwoBand { low_below: u32, high_above: u32 },
    /// Adds a sedentary band below `low_below` and a "low" band below
    /// `moderate_below`.
    ThreeBand {
        low_below: u32,
        moderate_below: u32,
        high_above: u32,
    },
    /// Follows the age-adjusted scoring bands.
    AgeAware,
}

impl ActivityAdvice {
    pub fn band(&self, steps: u32, age: u32) -> ActivityBand {
        match *self {
            Self::TwoBand {
                low_below,
                high_above,
            } => {
                if steps < low_below {
                    ActivityBand::Low
                } else if steps <= high_above {
                    ActivityBand::Optimal
                } else {
                    ActivityBand::VeryActive
                }
            }
            Self::ThreeBand {
                low_below,
                moderate_below,
                high_above,
            } => {
                if steps < low_below {
                    ActivityBand::Sedentary
                } else if steps < moderate_below {
                    ActivityBand::Low
                } else if steps <= high_above {
                    ActivityBand::Optimal
                } else {
                    ActivityBand::VeryActive
                }
            }
            Self::AgeAware => {
                let optimal = StepPolicy::AgeAdjusted.optimal_range(age);
                if steps < *optimal.start() {
                    ActivityBand::Low
                } else if optimal.contains(&steps) {
                    ActivityBand::Optimal
                } else {
                    ActivityBand::VeryActive
                }
            }
        }
    }

    fn is_ascending(&self) -> bool {
        match *self {
            Self::TwoBand {
                low_below,
                high_above,
            } => low_below <= high_above,
            Self::ThreeBand {
                low_below,
                moderate_below,
                high_above,
            } => low_below <= moderate_below && moderate_below <= high_above,
            Self::AgeAware => true,
        }
    }
}

/// Threshold sets used by recommendation generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvicePolicy {
    pub bmi: BmiAdvice,
    pub activity: ActivityAdvice,
}

impl AdvicePolicy {
    /// Thresholds of the original calculator: BMI 18.5/30, steps 5000/12000.
    pub fn two_band() -> Self {
        Self {
            bmi: BmiAdvice::TwoBand {
                underweight_below: 18.5,
                obese_above: 30.0,
            },
            activity: ActivityAdvice::TwoBand {
                low_below: 5000,
                high_above: 12000,
            },
        }
    }

    /// Bands that mirror the banded BMI scoring: 18.5/24.9/29.9 and
    /// steps 5000/8000/12000.
    pub fn banded() -> Self {
        Self {
            bmi: BmiAdvice::Banded {
                underweight_below: 18.5,
                normal_below: 24.9,
                overweight_below: 29.9,
            },
            activity: ActivityAdvice::ThreeBand {
                low_below: 5000,
                moderate_below: 8000,
                high_above: 12000,
            },
        }
    }

    /// Stricter obesity cut-off at 27 with age-aware activity bands.
    pub fn age_aware() -> Self {
        Self {
            bmi: BmiAdvice::Banded {
                underweight_below: 18.5,
                normal_below: 24.9,
                overweight_below: 27.0,
            },
            activity: ActivityAdvice::AgeAware,
        }
    }

    pub(crate) fn is_ascending(&self) -> bool {
        self.bmi.is_ascending() && self.activity.is_ascending()
    }
}

impl Default for AdvicePolicy {
    fn default() -> Self {
        Self::two_band()
    }
}
