//! Stress level scoring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StressPolicy {
    /// Only stress above 7 counts: −2 per point.
    #[default]
    SingleSided,
    /// ≤3 earns +1 per point below 3; (3, 7] costs 0.5 per point above 3;
    /// above 7 costs 3 per point above 7.
    ThreeBand,
}

impl StressPolicy {
    pub fn delta(&self, stress: f64) -> f64 {
        match self {
            Self::SingleSided => {
                if stress > 7.0 {
                    -(stress - 7.0) * 2.0
                } else {
                    0.0
                }
            }
            Self::ThreeBand => {
                if stress <= 3.0 {
                    3.0 - stress
                } else if stress <= 7.0 {
                    -(stress - 3.0) * 0.5
                } else {
                    -(stress - 7.0) * 3.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sided() {
        let p = StressPolicy::SingleSided;
        assert_eq!(p.delta(0.0), 0.0);
        assert_eq!(p.delta(7.0), 0.0);
        assert_eq!(p.delta(9.0), -4.0);
        assert_eq!(p.delta(10.0), -6.0);
    }

    #[test]
    fn three_band() {
        let p = StressPolicy::ThreeBand;
        assert_eq!(p.delta(0.0), 3.0);
        assert_eq!(p.delta(3.0), 0.0);
        assert_eq!(p.delta(4.0), -0.5);
        assert_eq!(p.delta(5.0), -1.0);
        assert_eq!(p.delta(7.0), -2.0);
        assert_eq!(p.delta(8.0), -3.0);
        assert_eq!(p.delta(10.0), -9.0);
    }

    #[test]
    fn three_band_is_continuous_at_three() {
        let p = StressPolicy::ThreeBand;
        assert!(p.delta(3.5).abs() <= 0.25);
    }
}
