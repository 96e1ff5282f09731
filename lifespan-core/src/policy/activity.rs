//! Daily step count scoring.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Age from which the age-adjusted policy applies its senior thresholds.
pub const SENIOR_AGE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// <5000 → −3, 8000..=12000 → +2, anything else → 0.
    #[default]
    FlatThresholds,
    /// Seniors (60+): <6000 → −3, 6000..=8000 → +2, >8000 → +1.
    /// Everyone else: <8000 → −3, 8000..=10000 → +2, >10000 → +1.
    AgeAdjusted,
}

impl StepPolicy {
    pub fn delta(&self, steps: u32, age: u32) -> f64 {
        match self {
            Self::FlatThresholds => {
                if steps < 5000 {
                    -3.0
                } else if (8000..=12000).contains(&steps) {
                    2.0
                } else {
                    0.0
                }
            }
            Self::AgeAdjusted => {
                let optimal = self.optimal_range(age);
                if steps < *optimal.start() {
                    -3.0
                } else if optimal.contains(&steps) {
                    2.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Step band that earns the full activity bonus at this age.
    pub fn optimal_range(&self, age: u32) -> RangeInclusive<u32> {
        match self {
            Self::FlatThresholds => 8000..=12000,
            Self::AgeAdjusted if age >= SENIOR_AGE => 6000..=8000,
            Self::AgeAdjusted => 8000..=10000,
        }
    }

    /// Lower bound of [`optimal_range`](Self::optimal_range).
    pub fn optimal_floor(&self, age: u32) -> u32 {
        *self.optimal_range(age).start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_boundaries() {
        let p = StepPolicy::FlatThresholds;
        assert_eq!(p.delta(4999, 30), -3.0);
        assert_eq!(p.delta(5000, 30), 0.0);
        assert_eq!(p.delta(7999, 30), 0.0);
        assert_eq!(p.delta(8000, 30), 2.0);
        assert_eq!(p.delta(12000, 30), 2.0);
        assert_eq!(p.delta(12001, 30), 0.0);
    }

    #[test]
    fn flat_ignores_age() {
        let p = StepPolicy::FlatThresholds;
        assert_eq!(p.delta(9000, 25), p.delta(9000, 85));
    }

    #[test]
    fn age_adjusted_under_sixty() {
        let p = StepPolicy::AgeAdjusted;
        assert_eq!(p.delta(7999, 59), -3.0);
        assert_eq!(p.delta(8000, 59), 2.0);
        assert_eq!(p.delta(10000, 59), 2.0);
        assert_eq!(p.delta(10001, 59), 1.0);
    }

    #[test]
    fn age_adjusted_seniors() {
        let p = StepPolicy::AgeAdjusted;
        assert_eq!(p.delta(5999, 60), -3.0);
        assert_eq!(p.delta(6000, 60), 2.0);
        assert_eq!(p.delta(8000, 60), 2.0);
        assert_eq!(p.delta(8001, 60), 1.0);
    }

    #[test]
    fn optimal_floor_tracks_age_group() {
        assert_eq!(StepPolicy::FlatThresholds.optimal_floor(70), 8000);
        assert_eq!(StepPolicy::AgeAdjusted.optimal_floor(70), 6000);
        assert_eq!(StepPolicy::AgeAdjusted.optimal_floor(40), 8000);
    }
}
