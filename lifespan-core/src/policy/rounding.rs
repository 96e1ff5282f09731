//! One-decimal rounding of published figures.

use serde::{Deserialize, Serialize};

/// Tie-break rule used when rounding to one decimal place.
///
/// Rounding works from the exact stored value. A tie is a value that lies
/// exactly halfway between two tenths in binary, such as `57.25`. A literal
/// like `0.15` is stored as 0.1499… and always rounds down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Banker's rounding: `57.25 → 57.2`, `57.75 → 57.8`.
    #[default]
    HalfEven,
    /// `57.25 → 57.3`, `-0.25 → -0.3`.
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round_tenth(&self, value: f64) -> f64 {
        match self {
            Self::HalfEven => correctly_rounded_tenth(value),
            Self::HalfAwayFromZero => {
                let scaled = value * 10.0;
                if is_exact_tie(value, scaled) {
                    scaled.round() / 10.0
                } else {
                    correctly_rounded_tenth(value)
                }
            }
        }
    }
}

/// Nearest tenth of the exact binary value; exact ties go to even.
fn correctly_rounded_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// True when `scaled == value * 10` holds without rounding and lands on a
/// half.
fn is_exact_tie(value: f64, scaled: f64) -> bool {
    scaled.fract().abs() == 0.5 && value.mul_add(10.0, -scaled) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_even_ties() {
        let r = RoundingMode::HalfEven;
        assert_eq!(r.round_tenth(57.25), 57.2);
        assert_eq!(r.round_tenth(57.75), 57.8);
        assert_eq!(r.round_tenth(0.25), 0.2);
    }

    #[test]
    fn half_away_ties() {
        let r = RoundingMode::HalfAwayFromZero;
        assert_eq!(r.round_tenth(57.25), 57.3);
        assert_eq!(r.round_tenth(-0.25), -0.3);
    }

    #[test]
    fn non_ties_agree() {
        for v in [0.0, 12.34, 91.0, 57.26, 119.96] {
            assert_eq!(
                RoundingMode::HalfEven.round_tenth(v),
                RoundingMode::HalfAwayFromZero.round_tenth(v)
            );
        }
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 0.15 is stored just below 0.15; 0.45 just above 0.45.
        for mode in [RoundingMode::HalfEven, RoundingMode::HalfAwayFromZero] {
            assert_eq!(mode.round_tenth(0.15), 0.1);
            assert_eq!(mode.round_tenth(0.45), 0.5);
        }
    }

    #[test]
    fn removes_subtraction_noise() {
        let noisy = 57.3 - 50.0;
        assert_ne!(noisy, 7.3);
        assert_eq!(RoundingMode::HalfEven.round_tenth(noisy), 7.3);
    }
}
