//! Scoring and advice policies.
//!
//! Every policy is a small serializable enum. Scoring policies return an
//! additive delta in years; advice policies pick a severity band for the
//! recommendation text. The two families are configured separately because
//! the historical calculators never agreed on a single set of thresholds.

pub mod activity;
pub mod advice;
pub mod bmi;
pub mod rounding;
pub mod stress;

pub use activity::StepPolicy;
pub use advice::{ActivityAdvice, AdvicePolicy, BmiAdvice};
pub use bmi::BmiPolicy;
pub use rounding::RoundingMode;
pub use stress::StressPolicy;
