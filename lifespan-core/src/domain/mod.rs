//! Domain types — plain values passed between the estimator and its callers.
//!
//! Nothing here carries state across invocations: every value is built fresh
//! from the current profile and dropped once it has been rendered.

pub mod estimate;
pub mod impact;
pub mod profile;
pub mod recommendation;

pub use estimate::{EstimateResult, ScoreBreakdown};
pub use impact::{ImprovementImpacts, Intervention};
pub use profile::{BodyMeasurements, ProfileInput, RawProfile};
pub use recommendation::{Recommendation, RecommendationTag, ReferenceLink, Severity};
