//! Recommendation types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifestyle dimension a recommendation talks about.
///
/// Declaration order is the evaluation order and the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTag {
    Bmi,
    Smoking,
    Alcohol,
    Activity,
    Stress,
}

impl RecommendationTag {
    pub const ALL: [RecommendationTag; 5] = [
        Self::Bmi,
        Self::Smoking,
        Self::Alcohol,
        Self::Activity,
        Self::Stress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bmi => "BMI",
            Self::Smoking => "Smoking",
            Self::Alcohol => "Alcohol",
            Self::Activity => "Activity",
            Self::Stress => "Stress",
        }
    }
}

impl fmt::Display for RecommendationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Positive,
    Neutral,
    Warning,
    Negative,
}

impl Severity {
    /// Short marker for plain-text rendering.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Neutral => "~",
            Self::Warning => "!",
            Self::Negative => "-",
        }
    }
}

/// Static informational link attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
}

impl ReferenceLink {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tag: RecommendationTag,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ReferenceLink>,
}

impl Recommendation {
    pub fn new(tag: RecommendationTag, severity: Severity, message: &str) -> Self {
        Self {
            tag,
            severity,
            message: message.to_string(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: ReferenceLink) -> Self {
        self.link = Some(link);
        self
    }
}
