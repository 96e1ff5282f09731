//! Improvement impacts — single-factor "what if" gains.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A one-dimension lifestyle change evaluated in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intervention {
    NormalizeBmi,
    StopSmoking,
    StopDrinking,
    IncreaseActivity,
    ReduceStress,
}

impl Intervention {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalizeBmi => "normalize BMI",
            Self::StopSmoking => "stop smoking",
            Self::StopDrinking => "stop drinking",
            Self::IncreaseActivity => "increase activity",
            Self::ReduceStress => "reduce stress",
        }
    }
}

impl fmt::Display for Intervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Gain in estimated years per applicable intervention.
///
/// Only interventions whose input is currently suboptimal are present. Gains
/// are independent of each other and do not add up to a combined improvement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImprovementImpacts(BTreeMap<Intervention, f64>);

impl ImprovementImpacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, intervention: Intervention, gain: f64) {
        self.0.insert(intervention, gain);
    }

    pub fn get(&self, intervention: Intervention) -> Option<f64> {
        self.0.get(&intervention).copied()
    }

    pub fn contains(&self, intervention: Intervention) -> bool {
        self.0.contains_key(&intervention)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Intervention, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Entries sorted by gain, largest first. Ties keep declaration order.
    pub fn ranked(&self) -> Vec<(Intervention, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_orders_by_gain_descending() {
        let mut impacts = ImprovementImpacts::new();
        impacts.insert(Intervention::ReduceStress, 4.0);
        impacts.insert(Intervention::StopSmoking, 10.0);
        impacts.insert(Intervention::NormalizeBmi, 1.0);

        let ranked = impacts.ranked();
        assert_eq!(ranked[0].0, Intervention::StopSmoking);
        assert_eq!(ranked[2].0, Intervention::NormalizeBmi);
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut impacts = ImprovementImpacts::new();
        impacts.insert(Intervention::StopDrinking, 5.0);
        let json = serde_json::to_string(&impacts).unwrap();
        assert_eq!(json, r#"{"stop_drinking":5.0}"#);
        let back: ImprovementImpacts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, impacts);
    }
}
