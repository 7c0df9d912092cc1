use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Usage tracking for the current rotation period (typically one week).
///
/// The penalty grows quadratically with usage so a third or fourth repeat of a
/// food is strongly disfavored, but never banned outright. The caller owns the
/// engine and calls [`RotationEngine::reset`] at period boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEngine {
    usage: BTreeMap<String, u32>,
}

/// One tracked food with its current count and penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEntry {
    pub food_id: String,
    pub usage_count: u32,
    pub penalty: u64,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_usage(&mut self, food_id: &str) {
        *self.usage.entry(food_id.to_string()).or_insert(0) += 1;
    }

    pub fn usage_count(&self, food_id: &str) -> u32 {
        self.usage.get(food_id).copied().unwrap_or(0)
    }

    /// `usage_count²`: 0, 1, 4, 9, 16, ...
    pub fn penalty(&self, food_id: &str) -> u64 {
        let count = self.usage_count(food_id) as u64;
        count * count
    }

    /// Sum of penalties for a group of foods (e.g. one meal template).
    pub fn total_penalty<'a>(&self, food_ids: impl IntoIterator<Item = &'a str>) -> u64 {
        food_ids.into_iter().map(|id| self.penalty(id)).sum()
    }

    /// Clear all counts at the start of a new rotation period.
    pub fn reset(&mut self) {
        self.usage.clear();
    }

    /// All tracked foods with their penalty, ordered by food id.
    pub fn tracked(&self) -> Vec<RotationEntry> {
        self.usage
            .iter()
            .map(|(food_id, &usage_count)| RotationEntry {
                food_id: food_id.clone(),
                usage_count,
                penalty: (usage_count as u64) * (usage_count as u64),
            })
            .collect()
    }

    /// Pick the candidate with the lowest penalty; the first one wins ties.
    pub fn lowest_penalty<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates
            .iter()
            .copied()
            .min_by_key(|id| self.penalty(id))
    }

    pub fn len(&self) -> usize {
        self.usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }
}
