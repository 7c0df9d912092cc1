use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::food::{FoodCategory, Unit};
use crate::models::plan::MealSlot;

/// Structured meal coverage carried alongside each line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCoverage {
    pub meal_count: u32,
    pub meal_types: BTreeSet<MealSlot>,
}

impl MealCoverage {
    pub fn new(meal_count: u32, meal_types: impl IntoIterator<Item = MealSlot>) -> Self {
        Self {
            meal_count,
            meal_types: meal_types.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count == 0
    }

    pub fn merge(&mut self, other: &MealCoverage) {
        self.meal_count += other.meal_count;
        self.meal_types.extend(other.meal_types.iter().copied());
    }

    /// Days covered: ceil(meals / meal types), clamped to [1, plan_days].
    /// Falls back to `plan_days` when nothing is known.
    pub fn days_covered(&self, plan_days: u32) -> u32 {
        let plan_days = plan_days.max(1);
        if self.meal_count == 0 {
            return plan_days;
        }
        let types = self.meal_types.len().max(1) as u32;
        self.meal_count.div_ceil(types).clamp(1, plan_days)
    }
}

/// Pre-aggregation shopping line, one per food per meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLineItem {
    pub id: String,
    pub food_id: String,
    pub name: String,
    pub category: FoodCategory,
    pub unit: Unit,
    pub price_per_unit: f64,
    pub quantity: f64,
    pub estimated_price: f64,
    pub reason: String,
    #[serde(default)]
    pub coverage: MealCoverage,
    #[serde(default)]
    pub purchased: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Underlying food id, never a sequence index.
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub unit: Unit,
    pub price_per_unit: f64,
    pub quantity: f64,
    pub reason: String,
    pub estimated_price: f64,
}

/// Quantity converted to a retail unit, keeping the original value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    pub original_quantity: f64,
    pub original_unit: Unit,
    pub value: f64,
    pub unit_label: String,
    pub display: String,
    /// Package count when a food-specific rule applied.
    pub packages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedShoppingItem {
    pub item: ShoppingListItem,
    pub normalized: NormalizedQuantity,
    pub display_quantity: String,
    pub coverage: MealCoverage,
    pub coverage_text: String,
    pub source_ids: Vec<String>,
    pub purchased: bool,
}

impl AggregatedShoppingItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn addresses(&self, id: &str) -> bool {
        self.item.id == id || self.source_ids.iter().any(|s| s == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionRecord {
    pub from: String,
    pub to: String,
    pub reason: String,
    pub saved: f64,
    pub protein_delta_g: f64,
}

/// Terminal outcome of a budget optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStatus {
    WithinBudget,
    AdjustedToFit,
    OverBudgetMinimum,
}

impl OptimizationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationStatus::WithinBudget => "within_budget",
            OptimizationStatus::AdjustedToFit => "adjusted_to_fit",
            OptimizationStatus::OverBudgetMinimum => "over_budget_minimum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub status: OptimizationStatus,
    pub items: Vec<AggregatedShoppingItem>,
    pub budget: f64,
    pub original_cost: f64,
    pub total_estimated_cost: f64,
    pub total_protein_g: f64,
    pub substitutions_applied: Vec<SubstitutionRecord>,
}

impl OptimizationResult {
    pub fn total_saved(&self) -> f64 {
        self.substitutions_applied.iter().map(|s| s.saved).sum()
    }

    pub fn protein_delta_g(&self) -> f64 {
        self.substitutions_applied
            .iter()
            .map(|s| s.protein_delta_g)
            .sum()
    }
}
