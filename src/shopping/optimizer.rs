use serde::{Deserialize, Serialize};

use crate::models::{
    AggregatedShoppingItem, FoodReference, OptimizationResult, OptimizationStatus,
    ShoppingListItem, SubstitutionRecord,
};
use crate::planner::EFFICIENCY_SCALE;
use crate::shopping::aggregator::coverage_text;
use crate::shopping::normalizer::normalize;
use crate::state::ReferenceData;

/// What the optimizer is asked to reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetGoal {
    /// Spend at most this much.
    Ceiling(f64),
    /// Save at least this much relative to the current total.
    Savings(f64),
}

impl BudgetGoal {
    /// Spending ceiling for a given starting total.
    pub fn ceiling(&self, total: f64) -> f64 {
        match self {
            BudgetGoal::Ceiling(budget) => *budget,
            BudgetGoal::Savings(target) => (total - target).max(0.0),
        }
    }
}

fn price_per_base_unit(food: &FoodReference) -> f64 {
    food.price_per_unit / food.unit.to_base(1.0)
}

fn protein_for_base(food: &FoodReference, base_quantity: f64) -> f64 {
    food.protein_for(base_quantity / food.unit.to_base(1.0))
}

/// Greedy cost reducer working through the substitution graph.
pub struct BudgetOptimizer<'a> {
    reference: &'a ReferenceData,
    plan_days: u32,
}

impl<'a> BudgetOptimizer<'a> {
    pub fn new(reference: &'a ReferenceData, plan_days: u32) -> Self {
        Self {
            reference,
            plan_days,
        }
    }

    /// Catalog entry currently behind a shopping line.
    ///
    /// Resolved by display name first: a substituted line keeps its original
    /// id but names the food it now holds.
    fn food_for(&self, item: &AggregatedShoppingItem) -> Option<&'a FoodReference> {
        let catalog = &self.reference.catalog;
        catalog
            .find_by_name(&item.item.name)
            .or_else(|| catalog.get(item.id()))
    }

    fn protein_of(&self, item: &AggregatedShoppingItem) -> f64 {
        self.food_for(item)
            .map(|food| protein_for_base(food, item.item.quantity))
            .unwrap_or(0.0)
    }

    /// Protein per currency unit: `quantity × protein/100 × 10 / price`.
    ///
    /// Zero when the price or protein is zero or unknown, so such lines are
    /// considered for substitution first.
    pub fn efficiency_score(&self, item: &AggregatedShoppingItem) -> f64 {
        let price = item.item.estimated_price;
        let protein = self.food_for(item).map(|f| f.macros.protein).unwrap_or(0.0);
        if price <= 0.0 || protein <= 0.0 {
            return 0.0;
        }
        item.item.quantity * protein * EFFICIENCY_SCALE / price
    }

    /// First candidate that exists, shares the base unit and is strictly cheaper.
    fn find_substitute(
        &self,
        item: &AggregatedShoppingItem,
    ) -> Option<(&'a FoodReference, f64, f64)> {
        let source_name = self
            .food_for(item)
            .map(|f| f.name.as_str())
            .unwrap_or(item.item.name.as_str());

        for candidate in self.reference.substitutions.candidates(source_name) {
            let Some(food) = self.reference.catalog.find_by_name(candidate) else {
                tracing::debug!(from = source_name, to = %candidate, "substitute not in catalog");
                continue;
            };
            if food.unit.base() != item.item.unit {
                continue;
            }
            let unit_price = price_per_base_unit(food);
            let savings = item.item.estimated_price - unit_price * item.item.quantity;
            if savings > 0.0 {
                return Some((food, unit_price, savings));
            }
        }
        None
    }

    fn substitute(
        &self,
        item: &AggregatedShoppingItem,
        food: &FoodReference,
        unit_price: f64,
    ) -> AggregatedShoppingItem {
        let quantity = item.item.quantity;
        let normalized = normalize(&food.name, quantity, item.item.unit);
        AggregatedShoppingItem {
            item: ShoppingListItem {
                id: item.item.id.clone(),
                name: food.name.clone(),
                category: food.category,
                unit: item.item.unit,
                price_per_unit: unit_price,
                quantity,
                reason: format!("{} (instead of {})", item.item.reason, item.item.name),
                estimated_price: unit_price * quantity,
            },
            display_quantity: normalized.display.clone(),
            normalized,
            coverage: item.coverage.clone(),
            coverage_text: coverage_text(&item.coverage, food.category, self.plan_days),
            source_ids: item.source_ids.clone(),
            purchased: item.purchased,
        }
    }

    /// Substitute lowest-efficiency items first until the total fits.
    ///
    /// Never increases cost and never removes items; when no further
    /// substitution helps the result is `OverBudgetMinimum`.
    pub fn optimize(
        &self,
        items: &[AggregatedShoppingItem],
        total_cost: f64,
        goal: BudgetGoal,
    ) -> OptimizationResult {
        let budget = goal.ceiling(total_cost);
        let mut items = items.to_vec();
        let mut running_cost = total_cost;
        let mut running_protein: f64 = items.iter().map(|i| self.protein_of(i)).sum();

        if total_cost <= budget {
            tracing::info!(total_cost, budget, "shopping list within budget");
            return OptimizationResult {
                status: OptimizationStatus::WithinBudget,
                items,
                budget,
                original_cost: total_cost,
                total_estimated_cost: total_cost,
                total_protein_g: running_protein,
                substitutions_applied: Vec::new(),
            };
        }

        let mut order: Vec<(usize, f64)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, self.efficiency_score(item)))
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut substitutions = Vec::new();
        for (index, _) in order {
            if running_cost <= budget {
                break;
            }
            let Some((food, unit_price, savings)) = self.find_substitute(&items[index]) else {
                continue;
            };

            let replaced = self.substitute(&items[index], food, unit_price);
            let protein_delta = protein_for_base(food, replaced.item.quantity)
                - self.protein_of(&items[index]);

            tracing::debug!(
                from = %items[index].item.name,
                to = %food.name,
                saved = savings,
                protein_delta,
                "applied substitution"
            );

            substitutions.push(SubstitutionRecord {
                from: items[index].item.name.clone(),
                to: food.name.clone(),
                reason: format!("cheaper alternative, saves {:.2}", savings),
                saved: savings,
                protein_delta_g: protein_delta,
            });
            running_cost -= savings;
            running_protein += protein_delta;
            items[index] = replaced;
        }

        let status = if running_cost <= budget {
            OptimizationStatus::AdjustedToFit
        } else {
            OptimizationStatus::OverBudgetMinimum
        };

        tracing::info!(
            status = status.as_str(),
            original_cost = total_cost,
            final_cost = running_cost,
            budget,
            substitutions = substitutions.len(),
            "budget optimization finished"
        );

        OptimizationResult {
            status,
            items,
            budget,
            original_cost: total_cost,
            total_estimated_cost: running_cost,
            total_protein_g: running_protein,
            substitutions_applied: substitutions,
        }
    }
}
