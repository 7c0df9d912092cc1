use std::collections::HashMap;

use crate::models::{MealCoverage, MealSlot, RawLineItem, WeeklyPlan};
use crate::state::FoodCatalog;

struct SlotUsage {
    food_id: String,
    slot: MealSlot,
    quantity: f64,
    meals: u32,
}

/// One raw line per food per meal slot, in first-seen order.
///
/// Foods missing from the catalog are logged and dropped.
pub fn build_raw_items(plan: &WeeklyPlan, catalog: &FoodCatalog) -> Vec<RawLineItem> {
    let mut usages: Vec<SlotUsage> = Vec::new();
    let mut index: HashMap<(String, MealSlot), usize> = HashMap::new();

    for meal in plan.meals() {
        for portion in &meal.portions {
            let key = (portion.food_id.clone(), meal.slot);
            match index.get(&key) {
                Some(&i) => {
                    usages[i].quantity += portion.amount;
                    usages[i].meals += 1;
                }
                None => {
                    index.insert(key, usages.len());
                    usages.push(SlotUsage {
                        food_id: portion.food_id.clone(),
                        slot: meal.slot,
                        quantity: portion.amount,
                        meals: 1,
                    });
                }
            }
        }
    }

    let mut items = Vec::with_capacity(usages.len());
    for usage in usages {
        let Some(food) = catalog.get(&usage.food_id) else {
            tracing::warn!(
                food_id = %usage.food_id,
                "food missing from catalog, dropped from shopping list"
            );
            continue;
        };
        if usage.quantity <= 0.0 {
            continue;
        }
        let plural = if usage.meals == 1 { "meal" } else { "meals" };
        items.push(RawLineItem {
            id: format!("{}@{}", food.id, usage.slot.as_str()),
            food_id: food.id.clone(),
            name: food.name.clone(),
            category: food.category,
            unit: food.unit,
            price_per_unit: food.price_per_unit,
            quantity: usage.quantity,
            estimated_price: food.price_for(usage.quantity),
            reason: format!("for {} {} ({})", usage.meals, plural, usage.slot.label()),
            coverage: MealCoverage::new(usage.meals, [usage.slot]),
            purchased: false,
        });
    }

    tracing::debug!(lines = items.len(), "built raw shopping lines");
    items
}
