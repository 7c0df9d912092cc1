use crate::models::{
    AggregatedShoppingItem, DayPlan, Meal, NutritionTargets, OptimizationResult, Unit, WeeklyPlan,
};
use crate::shopping::normalizer::{conversion_rule, foods_with_conversion_rules, format_amount};
use crate::state::FoodCatalog;

/// "140 g Rolled oats", "3 Eggs".
pub fn format_portion(amount: f64, unit: Unit, name: &str) -> String {
    match unit {
        Unit::Piece => format!("{} {}", format_amount(amount), name),
        other => format!("{} {} {}", format_amount(amount), other.as_str(), name),
    }
}

fn format_meal(meal: &Meal, catalog: &FoodCatalog) -> String {
    let portions: Vec<String> = meal
        .portions
        .iter()
        .map(|p| {
            let unit = catalog.get(&p.food_id).map(|f| f.unit).unwrap_or(Unit::Gram);
            format_portion(p.amount, unit, catalog.name_of(&p.food_id))
        })
        .collect();
    format!(
        "{:<10} {} ({:.0} g protein): {}",
        meal.slot.label(),
        meal.name,
        meal.protein_g,
        portions.join(", ")
    )
}

pub fn display_targets(targets: &NutritionTargets) {
    println!();
    println!("=== Nutrition Targets ({}) ===", targets.goal.as_str());
    println!();
    println!("BMR:       {:.0} kcal", targets.bmr);
    println!(
        "TDEE:      {:.0} kcal (x{:.2})",
        targets.tdee, targets.activity_multiplier
    );
    println!(
        "Daily:     {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        targets.calories_per_day, targets.protein_per_day, targets.carbs_per_day, targets.fat_per_day
    );
    println!(
        "Per meal:  {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g ({} meals)",
        targets.calories_per_meal,
        targets.protein_per_meal,
        targets.carbs_per_meal,
        targets.fat_per_meal,
        targets.meals_per_day
    );
}

fn display_day(day: &DayPlan, catalog: &FoodCatalog) {
    let marker = if day.is_training_day { " [training]" } else { "" };
    println!("{}{}", day.day.name(), marker);
    for meal in day.meals() {
        println!("  {}", format_meal(meal, catalog));
    }
    println!("  {:<10} {:.0} g protein", "Total", day.protein_g());
}

pub fn display_weekly_plan(plan: &WeeklyPlan, catalog: &FoodCatalog) {
    display_targets(&plan.targets);

    println!();
    println!("=== Weekly Plan ({}) ===", plan.fingerprint);
    println!();

    for day in &plan.days {
        display_day(day, catalog);
        println!();
    }
}

pub fn display_shopping_list(items: &[AggregatedShoppingItem], total: f64) {
    if items.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", items.len());

    let max_name_len = items.iter().map(|i| i.item.name.len()).max().unwrap_or(10);
    let mut current_category = None;

    for entry in items {
        if current_category != Some(entry.item.category) {
            current_category = Some(entry.item.category);
            println!();
            println!("[{}]", entry.item.category.as_str());
        }
        let check = if entry.purchased { "x" } else { " " };
        println!(
            "  [{}] {:<width$}  {:>12}  {:>7.2}  {}",
            check,
            entry.item.name,
            entry.display_quantity,
            entry.item.estimated_price,
            entry.coverage_text,
            width = max_name_len
        );
    }

    println!();
    println!("Estimated total: {:.2}", total);
}

pub fn display_optimization(result: &OptimizationResult) {
    println!();
    println!("=== Budget ===");
    println!();
    println!("Status:   {}", result.status.as_str());
    println!("Budget:   {:.2}", result.budget);
    println!("Original: {:.2}", result.original_cost);
    println!("Final:    {:.2}", result.total_estimated_cost);

    if result.substitutions_applied.is_empty() {
        return;
    }

    println!();
    println!("Substitutions:");
    for sub in &result.substitutions_applied {
        let sign = if sub.protein_delta_g >= 0.0 { "+" } else { "" };
        println!(
            "  {} -> {}  saves {:.2}, protein {}{:.1} g",
            sub.from, sub.to, sub.saved, sign, sub.protein_delta_g
        );
    }
    println!(
        "Saved {:.2} in total, protein change {:.1} g",
        result.total_saved(),
        result.protein_delta_g()
    );
}

/// Package sizes used when turning quantities into retail units.
pub fn display_conversion_rules() {
    println!();
    println!("=== Package Sizes ===");
    println!();
    for name in foods_with_conversion_rules() {
        if let Some(rule) = conversion_rule(name) {
            println!(
                "  {:<18} 1 {} = {} {}",
                name,
                rule.kind.singular(),
                format_amount(rule.package_size),
                rule.base_unit.as_str()
            );
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_portion() {
        assert_eq!(format_portion(140.0, Unit::Gram, "Rolled oats"), "140 g Rolled oats");
        assert_eq!(format_portion(3.0, Unit::Piece, "Eggs"), "3 Eggs");
        assert_eq!(format_portion(250.0, Unit::Milliliter, "Milk"), "250 ml Milk");
    }
}
