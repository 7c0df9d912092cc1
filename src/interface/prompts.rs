use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{CostTier, DietStyle, FitnessGoal, FoodReference, Sex, UserProfile};

/// Minimum Jaro-Winkler similarity for a fuzzy food match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Prompt for a number with a default, parsed into `T`.
pub fn prompt_number<T>(prompt: &str, default: &str) -> Result<T>
where
    T: FromStr,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input.trim())))
}

/// Let the user pick one of several labelled values.
fn prompt_select<T: Copy>(prompt: &str, options: &[(&str, T)], default: usize) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[selection].1)
}

pub fn prompt_sex() -> Result<Sex> {
    prompt_select("Sex", &[("Male", Sex::Male), ("Female", Sex::Female)], 0)
}

pub fn prompt_diet_style() -> Result<DietStyle> {
    prompt_select(
        "Diet style",
        &[
            ("Healthy", DietStyle::Healthy),
            ("Balanced", DietStyle::Balanced),
            ("Comfort", DietStyle::Comfort),
            ("Mediterranean", DietStyle::Mediterranean),
        ],
        1,
    )
}

pub fn prompt_cost_tier() -> Result<CostTier> {
    prompt_select(
        "Grocery budget",
        &[
            ("Budget", CostTier::Budget),
            ("Standard", CostTier::Standard),
            ("Premium", CostTier::Premium),
        ],
        1,
    )
}

/// `None` lets the diet style decide the goal.
pub fn prompt_fitness_goal() -> Result<Option<FitnessGoal>> {
    prompt_select(
        "Fitness goal",
        &[
            ("Derive from diet style", None),
            ("Cutting", Some(FitnessGoal::Cutting)),
            ("Maintenance", Some(FitnessGoal::Maintenance)),
            ("Bulking", Some(FitnessGoal::Bulking)),
        ],
        0,
    )
}

/// Comma-separated restrictions, e.g. "vegetarian, gluten-free".
pub fn prompt_restrictions() -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt("Dietary restrictions (comma-separated, Enter for none)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Catalog foods similar to `input`, best match first.
pub fn fuzzy_matches<'a>(foods: &'a [FoodReference], input: &str) -> Vec<(&'a FoodReference, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FoodReference, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
}

/// Prompt for foods to exclude, resolving typos against the catalog.
///
/// Terms with no catalog match are kept as typed, since exclusions are
/// substring filters.
pub fn prompt_exclusions(foods: &[FoodReference]) -> Result<Vec<String>> {
    let mut exclusions = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Exclude a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(food) = foods.iter().find(|f| f.name.eq_ignore_ascii_case(input)) {
            exclusions.push(food.name.clone());
            println!("Excluded: {}", food.name);
            continue;
        }

        let candidates = fuzzy_matches(foods, input);

        if candidates.is_empty() {
            exclusions.push(input.to_string());
            println!("Excluded foods containing '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                exclusions.push(food.name.clone());
                println!("Excluded: {}", food.name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(f, _)| f.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push(format!("Keep '{}' as typed", input));

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            let chosen = options
                .get(selection)
                .cloned()
                .unwrap_or_else(|| input.to_string());
            println!("Excluded: {}", chosen);
            exclusions.push(chosen);
        }
    }

    Ok(exclusions)
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through every profile field and validate the result.
pub fn collect_profile(foods: &[FoodReference]) -> Result<UserProfile> {
    let sex = prompt_sex()?;
    let age: u32 = prompt_number("Age (years)", "30")?;
    let weight_kg: f64 = prompt_number("Weight (kg)", "75")?;
    let height_cm: f64 = prompt_number("Height (cm)", "175")?;
    let trains = prompt_yes_no("Do you train regularly?", false)?;
    let meals_per_day: u8 = prompt_number("Meals per day (3-6)", "3")?;
    let diet_style = prompt_diet_style()?;
    let cost_tier = prompt_cost_tier()?;
    let fitness_goal = prompt_fitness_goal()?;
    let restrictions = prompt_restrictions()?;
    let excluded_foods = prompt_exclusions(foods)?;

    let protein_input: String = Input::new()
        .with_prompt("Daily protein override in grams (Enter for none)")
        .allow_empty(true)
        .interact_text()?;
    let protein_override_g = match protein_input.trim() {
        "" => None,
        value => Some(value.parse::<f64>().map_err(|_| {
            PlanError::InvalidInput(format!("Invalid number: {}", value))
        })?),
    };

    let profile = UserProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        trains,
        meals_per_day,
        diet_style,
        cost_tier,
        fitness_goal,
        restrictions,
        excluded_foods,
        protein_override_g,
    };
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::builtin_foods;

    #[test]
    fn test_fuzzy_matches_typos() {
        let foods = builtin_foods();
        let matches = fuzzy_matches(&foods, "brocoli");
        assert_eq!(matches.first().map(|(f, _)| f.id.as_str()), Some("broccoli"));
    }

    #[test]
    fn test_fuzzy_matches_sorted_by_score() {
        let foods = builtin_foods();
        let matches = fuzzy_matches(&foods, "chicken");
        assert!(!matches.is_empty());
        assert!(matches.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(fuzzy_matches(&foods, "zzzz").is_empty());
    }
}
