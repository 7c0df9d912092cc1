use crate::models::{FitnessGoal, NutritionTargets, Sex, UserProfile};
use crate::planner::constants::*;

/// Unrounded Mifflin-St Jeor basal metabolic rate.
///
/// `10·weight + 6.25·height − 5·age + 5` for men, `− 161` instead of `+ 5` for women.
pub fn mifflin_st_jeor(sex: Sex, age: u32, weight_kg: f64, height_cm: f64) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

/// Basal metabolic rate rounded to whole kcal, for display.
pub fn calculate_bmr(sex: Sex, age: u32, weight_kg: f64, height_cm: f64) -> f64 {
    mifflin_st_jeor(sex, age, weight_kg, height_cm).round()
}

/// Sedentary or moderate; there are no other activity tiers.
pub fn activity_multiplier(trains: bool) -> f64 {
    if trains {
        MODERATE_MULTIPLIER
    } else {
        SEDENTARY_MULTIPLIER
    }
}

/// Expects the unrounded BMR; only the result is rounded.
pub fn calculate_tdee(bmr: f64, trains: bool) -> f64 {
    (bmr * activity_multiplier(trains)).round()
}

/// Computed protein baseline, raised (never lowered) by an explicit override.
pub fn protein_target(weight_kg: f64, goal: FitnessGoal, override_g: Option<f64>) -> f64 {
    let baseline = (weight_kg * goal_protein_per_kg(goal)).round();
    match override_g {
        Some(explicit) => explicit.round().max(baseline),
        None => baseline,
    }
}

/// Returns (fat_g, carbs_g) for a calorie and protein target.
pub fn split_macros(calories: f64, protein_g: f64) -> (f64, f64) {
    let fat = ((calories * FAT_CALORIE_SHARE).round() / KCAL_PER_G_FAT).round();
    let remaining = calories - protein_g * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    let carbs = (remaining.max(0.0) / KCAL_PER_G_CARBS).round();
    (fat, carbs)
}

/// Derive all targets for a profile. Pure; the profile is assumed validated.
pub fn calculate_targets(profile: &UserProfile) -> NutritionTargets {
    let goal = profile.resolved_goal();
    let raw_bmr = mifflin_st_jeor(
        profile.sex,
        profile.age,
        profile.weight_kg,
        profile.height_cm,
    );
    let bmr = raw_bmr.round();
    let multiplier = activity_multiplier(profile.trains);
    let tdee = calculate_tdee(raw_bmr, profile.trains);

    let calories = (tdee * goal_calorie_multiplier(goal)).round();
    let protein = protein_target(profile.weight_kg, goal, profile.protein_override_g);
    let (fat, carbs) = split_macros(calories, protein);

    let meals = profile.meals_per_day.max(1) as f64;

    tracing::debug!(
        bmr,
        tdee,
        calories,
        protein,
        carbs,
        fat,
        goal = goal.as_str(),
        "calculated nutrition targets"
    );

    NutritionTargets {
        bmr,
        tdee,
        activity_multiplier: multiplier,
        goal,
        meals_per_day: profile.meals_per_day,
        calories_per_day: calories,
        protein_per_day: protein,
        carbs_per_day: carbs,
        fat_per_day: fat,
        calories_per_meal: (calories / meals).round(),
        protein_per_meal: (protein / meals).round(),
        carbs_per_meal: (carbs / meals).round(),
        fat_per_meal: (fat / meals).round(),
    }
}
