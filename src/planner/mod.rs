pub mod config;
pub mod constants;
pub mod fingerprint;
pub mod generator;
pub mod rotation;
pub mod targets;
pub mod templates;

pub use config::PlannerConfig;
pub use constants::*;
pub use fingerprint::{canonical_profile, djb2, fingerprint};
pub use generator::{round_portion, MealPlanGenerator, VariantOrder};
pub use rotation::{RotationEngine, RotationEntry};
pub use targets::{
    activity_multiplier, calculate_bmr, calculate_targets, calculate_tdee, mifflin_st_jeor,
    protein_target, split_macros,
};
pub use templates::{all_templates, templates_for, MealTemplate};

use crate::error::{PlanError, Result};
use crate::models::{ShoppingList, UserProfile, WeeklyPlan};
use crate::shopping::{aggregate, build_raw_items};
use crate::state::ReferenceData;

/// Aggregate the plan's ingredients and attach the resulting shopping list.
pub fn attach_shopping_list(
    plan: &mut WeeklyPlan,
    reference: &ReferenceData,
    config: &PlannerConfig,
) {
    let raw = build_raw_items(plan, &reference.catalog);
    let items = aggregate(&raw, config.plan_days);
    plan.shopping_list = Some(ShoppingList::new(items));
}

fn plan_week(
    profile: &UserProfile,
    reference: &ReferenceData,
    config: &PlannerConfig,
    order: VariantOrder,
    rotation: &mut RotationEngine,
) -> WeeklyPlan {
    let targets = calculate_targets(profile);
    let generator = MealPlanGenerator::new(&reference.catalog, config);
    let mut plan = generator.generate(
        profile,
        &targets,
        Some(targets.protein_per_day),
        order,
        rotation,
    );
    attach_shopping_list(&mut plan, reference, config);
    plan
}

/// Full single-week pipeline: validate, targets, meals, shopping list.
pub fn build_weekly_plan(
    profile: &UserProfile,
    reference: &ReferenceData,
    config: &PlannerConfig,
) -> Result<WeeklyPlan> {
    profile.validate()?;
    let mut rotation = RotationEngine::new();
    Ok(plan_week(
        profile,
        reference,
        config,
        VariantOrder::Pattern,
        &mut rotation,
    ))
}

/// Consecutive weeks. Each week after the first reads the A/B pattern in
/// whichever direction scores the lower rotation penalty against the
/// previous week, then starts a fresh rotation period.
pub fn plan_weeks(
    profile: &UserProfile,
    reference: &ReferenceData,
    config: &PlannerConfig,
    weeks: usize,
) -> Result<Vec<WeeklyPlan>> {
    profile.validate()?;
    if weeks == 0 {
        return Err(PlanError::InvalidInput(
            "at least one week must be planned".to_string(),
        ));
    }

    let generator = MealPlanGenerator::new(&reference.catalog, config);
    let mut rotation = RotationEngine::new();
    let mut plans = Vec::with_capacity(weeks);

    for week in 0..weeks {
        let order = if week == 0 {
            VariantOrder::Pattern
        } else {
            let pattern =
                rotation.total_penalty(generator.week_food_ids(profile, VariantOrder::Pattern));
            let mirrored =
                rotation.total_penalty(generator.week_food_ids(profile, VariantOrder::Mirrored));
            tracing::debug!(week = week + 1, pattern, mirrored, "rotation penalties");
            if mirrored < pattern {
                VariantOrder::Mirrored
            } else {
                VariantOrder::Pattern
            }
        };
        rotation.reset();
        plans.push(plan_week(profile, reference, config, order, &mut rotation));
    }

    Ok(plans)
}
