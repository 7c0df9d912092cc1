use crate::models::{
    DayOfWeek, DayPlan, FitnessGoal, FoodCategory, Meal, MealSlot, NutritionTargets, Portion,
    Restriction, Unit, UserProfile, WeeklyPlan,
};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::*;
use crate::planner::fingerprint::fingerprint;
use crate::planner::rotation::RotationEngine;
use crate::planner::templates::{templates_for, MealTemplate};
use crate::state::FoodCatalog;

/// Which way the weekly A/B pattern is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariantOrder {
    #[default]
    Pattern,
    /// Every A becomes B and vice versa.
    Mirrored,
}

impl VariantOrder {
    fn apply(&self, variant: usize) -> usize {
        match self {
            VariantOrder::Pattern => variant,
            VariantOrder::Mirrored => 1 - variant,
        }
    }
}

fn slot_pattern(slot: MealSlot) -> &'static [usize; 7] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_PATTERN,
        MealSlot::Lunch => &LUNCH_PATTERN,
        MealSlot::Dinner => &DINNER_PATTERN,
        MealSlot::Snack => &SNACK_PATTERN,
    }
}

/// Round a portion: pieces up to whole units, everything else to the step.
pub fn round_portion(amount: f64, unit: Unit, step: f64) -> f64 {
    match unit {
        Unit::Piece => amount.ceil().max(1.0),
        _ if step > 0.0 => ((amount / step).round() * step).max(step),
        _ => amount,
    }
}

/// Builds the seven-day meal structure from the fixed template catalog.
pub struct MealPlanGenerator<'a> {
    catalog: &'a FoodCatalog,
    config: &'a PlannerConfig,
}

impl<'a> MealPlanGenerator<'a> {
    pub fn new(catalog: &'a FoodCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn includes_snack(&self, goal: FitnessGoal, meals_per_day: u8) -> bool {
        goal == FitnessGoal::Bulking || meals_per_day >= self.config.snack_meals_threshold
    }

    fn template_allowed(
        &self,
        template: &MealTemplate,
        exclusions: &[String],
        restrictions: &[Restriction],
    ) -> bool {
        template.food_ids().all(|id| {
            let name = self.catalog.name_of(id).to_lowercase();
            if exclusions.iter().any(|term| name.contains(term.as_str())) {
                return false;
            }
            match self.catalog.get(id) {
                Some(food) => restrictions.iter().all(|r| r.allows(food)),
                None => true,
            }
        })
    }

    /// Surviving variants for a slot after exclusions and restrictions.
    ///
    /// Falls back to the unfiltered pair when nothing survives.
    pub fn available_templates(
        &self,
        profile: &UserProfile,
        slot: MealSlot,
    ) -> Vec<&'static MealTemplate> {
        let goal = profile.resolved_goal();
        let pair = templates_for(goal, slot);
        let exclusions: Vec<String> = profile
            .excluded_foods
            .iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        let restrictions = profile.parsed_restrictions();

        let survivors: Vec<&'static MealTemplate> = pair
            .iter()
            .filter(|t| self.template_allowed(t, &exclusions, &restrictions))
            .collect();

        if survivors.is_empty() {
            tracing::warn!(
                slot = slot.as_str(),
                goal = goal.as_str(),
                "every template excluded, using unfiltered pair"
            );
            return pair.iter().collect();
        }
        survivors
    }

    fn pick(
        available: &[&'static MealTemplate],
        slot: MealSlot,
        day_index: usize,
        order: VariantOrder,
    ) -> &'static MealTemplate {
        if available.len() == 1 {
            return available[0];
        }
        let variant = order.apply(slot_pattern(slot)[day_index % 7]);
        available[variant.min(available.len() - 1)]
    }

    /// Food ids a week would use, without recording anything.
    pub fn week_food_ids(&self, profile: &UserProfile, order: VariantOrder) -> Vec<&'static str> {
        let snack = self.includes_snack(profile.resolved_goal(), profile.meals_per_day);
        let mut ids = Vec::new();
        for slot in MealSlot::ALL {
            if slot == MealSlot::Snack && !snack {
                continue;
            }
            let available = self.available_templates(profile, slot);
            for day_index in 0..DayOfWeek::WEEK.len() {
                ids.extend(Self::pick(&available, slot, day_index, order).food_ids());
            }
        }
        ids
    }

    fn build_meal(
        &self,
        template: &MealTemplate,
        day: DayOfWeek,
        slot: MealSlot,
        meal_protein_target: f64,
        is_training_day: bool,
    ) -> Meal {
        let scale = if template.protein_g > 0.0 {
            (meal_protein_target / template.protein_g)
                .clamp(self.config.min_portion_scale, self.config.max_portion_scale)
        } else {
            1.0
        };

        let portions = template
            .items
            .iter()
            .map(|&(food_id, base)| {
                let food = self.catalog.get(food_id);
                let mut amount = base * scale;
                if is_training_day && food.is_some_and(|f| f.category == FoodCategory::Grain) {
                    amount *= self.config.training_carb_multiplier;
                }
                let unit = food.map(|f| f.unit).unwrap_or(Unit::Gram);
                Portion {
                    food_id: food_id.to_string(),
                    amount: round_portion(amount, unit, self.config.portion_rounding_step),
                }
            })
            .collect();

        Meal {
            id: format!("{}-{}", day.short(), slot.as_str()),
            name: template.name.to_string(),
            slot,
            food_ids: template.food_ids().map(String::from).collect(),
            portions,
            protein_g: (template.protein_g * scale * 10.0).round() / 10.0,
        }
    }

    /// Generate a week and record every placed food in `rotation`.
    ///
    /// `protein_target` is the daily protein used for portioning; the goal
    /// default applies when it is `None`.
    pub fn generate(
        &self,
        profile: &UserProfile,
        targets: &NutritionTargets,
        protein_target: Option<f64>,
        order: VariantOrder,
        rotation: &mut RotationEngine,
    ) -> WeeklyPlan {
        let goal = profile.resolved_goal();
        let with_snack = self.includes_snack(goal, profile.meals_per_day);
        let day_protein = protein_target.unwrap_or_else(|| goal_default_protein(goal));
        let meals_per_day = if with_snack { 4.0 } else { 3.0 };
        let meal_protein = day_protein / meals_per_day;

        let breakfasts = self.available_templates(profile, MealSlot::Breakfast);
        let lunches = self.available_templates(profile, MealSlot::Lunch);
        let dinners = self.available_templates(profile, MealSlot::Dinner);
        let snacks = with_snack.then(|| self.available_templates(profile, MealSlot::Snack));

        let mut days = Vec::with_capacity(DayOfWeek::WEEK.len());
        for (day_index, day) in DayOfWeek::WEEK.into_iter().enumerate() {
            let is_training_day = profile.trains && TRAINING_PATTERN[day_index];

            let mut place = |templates: &[&'static MealTemplate], slot: MealSlot| {
                let template = Self::pick(templates, slot, day_index, order);
                for id in template.food_ids() {
                    rotation.record_usage(id);
                }
                self.build_meal(template, day, slot, meal_protein, is_training_day)
            };

            days.push(DayPlan {
                day,
                is_training_day,
                breakfast: place(&breakfasts, MealSlot::Breakfast),
                lunch: place(&lunches, MealSlot::Lunch),
                dinner: place(&dinners, MealSlot::Dinner),
                snack: snacks.as_deref().map(|t| place(t, MealSlot::Snack)),
            });
        }

        tracing::debug!(
            goal = goal.as_str(),
            snack = with_snack,
            day_protein,
            tracked_foods = rotation.len(),
            "generated weekly meal structure"
        );

        WeeklyPlan {
            days,
            targets: targets.clone(),
            fingerprint: fingerprint(profile),
            shopping_list: None,
        }
    }
}
