use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::FitnessGoal;

// ─────────────────────────────────────────────────────────────────────────────
// Energy expenditure
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor sex offsets (kcal).
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Activity multipliers. Training is binary: sedentary or moderate.
pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
pub const MODERATE_MULTIPLIER: f64 = 1.55;

/// Share of calories allotted to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calorie multiplier per goal.
pub static GOAL_CALORIE_MULTIPLIERS: LazyLock<HashMap<FitnessGoal, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(FitnessGoal::Cutting, 0.85);
    m.insert(FitnessGoal::Maintenance, 1.0);
    m.insert(FitnessGoal::Bulking, 1.10);
    m
});

/// Protein grams per kg of body weight per goal.
pub static GOAL_PROTEIN_PER_KG: LazyLock<HashMap<FitnessGoal, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(FitnessGoal::Cutting, 2.2);
    m.insert(FitnessGoal::Maintenance, 1.8);
    m.insert(FitnessGoal::Bulking, 2.0);
    m
});

/// Daily protein used for portioning when no target is supplied.
pub static GOAL_DEFAULT_PROTEIN_G: LazyLock<HashMap<FitnessGoal, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(FitnessGoal::Cutting, 150.0);
    m.insert(FitnessGoal::Maintenance, 120.0);
    m.insert(FitnessGoal::Bulking, 140.0);
    m
});

pub fn goal_calorie_multiplier(goal: FitnessGoal) -> f64 {
    *GOAL_CALORIE_MULTIPLIERS.get(&goal).unwrap_or(&1.0)
}

pub fn goal_protein_per_kg(goal: FitnessGoal) -> f64 {
    *GOAL_PROTEIN_PER_KG.get(&goal).unwrap_or(&1.8)
}

pub fn goal_default_protein(goal: FitnessGoal) -> f64 {
    *GOAL_DEFAULT_PROTEIN_G.get(&goal).unwrap_or(&120.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Weekly structure
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a plan; also the upper bound for shopping coverage.
pub const PLAN_DAYS: u32 = 7;

/// Meals per day at which a snack is added (bulking always gets one).
pub const SNACK_MEALS_THRESHOLD: u8 = 4;

/// Variant index (0 = A, 1 = B) per day, Monday first.
pub const BREAKFAST_PATTERN: [usize; 7] = [0, 1, 0, 1, 0, 1, 0];
pub const LUNCH_PATTERN: [usize; 7] = [1, 0, 1, 0, 1, 0, 1];
pub const DINNER_PATTERN: [usize; 7] = [0, 0, 1, 1, 0, 1, 0];
pub const SNACK_PATTERN: [usize; 7] = [1, 0, 0, 1, 0, 1, 1];

/// Mon/Wed/Thu/Sat.
pub const TRAINING_PATTERN: [bool; 7] = [true, false, true, true, false, true, false];

// ─────────────────────────────────────────────────────────────────────────────
// Portioning
// ─────────────────────────────────────────────────────────────────────────────

/// Grain portions are scaled up on training days.
pub const TRAINING_DAY_CARB_MULTIPLIER: f64 = 1.25;

/// Template scale is clamped to this range so meals stay recognisable.
pub const MIN_PORTION_SCALE: f64 = 0.5;
pub const MAX_PORTION_SCALE: f64 = 2.0;

/// Gram/millilitre portions are rounded to this step.
pub const PORTION_ROUNDING_STEP: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Budget
// ─────────────────────────────────────────────────────────────────────────────

/// Weekly budget (currency units) per cost tier when none is given.
pub const BUDGET_TIER_WEEKLY: f64 = 60.0;
pub const STANDARD_TIER_WEEKLY: f64 = 90.0;
pub const PREMIUM_TIER_WEEKLY: f64 = 140.0;

/// Multiplier used in the protein-per-currency score.
pub const EFFICIENCY_SCALE: f64 = 10.0;
