use serde::{Deserialize, Serialize};

use crate::models::profile::FitnessGoal;
use crate::models::shopping::AggregatedShoppingItem;

/// Derived daily and per-meal nutrition targets. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_multiplier: f64,
    pub goal: FitnessGoal,
    pub meals_per_day: u8,
    pub calories_per_day: f64,
    pub protein_per_day: f64,
    pub carbs_per_day: f64,
    pub fat_per_day: f64,
    pub calories_per_meal: f64,
    pub protein_per_meal: f64,
    pub carbs_per_meal: f64,
    pub fat_per_meal: f64,
}

impl NutritionTargets {
    /// Calories implied by the daily macro targets (4/4/9 kcal per gram).
    pub fn macro_calories(&self) -> f64 {
        self.protein_per_day * 4.0 + self.carbs_per_day * 4.0 + self.fat_per_day * 9.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const WEEK: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn short(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "mon",
            DayOfWeek::Tuesday => "tue",
            DayOfWeek::Wednesday => "wed",
            DayOfWeek::Thursday => "thu",
            DayOfWeek::Friday => "fri",
            DayOfWeek::Saturday => "sat",
            DayOfWeek::Sunday => "sun",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

/// Amount of one food in a meal, expressed in the food's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    pub food_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub slot: MealSlot,
    pub food_ids: Vec<String>,
    pub portions: Vec<Portion>,
    pub protein_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: DayOfWeek,
    pub is_training_day: bool,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snack: Option<Meal>,
}

impl DayPlan {
    /// Meals of the day in serving order (3 or 4).
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .chain(self.snack.as_ref())
    }

    pub fn meal_count(&self) -> usize {
        if self.snack.is_some() { 4 } else { 3 }
    }

    pub fn protein_g(&self) -> f64 {
        self.meals().map(|m| m.protein_g).sum()
    }
}

/// Finished shopping list attached to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<AggregatedShoppingItem>,
    pub total_estimated_cost: f64,
}

impl ShoppingList {
    pub fn new(items: Vec<AggregatedShoppingItem>) -> Self {
        let total_estimated_cost = items.iter().map(|i| i.item.estimated_price).sum();
        Self {
            items,
            total_estimated_cost,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
    pub targets: NutritionTargets,
    pub fingerprint: String,
    #[serde(default)]
    pub shopping_list: Option<ShoppingList>,
}

impl WeeklyPlan {
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|d| d.meals())
    }

    pub fn training_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_training_day).count()
    }

    /// Whether a cached plan is still valid for a profile fingerprint.
    pub fn is_valid_for(&self, fingerprint: &str) -> bool {
        self.fingerprint == fingerprint
    }
}
