pub mod food;
pub mod plan;
pub mod profile;
pub mod shopping;

pub use food::{DietTag, FoodCategory, FoodReference, Macros, Unit};
pub use plan::{
    DayOfWeek, DayPlan, Meal, MealSlot, NutritionTargets, Portion, ShoppingList, WeeklyPlan,
};
pub use profile::{CostTier, DietStyle, FitnessGoal, Restriction, Sex, UserProfile};
pub use shopping::{
    AggregatedShoppingItem, MealCoverage, NormalizedQuantity, OptimizationResult,
    OptimizationStatus, RawLineItem, ShoppingListItem, SubstitutionRecord,
};
