pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{FoodReference, UserProfile, WeeklyPlan};
pub use planner::{build_weekly_plan, fingerprint, PlannerConfig};
