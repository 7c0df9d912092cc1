use serde::{Deserialize, Serialize};

use crate::models::CostTier;
use crate::planner::constants::*;

/// Runtime-configurable planner settings.
///
/// Every field has a default, so a partial JSON file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub plan_days: u32,
    pub snack_meals_threshold: u8,
    pub training_carb_multiplier: f64,
    pub min_portion_scale: f64,
    pub max_portion_scale: f64,
    pub portion_rounding_step: f64,
    pub budget_tier_weekly: f64,
    pub standard_tier_weekly: f64,
    pub premium_tier_weekly: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            plan_days: PLAN_DAYS,
            snack_meals_threshold: SNACK_MEALS_THRESHOLD,
            training_carb_multiplier: TRAINING_DAY_CARB_MULTIPLIER,
            min_portion_scale: MIN_PORTION_SCALE,
            max_portion_scale: MAX_PORTION_SCALE,
            portion_rounding_step: PORTION_ROUNDING_STEP,
            budget_tier_weekly: BUDGET_TIER_WEEKLY,
            standard_tier_weekly: STANDARD_TIER_WEEKLY,
            premium_tier_weekly: PREMIUM_TIER_WEEKLY,
        }
    }
}

impl PlannerConfig {
    /// Default weekly budget for a cost tier.
    pub fn weekly_budget(&self, tier: CostTier) -> f64 {
        match tier {
            CostTier::Budget => self.budget_tier_weekly,
            CostTier::Standard => self.standard_tier_weekly,
            CostTier::Premium => self.premium_tier_weekly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = PlannerConfig::default();
        assert_eq!(config.plan_days, PLAN_DAYS);
        assert_eq!(config.snack_meals_threshold, SNACK_MEALS_THRESHOLD);
        assert_eq!(config.training_carb_multiplier, TRAINING_DAY_CARB_MULTIPLIER);
        assert_eq!(config.portion_rounding_step, PORTION_ROUNDING_STEP);
    }

    #[test]
    fn test_weekly_budget_by_tier() {
        let config = PlannerConfig::default();
        assert!(config.weekly_budget(CostTier::Budget) < config.weekly_budget(CostTier::Standard));
        assert!(
            config.weekly_budget(CostTier::Standard) < config.weekly_budget(CostTier::Premium)
        );
    }
}
