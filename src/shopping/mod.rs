pub mod aggregator;
pub mod builder;
pub mod normalizer;
pub mod optimizer;

pub use aggregator::{aggregate, coverage_text, toggle_purchased, total_cost};
pub use builder::build_raw_items;
pub use normalizer::{
    conversion_rule, foods_with_conversion_rules, has_conversion_rule, normalize, ConversionRule,
    PackageKind,
};
pub use optimizer::{BudgetGoal, BudgetOptimizer};
