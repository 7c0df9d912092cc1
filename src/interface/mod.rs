pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, fuzzy_matches, prompt_exclusions, prompt_number, prompt_restrictions,
    prompt_yes_no,
};
pub use render::{
    display_conversion_rules, display_optimization, display_shopping_list, display_targets,
    display_weekly_plan, format_portion,
};
