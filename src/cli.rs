use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutriPlan: weekly meal plans with a budget-aware shopping list.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file replacing the built-in food catalog and substitutions.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// JSON file overriding planner settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan and shopping list.
    Plan {
        /// Profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        profile: PathBuf,

        /// Write the plan as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of consecutive weeks to plan.
        #[arg(short, long, default_value_t = 1)]
        weeks: usize,
    },

    /// Build the shopping list and fit it to a budget.
    Shop {
        /// Profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        profile: PathBuf,

        /// Weekly budget ceiling. Defaults to the profile's cost tier.
        #[arg(short, long, conflicts_with = "savings")]
        budget: Option<f64>,

        /// Amount to save instead of a fixed ceiling.
        #[arg(short, long)]
        savings: Option<f64>,

        /// Export the final list to CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Create a profile interactively.
    Profile {
        /// Where to save the profile.
        #[arg(short, long, default_value = "profile.json")]
        output: PathBuf,
    },

    /// Print the plan fingerprint of a profile.
    Fingerprint {
        /// Profile JSON file.
        #[arg(short, long, default_value = "profile.json")]
        profile: PathBuf,
    },

    /// List package sizes used for shopping quantities.
    Units,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: PathBuf::from("profile.json"),
            output: None,
            weeks: 1,
        }
    }
}
