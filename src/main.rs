use clap::Parser;
use std::path::{Path, PathBuf};

use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::Result;
use nutri_plan_rs::interface::{
    collect_profile, display_conversion_rules, display_optimization, display_shopping_list,
    display_weekly_plan, prompt_yes_no,
};
use nutri_plan_rs::planner::{build_weekly_plan, fingerprint, plan_weeks, PlannerConfig};
use nutri_plan_rs::shopping::{BudgetGoal, BudgetOptimizer};
use nutri_plan_rs::state::{
    load_config, load_profile, load_reference_data, save_plan, save_profile, write_shopping_csv,
    ReferenceData,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log filter from `NUTRI_PLAN_LOG`, then `RUST_LOG`, default `warn`.
fn init_tracing(verbose: bool) {
    let log_env = if verbose {
        "debug".to_string()
    } else {
        std::env::var("NUTRI_PLAN_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string())
    };
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let reference = match &cli.catalog {
        Some(path) => load_reference_data(path)?,
        None => ReferenceData::builtin(),
    };
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };
    tracing::debug!(foods = reference.catalog.len(), "reference data loaded");

    match cli.command.unwrap_or_default() {
        Command::Plan {
            profile,
            output,
            weeks,
        } => cmd_plan(&reference, &config, &profile, output.as_deref(), weeks),
        Command::Shop {
            profile,
            budget,
            savings,
            csv,
        } => cmd_shop(&reference, &config, &profile, budget, savings, csv.as_deref()),
        Command::Profile { output } => cmd_profile(&reference, &output),
        Command::Fingerprint { profile } => cmd_fingerprint(&profile),
        Command::Units => {
            display_conversion_rules();
            Ok(())
        }
    }
}

fn require_file(path: &Path) -> bool {
    if path.exists() {
        return true;
    }
    eprintln!("Profile file not found: {}", path.display());
    eprintln!("Run 'nutri_plan profile' to create one.");
    false
}

/// Generate one or more weekly plans.
fn cmd_plan(
    reference: &ReferenceData,
    config: &PlannerConfig,
    profile_path: &Path,
    output: Option<&Path>,
    weeks: usize,
) -> Result<()> {
    if !require_file(profile_path) {
        return Ok(());
    }
    let profile = load_profile(profile_path)?;
    let plans = plan_weeks(&profile, reference, config, weeks)?;

    for (i, plan) in plans.iter().enumerate() {
        if plans.len() > 1 {
            println!();
            println!("##### Week {} #####", i + 1);
        }
        display_weekly_plan(plan, &reference.catalog);
        if let Some(list) = &plan.shopping_list {
            display_shopping_list(&list.items, list.total_estimated_cost);
        }
    }

    if let Some(path) = output {
        if let [plan] = plans.as_slice() {
            save_plan(path, plan)?;
        } else {
            for (i, plan) in plans.iter().enumerate() {
                save_plan(week_path(path, i + 1), plan)?;
            }
        }
        println!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// `plan.json` -> `plan.week2.json`.
fn week_path(path: &Path, week: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plan".to_string());
    path.with_file_name(format!("{}.week{}.json", stem, week))
}

/// Build the shopping list and fit it to the budget.
fn cmd_shop(
    reference: &ReferenceData,
    config: &PlannerConfig,
    profile_path: &Path,
    budget: Option<f64>,
    savings: Option<f64>,
    csv: Option<&Path>,
) -> Result<()> {
    if !require_file(profile_path) {
        return Ok(());
    }
    let profile = load_profile(profile_path)?;
    let plan = build_weekly_plan(&profile, reference, config)?;
    let Some(list) = plan.shopping_list else {
        println!("No shopping list generated.");
        return Ok(());
    };

    let goal = match (budget, savings) {
        (_, Some(target)) => BudgetGoal::Savings(target),
        (Some(ceiling), None) => BudgetGoal::Ceiling(ceiling),
        (None, None) => BudgetGoal::Ceiling(config.weekly_budget(profile.cost_tier)),
    };

    let optimizer = BudgetOptimizer::new(reference, config.plan_days);
    let result = optimizer.optimize(&list.items, list.total_estimated_cost, goal);

    display_shopping_list(&result.items, result.total_estimated_cost);
    display_optimization(&result);

    if let Some(path) = csv {
        write_shopping_csv(path, &result.items)?;
        println!("Shopping list exported to {}", path.display());
    }

    Ok(())
}

/// Create a profile interactively.
fn cmd_profile(reference: &ReferenceData, output: &Path) -> Result<()> {
    if output.exists() && !prompt_yes_no("Profile exists. Overwrite?", false)? {
        return Ok(());
    }

    let profile = collect_profile(reference.catalog.all())?;
    save_profile(output, &profile)?;
    println!("Profile saved to {} ({})", output.display(), fingerprint(&profile));
    Ok(())
}

fn cmd_fingerprint(profile_path: &Path) -> Result<()> {
    if !require_file(profile_path) {
        return Ok(());
    }
    let profile = load_profile(profile_path)?;
    println!("{}", fingerprint(&profile));
    Ok(())
}
