use std::collections::HashSet;

use assert_float_eq::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::tempdir;

use nutri_plan_rs::models::{
    CostTier, DietStyle, FitnessGoal, OptimizationStatus, Sex, UserProfile,
};
use nutri_plan_rs::planner::{build_weekly_plan, fingerprint, plan_weeks, PlannerConfig};
use nutri_plan_rs::shopping::{
    conversion_rule, toggle_purchased, total_cost, BudgetGoal, BudgetOptimizer,
};
use nutri_plan_rs::state::{load_plan, save_plan, write_shopping_csv, ReferenceData};

fn random_profile(rng: &mut StdRng) -> UserProfile {
    let goals = [
        Some(FitnessGoal::Cutting),
        Some(FitnessGoal::Maintenance),
        Some(FitnessGoal::Bulking),
        None,
    ];
    let restrictions = ["", "vegetarian", "pescatarian", "gluten_free"];
    let exclusions = ["", "salmon", "broccoli", "milk"];
    let pick = |rng: &mut StdRng, values: &[&str]| -> Vec<String> {
        let value = values[rng.gen_range(0..values.len())];
        if value.is_empty() {
            vec![]
        } else {
            vec![value.to_string()]
        }
    };

    UserProfile {
        sex: if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female },
        age: rng.gen_range(18..=70),
        weight_kg: rng.gen_range(50..=120) as f64,
        height_cm: rng.gen_range(150..=200) as f64,
        trains: rng.gen_bool(0.5),
        meals_per_day: rng.gen_range(3..=6),
        diet_style: DietStyle::Balanced,
        cost_tier: CostTier::Standard,
        fitness_goal: goals[rng.gen_range(0..goals.len())],
        restrictions: pick(rng, &restrictions),
        excluded_foods: pick(rng, &exclusions),
        protein_override_g: None,
    }
}

fn sample_profile() -> UserProfile {
    UserProfile {
        sex: Sex::Male,
        age: 30,
        weight_kg: 80.0,
        height_cm: 180.0,
        trains: true,
        meals_per_day: 4,
        diet_style: DietStyle::Balanced,
        cost_tier: CostTier::Budget,
        fitness_goal: Some(FitnessGoal::Maintenance),
        restrictions: vec![],
        excluded_foods: vec![],
        protein_override_g: None,
    }
}

#[test]
fn test_shopping_list_invariants_hold_for_random_profiles() {
    let data = ReferenceData::builtin();
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..60 {
        let profile = random_profile(&mut rng);
        let plan = build_weekly_plan(&profile, &data, &config).unwrap();
        let list = plan.shopping_list.as_ref().unwrap();

        let ids: HashSet<&str> = list.items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), list.items.len(), "duplicate ids for {:?}", profile);

        for entry in &list.items {
            assert!(entry.item.quantity > 0.0);
            if let Some(rule) = conversion_rule(&entry.item.name) {
                let packages = entry.normalized.packages.unwrap() as f64;
                assert!(packages * rule.package_size >= entry.item.quantity);
            }
        }

        let keys: Vec<(&str, &str)> = list
            .items
            .iter()
            .map(|i| (i.item.category.as_str(), i.item.name.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

#[test]
fn test_optimizer_never_increases_cost() {
    let data = ReferenceData::builtin();
    let config = PlannerConfig::default();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..40 {
        let profile = random_profile(&mut rng);
        let plan = build_weekly_plan(&profile, &data, &config).unwrap();
        let list = plan.shopping_list.unwrap();
        let budget = list.total_estimated_cost * rng.gen_range(0.3..1.2);

        let result = BudgetOptimizer::new(&data, config.plan_days).optimize(
            &list.items,
            list.total_estimated_cost,
            BudgetGoal::Ceiling(budget),
        );

        assert!(result.total_estimated_cost <= list.total_estimated_cost + 1e-9);
        assert_eq!(result.items.len(), list.items.len());
        assert_float_absolute_eq!(result.total_estimated_cost, total_cost(&result.items), 1e-6);
        match result.status {
            OptimizationStatus::WithinBudget => {
                assert!(result.substitutions_applied.is_empty());
                assert!(list.total_estimated_cost <= budget);
            }
            OptimizationStatus::AdjustedToFit => {
                assert!(result.total_estimated_cost <= budget + 1e-9);
            }
            OptimizationStatus::OverBudgetMinimum => {
                assert!(result.total_estimated_cost > budget);
            }
        }
        for sub in &result.substitutions_applied {
            assert!(sub.saved > 0.0);
        }
    }
}

#[test]
fn test_identical_profiles_give_identical_plans() {
    let data = ReferenceData::builtin();
    let config = PlannerConfig::default();
    let first = build_weekly_plan(&sample_profile(), &data, &config).unwrap();
    let second = build_weekly_plan(&sample_profile(), &data, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tight_budget_on_premium_foods() {
    let data = ReferenceData::builtin();
    let config = PlannerConfig::default();
    let mut profile = sample_profile();
    profile.fitness_goal = Some(FitnessGoal::Bulking);
    let plan = build_weekly_plan(&profile, &data, &config).unwrap();
    let list = plan.shopping_list.unwrap();

    let result = BudgetOptimizer::new(&data, config.plan_days).optimize(
        &list.items,
        list.total_estimated_cost,
        BudgetGoal::Savings(5.0),
    );
    assert_eq!(result.status, OptimizationStatus::AdjustedToFit);
    assert!(result.total_saved() >= 5.0);
    assert!(result.substitutions_applied.iter().all(|s| s.from != s.to));
}

#[test]
fn test_plan_roundtrip_and_staleness() {
    let data = ReferenceData::builtin();
    let config = PlannerConfig::default();
    let profile = sample_profile();
    let plan = build_weekly_plan(&profile, &data, &config).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");
    save_plan(&path, &plan).unwrap();
    let reloaded = load_plan(&path).unwrap();

    assert_eq!(reloaded, plan);
    assert!(reloaded.is_valid_for(&fingerprint(&profile)));

    let mut changed = profile.clone();
    changed.weight_kg += 5.0;
    assert!(!reloaded.is_valid_for(&fingerprint(&changed)));
}

#[test]
fn test_shopping_csv_export() {
    let data = ReferenceData::builtin();
    let plan = build_weekly_plan(&sample_profile(), &data, &PlannerConfig::default()).unwrap();
    let mut items = plan.shopping_list.unwrap().items;
    let first_source = items[0].source_ids[0].clone();
    assert_eq!(toggle_purchased(&mut items, &first_source), Some(true));

    let dir = tempdir().unwrap();
    let path = dir.path().join("list.csv");
    write_shopping_csv(&path, &items).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "id");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), items.len());
    assert_eq!(&rows[0][8], "true");
}

#[test]
fn test_multi_week_plans_share_fingerprint() {
    let data = ReferenceData::builtin();
    let plans = plan_weeks(&sample_profile(), &data, &PlannerConfig::default(), 2).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].fingerprint, plans[1].fingerprint);
    assert_ne!(plans[0].days[0].breakfast.name, plans[1].days[0].breakfast.name);
}
