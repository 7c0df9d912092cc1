use assert_float_eq::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nutri_plan_rs::models::{CostTier, DietStyle, FitnessGoal, Sex, UserProfile};
use nutri_plan_rs::planner::{calculate_targets, canonical_profile, fingerprint};

fn profile(sex: Sex, age: u32, weight_kg: f64, height_cm: f64, trains: bool) -> UserProfile {
    UserProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        trains,
        meals_per_day: 3,
        diet_style: DietStyle::Balanced,
        cost_tier: CostTier::Standard,
        fitness_goal: None,
        restrictions: vec![],
        excluded_foods: vec![],
        protein_override_g: None,
    }
}

fn random_profile(rng: &mut StdRng) -> UserProfile {
    let goals = [
        None,
        Some(FitnessGoal::Cutting),
        Some(FitnessGoal::Maintenance),
        Some(FitnessGoal::Bulking),
    ];
    let styles = [
        DietStyle::Healthy,
        DietStyle::Balanced,
        DietStyle::Comfort,
        DietStyle::Mediterranean,
    ];
    UserProfile {
        sex: if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female },
        age: rng.gen_range(18..=75),
        weight_kg: rng.gen_range(45..=140) as f64,
        height_cm: rng.gen_range(150..=205) as f64,
        trains: rng.gen_bool(0.5),
        meals_per_day: rng.gen_range(3..=6),
        diet_style: styles[rng.gen_range(0..styles.len())],
        cost_tier: CostTier::Standard,
        fitness_goal: goals[rng.gen_range(0..goals.len())],
        restrictions: vec![],
        excluded_foods: vec![],
        protein_override_g: None,
    }
}

#[test]
fn test_maintenance_reference_values() {
    let mut p = profile(Sex::Male, 30, 80.0, 180.0, true);
    p.fitness_goal = Some(FitnessGoal::Maintenance);
    let targets = calculate_targets(&p);

    assert_float_absolute_eq!(targets.bmr, 1780.0, 1e-9);
    assert_float_absolute_eq!(targets.tdee, 2759.0, 1e-9);
    assert_float_absolute_eq!(targets.protein_per_day, 144.0, 1e-9);
    assert_float_absolute_eq!(targets.activity_multiplier, 1.55, 1e-9);
}

#[test]
fn test_healthy_style_resolves_to_cutting() {
    let mut p = profile(Sex::Male, 30, 80.0, 180.0, true);
    p.diet_style = DietStyle::Healthy;
    let targets = calculate_targets(&p);

    assert_eq!(targets.goal, FitnessGoal::Cutting);
    assert_float_absolute_eq!(targets.calories_per_day, 2345.0, 1e-9);
    assert_float_absolute_eq!(targets.protein_per_day, 176.0, 1e-9);
}

#[test]
fn test_macros_reconcile_with_calories() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = random_profile(&mut rng);
        let targets = calculate_targets(&p);
        if targets.carbs_per_day == 0.0 {
            continue;
        }
        let diff = (targets.macro_calories() - targets.calories_per_day).abs();
        assert!(diff <= 10.0, "{:?} off by {} kcal", p, diff);
    }
}

#[test]
fn test_ninety_kg_beats_sixty_kg() {
    for goal in [FitnessGoal::Cutting, FitnessGoal::Maintenance, FitnessGoal::Bulking] {
        for trains in [false, true] {
            let mut light = profile(Sex::Female, 40, 60.0, 170.0, trains);
            light.fitness_goal = Some(goal);
            let mut heavy = light.clone();
            heavy.weight_kg = 90.0;

            let light = calculate_targets(&light);
            let heavy = calculate_targets(&heavy);
            assert!(heavy.calories_per_day > light.calories_per_day);
            assert!(heavy.protein_per_day > light.protein_per_day);
        }
    }
}

#[test]
fn test_heavier_means_more_calories_and_protein() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let p = random_profile(&mut rng);
        let mut heavier = p.clone();
        heavier.weight_kg += rng.gen_range(1..=20) as f64;

        let base = calculate_targets(&p);
        let more = calculate_targets(&heavier);
        assert!(more.calories_per_day > base.calories_per_day, "{:?}", p);
        assert!(more.protein_per_day > base.protein_per_day, "{:?}", p);
    }
}

#[test]
fn test_training_raises_tdee_and_calories() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..300 {
        let mut p = random_profile(&mut rng);
        p.trains = false;
        let mut active = p.clone();
        active.trains = true;

        let rest = calculate_targets(&p);
        let trained = calculate_targets(&active);
        assert!(trained.tdee > rest.tdee, "{:?}", p);
        assert!(trained.calories_per_day > rest.calories_per_day, "{:?}", p);
    }
}

#[test]
fn test_protein_override_only_raises() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let mut p = random_profile(&mut rng);
        let baseline = calculate_targets(&p).protein_per_day;

        p.protein_override_g = Some(rng.gen_range(0..=300) as f64);
        let with_override = calculate_targets(&p).protein_per_day;
        assert!(with_override >= baseline);
    }
}

#[test]
fn test_targets_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..100 {
        let p = random_profile(&mut rng);
        assert_eq!(calculate_targets(&p), calculate_targets(&p.clone()));
        assert_eq!(fingerprint(&p), fingerprint(&p.clone()));
    }
}

#[test]
fn test_canonical_profile_field_order() {
    let mut p = profile(Sex::Female, 35, 75.0, 170.0, false);
    p.restrictions = vec!["vegan".to_string(), "Gluten_free".to_string()];
    p.excluded_foods = vec!["Tofu".to_string()];
    assert_eq!(
        canonical_profile(&p),
        "|female|35|75|170|false|3|balanced|standard|gluten_free,vegan|tofu|"
    );
}
