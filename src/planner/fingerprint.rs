use crate::models::UserProfile;

const DJB2_SEED: i32 = 5381;

/// djb2 rolling hash over UTF-16 code units, wrapping at 32 bits.
pub fn djb2(input: &str) -> i32 {
    input.encode_utf16().fold(DJB2_SEED, |hash, unit| {
        hash.wrapping_mul(33).wrapping_add(unit as i32)
    })
}

fn sorted_list(values: &[String]) -> String {
    let mut values: Vec<String> = values.iter().map(|v| v.trim().to_lowercase()).collect();
    values.sort();
    values.join(",")
}

/// Canonical form of the profile fields that influence a plan.
///
/// Field order is fixed; restriction and exclusion lists are sorted so their
/// input order does not matter.
pub fn canonical_profile(profile: &UserProfile) -> String {
    [
        profile
            .fitness_goal
            .map(|g| g.as_str().to_string())
            .unwrap_or_default(),
        profile.sex.as_str().to_string(),
        profile.age.to_string(),
        profile.weight_kg.to_string(),
        profile.height_cm.to_string(),
        profile.trains.to_string(),
        profile.meals_per_day.to_string(),
        profile.diet_style.as_str().to_string(),
        profile.cost_tier.as_str().to_string(),
        sorted_list(&profile.restrictions),
        sorted_list(&profile.excluded_foods),
        profile
            .protein_override_g
            .map(|p| p.to_string())
            .unwrap_or_default(),
    ]
    .join("|")
}

/// Deterministic fingerprint used by callers to detect a stale cached plan.
pub fn fingerprint(profile: &UserProfile) -> String {
    format!("{:x}", djb2(&canonical_profile(profile)).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostTier, DietStyle, FitnessGoal, Sex};

    fn sample_profile() -> UserProfile {
        UserProfile {
            sex: Sex::Female,
            age: 35,
            weight_kg: 75.0,
            height_cm: 170.0,
            trains: false,
            meals_per_day: 4,
            diet_style: DietStyle::Healthy,
            cost_tier: CostTier::Budget,
            fitness_goal: None,
            restrictions: vec!["vegetarian".to_string(), "gluten_free".to_string()],
            excluded_foods: vec!["Kale".to_string(), "Tofu".to_string()],
            protein_override_g: None,
        }
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        // 5381 * 33 + 'a' (97)
        assert_eq!(djb2("a"), 177_670);
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let profile = sample_profile();
        assert_eq!(fingerprint(&profile), fingerprint(&profile.clone()));
        assert!(!fingerprint(&profile).is_empty());
    }

    #[test]
    fn test_fingerprint_ignores_list_order() {
        let profile = sample_profile();
        let mut reordered = sample_profile();
        reordered.restrictions.reverse();
        reordered.excluded_foods.reverse();
        assert_eq!(fingerprint(&profile), fingerprint(&reordered));
    }

    #[test]
    fn test_fingerprint_changes_with_each_field() {
        let base = fingerprint(&sample_profile());

        let variants: Vec<Box<dyn Fn(&mut UserProfile)>> = vec![
            Box::new(|p: &mut UserProfile| p.weight_kg = 85.0),
            Box::new(|p: &mut UserProfile| p.age = 36),
            Box::new(|p: &mut UserProfile| p.height_cm = 171.0),
            Box::new(|p: &mut UserProfile| p.sex = Sex::Male),
            Box::new(|p: &mut UserProfile| p.trains = true),
            Box::new(|p: &mut UserProfile| p.meals_per_day = 3),
            Box::new(|p: &mut UserProfile| p.diet_style = DietStyle::Comfort),
            Box::new(|p: &mut UserProfile| p.cost_tier = CostTier::Premium),
            Box::new(|p: &mut UserProfile| p.fitness_goal = Some(FitnessGoal::Bulking)),
            Box::new(|p: &mut UserProfile| p.restrictions.push("vegan".to_string())),
            Box::new(|p: &mut UserProfile| p.excluded_foods.clear()),
            Box::new(|p: &mut UserProfile| p.protein_override_g = Some(160.0)),
        ];

        for (i, change) in variants.iter().enumerate() {
            let mut profile = sample_profile();
            change(&mut profile);
            assert_ne!(fingerprint(&profile), base, "variant {} kept the fingerprint", i);
        }
    }
}
