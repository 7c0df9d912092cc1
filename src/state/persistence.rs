use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{AggregatedShoppingItem, UserProfile, WeeklyPlan};
use crate::planner::PlannerConfig;
use crate::state::catalog::{ReferenceData, ReferenceFile};

/// Load reference data (foods + substitutions) from a JSON file.
pub fn load_reference_data<P: AsRef<Path>>(path: P) -> Result<ReferenceData> {
    let content = fs::read_to_string(path)?;
    let file: ReferenceFile = serde_json::from_str(&content)?;
    Ok(ReferenceData::from_file(file))
}

pub fn save_reference_data<P: AsRef<Path>>(path: P, data: &ReferenceData) -> Result<()> {
    write_json(path, &data.to_file())
}

/// Load a user profile from a JSON file.
///
/// The profile is not validated here; the planning entry point does that.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    write_json(path, profile)
}

/// Load planner configuration. Missing fields keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    write_json(path, plan)
}

/// Load a saved plan. Callers compare its fingerprint to decide whether it is stale.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<WeeklyPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a shopping list to a CSV file.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, items: &[AggregatedShoppingItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "category",
        "quantity",
        "unit",
        "buy",
        "estimated_price",
        "coverage",
        "purchased",
    ])?;

    for entry in items {
        wtr.write_record([
            entry.item.id.clone(),
            entry.item.name.clone(),
            entry.item.category.as_str().to_string(),
            format!("{:.2}", entry.item.quantity),
            entry.item.unit.as_str().to_string(),
            entry.display_quantity.clone(),
            format!("{:.2}", entry.item.estimated_price),
            entry.coverage_text.clone(),
            entry.purchased.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_reference_data() {
        let json = r#"{
            "foods": [
                {"id": "tuna", "name": "Tuna (canned)", "category": "protein", "unit": "g",
                 "price_per_unit": 0.008, "macros": {"protein": 26, "carbs": 0, "fat": 1}, "tags": ["fish"]},
                {"id": "salmon", "name": "Salmon fillet", "category": "protein", "unit": "kg",
                 "price_per_unit": 15, "macros": {"protein": 20, "carbs": 0, "fat": 13}}
            ],
            "substitutions": {"Salmon fillet": ["Tuna (canned)"]}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let data = load_reference_data(file.path()).unwrap();
        assert_eq!(data.catalog.len(), 2);
        assert_eq!(data.substitutions.candidates("Salmon fillet").len(), 1);
        assert!(data.catalog.get("tuna").unwrap().tags.len() == 1);
    }

    #[test]
    fn test_reference_data_roundtrip() {
        let data = ReferenceData::builtin();
        let file = NamedTempFile::new().unwrap();
        save_reference_data(file.path(), &data).unwrap();

        let reloaded = load_reference_data(file.path()).unwrap();
        assert_eq!(reloaded.catalog.len(), data.catalog.len());
        assert_eq!(reloaded.substitutions, data.substitutions);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"snack_meals_threshold": 5}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.snack_meals_threshold, 5);
        assert_eq!(config.plan_days, PlannerConfig::default().plan_days);
    }

    #[test]
    fn test_load_profile_defaults_optional_fields() {
        let json = r#"{"sex": "female", "age": 41, "weight_kg": 62.5, "height_cm": 168,
            "trains": false, "meals_per_day": 3, "diet_style": "mediterranean", "cost_tier": "budget"}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert!(profile.fitness_goal.is_none());
        assert!(profile.restrictions.is_empty());
        assert!(profile.protein_override_g.is_none());
    }
}
