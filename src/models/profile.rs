use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::food::{DietTag, FoodReference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietStyle {
    Healthy,
    Balanced,
    Comfort,
    Mediterranean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Budget,
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    Cutting,
    Maintenance,
    Bulking,
}

macro_rules! impl_as_str {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

impl_as_str!(Sex { Male => "male", Female => "female" });
impl_as_str!(DietStyle {
    Healthy => "healthy",
    Balanced => "balanced",
    Comfort => "comfort",
    Mediterranean => "mediterranean",
});
impl_as_str!(CostTier { Budget => "budget", Standard => "standard", Premium => "premium" });
impl_as_str!(FitnessGoal {
    Cutting => "cutting",
    Maintenance => "maintenance",
    Bulking => "bulking",
});

/// A dietary restriction parsed from the profile's free-form list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restriction {
    Vegetarian,
    Vegan,
    Pescatarian,
    GlutenFree,
    DairyFree,
    /// Unknown restriction, matched against food names.
    Custom(String),
}

impl Restriction {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "vegetarian" => Restriction::Vegetarian,
            "vegan" => Restriction::Vegan,
            "pescatarian" => Restriction::Pescatarian,
            "gluten_free" => Restriction::GlutenFree,
            "dairy_free" | "lactose_free" => Restriction::DairyFree,
            _ => Restriction::Custom(raw.trim().to_lowercase()),
        }
    }

    /// Whether a food may be eaten under this restriction.
    pub fn allows(&self, food: &FoodReference) -> bool {
        let blocked: &[DietTag] = match self {
            Restriction::Vegetarian => &[DietTag::Meat, DietTag::Fish],
            Restriction::Vegan => &[DietTag::Meat, DietTag::Fish, DietTag::Dairy, DietTag::Egg],
            Restriction::Pescatarian => &[DietTag::Meat],
            Restriction::GlutenFree => &[DietTag::Gluten],
            Restriction::DairyFree => &[DietTag::Dairy],
            Restriction::Custom(term) => {
                return term.is_empty() || !food.name.to_lowercase().contains(term.as_str());
            }
        };
        !blocked.iter().any(|tag| food.has_tag(*tag))
    }
}

/// Planning input. Immutable for the duration of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub trains: bool,
    pub meals_per_day: u8,
    pub diet_style: DietStyle,
    pub cost_tier: CostTier,
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub excluded_foods: Vec<String>,
    #[serde(default)]
    pub protein_override_g: Option<f64>,
}

impl UserProfile {
    /// Explicit goal if set, otherwise derived from the diet style.
    pub fn resolved_goal(&self) -> FitnessGoal {
        self.fitness_goal.unwrap_or(match self.diet_style {
            DietStyle::Healthy => FitnessGoal::Cutting,
            DietStyle::Comfort => FitnessGoal::Bulking,
            _ => FitnessGoal::Maintenance,
        })
    }

    pub fn parsed_restrictions(&self) -> Vec<Restriction> {
        self.restrictions
            .iter()
            .filter(|r| !r.trim().is_empty())
            .map(|r| Restriction::parse(r))
            .collect()
    }

    /// Range checks performed at the pipeline boundary.
    pub fn validate(&self) -> Result<()> {
        if !(12..=90).contains(&self.age) {
            return Err(PlanError::InvalidProfile(format!(
                "age {} outside 12-90",
                self.age
            )));
        }
        if !(30.0..=250.0).contains(&self.weight_kg) {
            return Err(PlanError::InvalidProfile(format!(
                "weight {} kg outside 30-250",
                self.weight_kg
            )));
        }
        if !(120.0..=230.0).contains(&self.height_cm) {
            return Err(PlanError::InvalidProfile(format!(
                "height {} cm outside 120-230",
                self.height_cm
            )));
        }
        if !(3..=6).contains(&self.meals_per_day) {
            return Err(PlanError::InvalidProfile(format!(
                "meals per day {} outside 3-6",
                self.meals_per_day
            )));
        }
        if let Some(protein) = self.protein_override_g {
            if !protein.is_finite() || protein < 0.0 {
                return Err(PlanError::InvalidProfile(format!(
                    "protein override {} must be a non-negative number",
                    protein
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food::{FoodCategory, Macros, Unit};

    fn sample_profile() -> UserProfile {
        UserProfile {
            sex: Sex::Male,
            age: 30,
            weight_kg: 80.0,
            height_cm: 180.0,
            trains: true,
            meals_per_day: 3,
            diet_style: DietStyle::Balanced,
            cost_tier: CostTier::Standard,
            fitness_goal: None,
            restrictions: vec![],
            excluded_foods: vec![],
            protein_override_g: None,
        }
    }

    fn food(name: &str, tags: Vec<DietTag>) -> FoodReference {
        FoodReference {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: FoodCategory::Protein,
            unit: Unit::Gram,
            price_per_unit: 0.01,
            macros: Macros::default(),
            tags,
        }
    }

    #[test]
    fn test_goal_resolution() {
        let mut profile = sample_profile();
        assert_eq!(profile.resolved_goal(), FitnessGoal::Maintenance);

        profile.diet_style = DietStyle::Healthy;
        assert_eq!(profile.resolved_goal(), FitnessGoal::Cutting);

        profile.diet_style = DietStyle::Comfort;
        assert_eq!(profile.resolved_goal(), FitnessGoal::Bulking);

        profile.fitness_goal = Some(FitnessGoal::Cutting);
        assert_eq!(profile.resolved_goal(), FitnessGoal::Cutting);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(sample_profile().validate().is_ok());

        let mut young = sample_profile();
        young.age = 11;
        assert!(matches!(young.validate(), Err(PlanError::InvalidProfile(_))));

        let mut negative = sample_profile();
        negative.weight_kg = -5.0;
        assert!(negative.validate().is_err());

        let mut meals = sample_profile();
        meals.meals_per_day = 7;
        assert!(meals.validate().is_err());

        let mut protein = sample_profile();
        protein.protein_override_g = Some(-1.0);
        assert!(protein.validate().is_err());
    }

    #[test]
    fn test_restriction_parsing() {
        assert_eq!(Restriction::parse("Vegan"), Restriction::Vegan);
        assert_eq!(Restriction::parse("gluten-free"), Restriction::GlutenFree);
        assert_eq!(Restriction::parse("Lactose free"), Restriction::DairyFree);
        assert_eq!(
            Restriction::parse(" Peanuts "),
            Restriction::Custom("peanuts".to_string())
        );
    }

    #[test]
    fn test_restriction_allows() {
        let chicken = food("Chicken breast", vec![DietTag::Meat]);
        let tuna = food("Tuna (canned)", vec![DietTag::Fish]);
        let tofu = food("Tofu", vec![]);

        assert!(!Restriction::Vegetarian.allows(&chicken));
        assert!(!Restriction::Vegetarian.allows(&tuna));
        assert!(Restriction::Pescatarian.allows(&tuna));
        assert!(Restriction::Vegan.allows(&tofu));
        assert!(!Restriction::Custom("tuna".to_string()).allows(&tuna));
        assert!(Restriction::Custom("tuna".to_string()).allows(&tofu));
    }
}
