use serde::{Deserialize, Serialize};

/// Food category used for grouping shopping list lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Grain,
    Vegetable,
    Fruit,
    Dairy,
    Fat,
    Legume,
    Other,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Grain => "grain",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fat => "fat",
            FoodCategory::Legume => "legume",
            FoodCategory::Other => "other",
        }
    }

    /// Label used in "covers N days of ..." texts.
    pub fn coverage_label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Grain => "carbs",
            FoodCategory::Vegetable => "vegetables",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fat => "healthy fats",
            FoodCategory::Legume => "legumes",
            FoodCategory::Other => "essentials",
        }
    }
}

/// Measurement unit of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Piece => "pcs",
        }
    }

    /// Base unit after mass/volume collapsing (kg -> g, l -> ml).
    pub fn base(&self) -> Unit {
        match self {
            Unit::Kilogram => Unit::Gram,
            Unit::Liter => Unit::Milliliter,
            other => *other,
        }
    }

    /// Convert a quantity in this unit into its base unit.
    pub fn to_base(&self, quantity: f64) -> f64 {
        match self {
            Unit::Kilogram | Unit::Liter => quantity * 1000.0,
            _ => quantity,
        }
    }
}

/// Dietary tags used when checking restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    Meat,
    Fish,
    Dairy,
    Egg,
    Gluten,
}

/// Macronutrients per 100 base units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub kcal: f64,
}

/// Read-only reference entry of the food catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodReference {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub unit: Unit,
    /// Price per single base unit (e.g. per gram).
    pub price_per_unit: f64,
    /// Macros per 100 base units.
    pub macros: Macros,
    #[serde(default)]
    pub tags: Vec<DietTag>,
}

impl FoodReference {
    /// Protein in grams for a quantity expressed in the food's unit.
    #[inline]
    pub fn protein_for(&self, quantity: f64) -> f64 {
        quantity * self.macros.protein / 100.0
    }

    /// Price of a quantity expressed in the food's unit.
    #[inline]
    pub fn price_for(&self, quantity: f64) -> f64 {
        quantity * self.price_per_unit
    }

    pub fn has_tag(&self, tag: DietTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Canonical key for name lookups (lowercase, trimmed).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Basic validation: non-negative price and macros.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && self.price_per_unit >= 0.0
            && self.macros.protein >= 0.0
            && self.macros.carbs >= 0.0
            && self.macros.fat >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salmon() -> FoodReference {
        FoodReference {
            id: "salmon".to_string(),
            name: "Salmon fillet".to_string(),
            category: FoodCategory::Protein,
            unit: Unit::Gram,
            price_per_unit: 0.015,
            macros: Macros {
                protein: 20.0,
                carbs: 0.0,
                fat: 13.0,
                kcal: 208.0,
            },
            tags: vec![DietTag::Fish],
        }
    }

    #[test]
    fn test_protein_and_price_for_quantity() {
        let food = salmon();
        assert!((food.protein_for(500.0) - 100.0).abs() < 1e-9);
        assert!((food.price_for(500.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_unit_base_conversion() {
        assert_eq!(Unit::Kilogram.base(), Unit::Gram);
        assert_eq!(Unit::Liter.base(), Unit::Milliliter);
        assert_eq!(Unit::Piece.base(), Unit::Piece);
        assert!((Unit::Kilogram.to_base(0.5) - 500.0).abs() < 1e-9);
        assert!((Unit::Gram.to_base(42.0) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(FoodCategory::Grain.coverage_label(), "carbs");
        assert_eq!(FoodCategory::Other.coverage_label(), "essentials");
        assert_eq!(FoodCategory::Dairy.as_str(), "dairy");
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let mut food = salmon();
        food.name = "  SALMON Fillet ".to_string();
        assert_eq!(food.key(), "salmon fillet");
        assert!(food.is_valid());
        assert!(food.has_tag(DietTag::Fish));
    }
}
