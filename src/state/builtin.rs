use std::collections::BTreeMap;

use crate::models::{DietTag, FoodCategory, FoodReference, Macros, Unit};
use crate::state::catalog::{FoodCatalog, ReferenceData, SubstitutionGraph};

use crate::models::DietTag::{Dairy, Egg, Fish, Gluten, Meat};
use crate::models::FoodCategory::{Fat, Fruit, Grain, Legume, Other, Protein, Vegetable};

// (id, name, category, unit, price per base unit, protein, carbs, fat, kcal, tags)
type FoodRow = (
    &'static str,
    &'static str,
    FoodCategory,
    Unit,
    f64,
    f64,
    f64,
    f64,
    f64,
    &'static [DietTag],
);

const G: Unit = Unit::Gram;

// Egg macros are per 100 eggs because eggs are counted in pieces.
const FOODS: &[FoodRow] = &[
    ("chicken_breast", "Chicken breast", Protein, G, 0.010, 31.0, 0.0, 3.6, 165.0, &[Meat]),
    ("turkey_breast", "Turkey breast", Protein, G, 0.011, 29.0, 0.0, 1.0, 135.0, &[Meat]),
    ("lean_beef", "Lean beef mince", Protein, G, 0.012, 26.0, 0.0, 10.0, 200.0, &[Meat]),
    ("salmon", "Salmon fillet", Protein, G, 0.015, 20.0, 0.0, 13.0, 208.0, &[Fish]),
    ("tuna_canned", "Tuna (canned)", Protein, G, 0.008, 26.0, 0.0, 1.0, 116.0, &[Fish]),
    ("sardines_canned", "Sardines (canned)", Protein, G, 0.007, 25.0, 0.0, 11.0, 208.0, &[Fish]),
    ("eggs", "Eggs", Protein, Unit::Piece, 0.30, 630.0, 60.0, 500.0, 7200.0, &[Egg]),
    ("tofu", "Tofu", Protein, G, 0.006, 12.0, 2.0, 7.0, 120.0, &[]),
    ("greek_yogurt", "Greek yogurt", FoodCategory::Dairy, G, 0.005, 10.0, 4.0, 0.4, 59.0, &[Dairy]),
    ("milk", "Milk", FoodCategory::Dairy, Unit::Milliliter, 0.0011, 3.4, 5.0, 1.5, 42.0, &[Dairy]),
    ("cheddar", "Cheddar cheese", FoodCategory::Dairy, G, 0.012, 25.0, 1.3, 33.0, 403.0, &[Dairy]),
    ("cottage_cheese", "Cottage cheese", FoodCategory::Dairy, G, 0.006, 11.0, 3.4, 4.3, 98.0, &[Dairy]),
    ("oats", "Rolled oats", Grain, G, 0.002, 13.0, 60.0, 7.0, 379.0, &[Gluten]),
    ("brown_rice", "Brown rice", Grain, G, 0.003, 7.5, 76.0, 2.7, 362.0, &[]),
    ("pasta", "Whole wheat pasta", Grain, G, 0.0035, 13.0, 68.0, 2.5, 348.0, &[Gluten]),
    ("bread", "Wholegrain bread", Grain, G, 0.004, 13.0, 41.0, 4.0, 247.0, &[Gluten]),
    ("quinoa", "Quinoa", Grain, G, 0.008, 14.0, 64.0, 6.0, 368.0, &[]),
    ("potatoes", "Potatoes", Grain, G, 0.0015, 2.0, 17.0, 0.1, 77.0, &[]),
    ("sweet_potato", "Sweet potato", Grain, G, 0.0025, 1.6, 20.0, 0.1, 86.0, &[]),
    ("broccoli", "Broccoli", Vegetable, G, 0.004, 2.8, 7.0, 0.4, 34.0, &[]),
    ("spinach", "Spinach", Vegetable, G, 0.006, 2.9, 3.6, 0.4, 23.0, &[]),
    ("kale", "Kale", Vegetable, G, 0.007, 4.3, 9.0, 0.9, 49.0, &[]),
    ("tomato", "Tomato", Vegetable, G, 0.003, 0.9, 3.9, 0.2, 18.0, &[]),
    ("bell_pepper", "Bell pepper", Vegetable, G, 0.004, 1.0, 6.0, 0.3, 31.0, &[]),
    ("onion", "Onion", Vegetable, G, 0.0015, 1.1, 9.0, 0.1, 40.0, &[]),
    ("garlic", "Garlic", Vegetable, G, 0.012, 6.4, 33.0, 0.5, 149.0, &[]),
    ("parsley", "Parsley", Vegetable, G, 0.015, 3.0, 6.0, 0.8, 36.0, &[]),
    ("mixed_salad", "Mixed salad", Vegetable, G, 0.008, 1.5, 3.0, 0.2, 17.0, &[]),
    ("banana", "Banana", Fruit, G, 0.002, 1.1, 23.0, 0.3, 89.0, &[]),
    ("apple", "Apple", Fruit, G, 0.0025, 0.3, 14.0, 0.2, 52.0, &[]),
    ("berries", "Frozen berries", Fruit, G, 0.007, 0.7, 12.0, 0.3, 50.0, &[]),
    ("avocado", "Avocado", Fruit, G, 0.008, 2.0, 9.0, 15.0, 160.0, &[]),
    ("olive_oil", "Olive oil", Fat, G, 0.009, 0.0, 0.0, 100.0, 884.0, &[]),
    ("coconut_oil", "Coconut oil", Fat, G, 0.010, 0.0, 0.0, 100.0, 862.0, &[]),
    ("almonds", "Almonds", Fat, G, 0.014, 21.0, 22.0, 50.0, 579.0, &[]),
    ("peanut_butter", "Peanut butter", Fat, G, 0.006, 25.0, 20.0, 50.0, 588.0, &[]),
    ("lentils", "Red lentils", Legume, G, 0.003, 24.0, 60.0, 1.1, 352.0, &[]),
    ("chickpeas", "Chickpeas (canned)", Legume, G, 0.0025, 7.0, 17.0, 2.6, 120.0, &[]),
    ("black_beans", "Black beans (canned)", Legume, G, 0.0025, 7.0, 16.0, 0.5, 100.0, &[]),
    ("honey", "Honey", Other, G, 0.010, 0.3, 82.0, 0.0, 304.0, &[]),
];

const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("Salmon fillet", &["Tuna (canned)", "Sardines (canned)", "Chicken breast"]),
    ("Lean beef mince", &["Turkey breast", "Chicken breast", "Red lentils"]),
    ("Turkey breast", &["Chicken breast", "Tuna (canned)"]),
    ("Chicken breast", &["Tuna (canned)", "Sardines (canned)"]),
    ("Tofu", &["Chickpeas (canned)", "Red lentils"]),
    ("Cheddar cheese", &["Cottage cheese"]),
    ("Quinoa", &["Brown rice", "Rolled oats"]),
    ("Whole wheat pasta", &["Brown rice", "Potatoes"]),
    ("Wholegrain bread", &["Rolled oats"]),
    ("Sweet potato", &["Potatoes"]),
    ("Kale", &["Spinach", "Broccoli"]),
    ("Spinach", &["Broccoli"]),
    ("Parsley", &["Spinach"]),
    ("Mixed salad", &["Tomato", "Bell pepper"]),
    ("Frozen berries", &["Banana", "Apple"]),
    ("Almonds", &["Peanut butter"]),
    ("Coconut oil", &["Olive oil"]),
];

/// Foods shipped with the crate.
pub fn builtin_foods() -> Vec<FoodReference> {
    FOODS
        .iter()
        .map(
            |&(id, name, category, unit, price, protein, carbs, fat, kcal, tags)| FoodReference {
                id: id.to_string(),
                name: name.to_string(),
                category,
                unit,
                price_per_unit: price,
                macros: Macros {
                    protein,
                    carbs,
                    fat,
                    kcal,
                },
                tags: tags.to_vec(),
            },
        )
        .collect()
}

pub fn builtin_substitutions() -> SubstitutionGraph {
    let edges: BTreeMap<String, Vec<String>> = SUBSTITUTIONS
        .iter()
        .map(|(from, to)| {
            (
                from.to_string(),
                to.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();
    SubstitutionGraph::new(edges)
}

impl ReferenceData {
    /// Built-in catalog and substitution graph.
    pub fn builtin() -> Self {
        Self::new(FoodCatalog::new(builtin_foods()), builtin_substitutions())
    }
}
