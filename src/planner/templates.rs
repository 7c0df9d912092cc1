use crate::models::{FitnessGoal, MealSlot};

/// Fixed meal template: foods with base amounts (in each food's base unit)
/// and the protein the template contributes at those amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTemplate {
    pub name: &'static str,
    pub items: &'static [(&'static str, f64)],
    pub protein_g: f64,
}

impl MealTemplate {
    pub fn food_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|(id, _)| *id)
    }
}

const fn t(
    name: &'static str,
    items: &'static [(&'static str, f64)],
    protein_g: f64,
) -> MealTemplate {
    MealTemplate {
        name,
        items,
        protein_g,
    }
}

const CUTTING: [[MealTemplate; 2]; 4] = [
    [
        t(
            "Greek yogurt bowl",
            &[("greek_yogurt", 250.0), ("berries", 100.0), ("oats", 30.0)],
            30.0,
        ),
        t(
            "Veggie egg scramble",
            &[("eggs", 3.0), ("spinach", 60.0), ("tomato", 100.0), ("bread", 40.0)],
            27.0,
        ),
    ],
    [
        t(
            "Chicken quinoa salad",
            &[
                ("chicken_breast", 150.0),
                ("quinoa", 60.0),
                ("mixed_salad", 100.0),
                ("olive_oil", 10.0),
            ],
            55.0,
        ),
        t(
            "Tuna chickpea bowl",
            &[
                ("tuna_canned", 120.0),
                ("chickpeas", 120.0),
                ("bell_pepper", 100.0),
                ("spinach", 50.0),
            ],
            42.0,
        ),
    ],
    [
        t(
            "Salmon with broccoli",
            &[("salmon", 150.0), ("broccoli", 200.0), ("sweet_potato", 150.0)],
            38.0,
        ),
        t(
            "Turkey stir-fry",
            &[
                ("turkey_breast", 150.0),
                ("bell_pepper", 100.0),
                ("onion", 75.0),
                ("brown_rice", 60.0),
                ("garlic", 5.0),
            ],
            50.0,
        ),
    ],
    [
        t(
            "Cottage cheese & apple",
            &[("cottage_cheese", 150.0), ("apple", 180.0)],
            17.0,
        ),
        t("Almonds & banana", &[("almonds", 30.0), ("banana", 120.0)], 8.0),
    ],
];

const MAINTENANCE: [[MealTemplate; 2]; 4] = [
    [
        t(
            "Overnight oats",
            &[
                ("oats", 70.0),
                ("milk", 250.0),
                ("banana", 120.0),
                ("peanut_butter", 15.0),
            ],
            23.0,
        ),
        t(
            "Eggs on toast",
            &[("eggs", 3.0), ("bread", 80.0), ("avocado", 75.0)],
            31.0,
        ),
    ],
    [
        t(
            "Chicken rice bowl",
            &[
                ("chicken_breast", 130.0),
                ("brown_rice", 80.0),
                ("broccoli", 150.0),
                ("olive_oil", 10.0),
            ],
            50.0,
        ),
        t(
            "Lentil soup",
            &[
                ("lentils", 80.0),
                ("onion", 75.0),
                ("tomato", 150.0),
                ("garlic", 5.0),
                ("bread", 60.0),
            ],
            29.0,
        ),
    ],
    [
        t(
            "Salmon & potatoes",
            &[
                ("salmon", 140.0),
                ("potatoes", 250.0),
                ("spinach", 80.0),
                ("olive_oil", 10.0),
            ],
            35.0,
        ),
        t(
            "Beef pasta",
            &[
                ("lean_beef", 130.0),
                ("pasta", 90.0),
                ("tomato", 150.0),
                ("onion", 50.0),
                ("parsley", 10.0),
            ],
            48.0,
        ),
    ],
    [
        t(
            "Yogurt & berries",
            &[("greek_yogurt", 170.0), ("berries", 80.0)],
            18.0,
        ),
        t(
            "Apple & peanut butter",
            &[("apple", 180.0), ("peanut_butter", 20.0)],
            5.5,
        ),
    ],
];

const BULKING: [[MealTemplate; 2]; 4] = [
    [
        t(
            "Power oats",
            &[
                ("oats", 100.0),
                ("milk", 300.0),
                ("banana", 120.0),
                ("peanut_butter", 30.0),
                ("honey", 15.0),
            ],
            32.0,
        ),
        t(
            "Big breakfast",
            &[
                ("eggs", 4.0),
                ("bread", 100.0),
                ("cheddar", 30.0),
                ("avocado", 75.0),
            ],
            47.0,
        ),
    ],
    [
        t(
            "Beef burrito bowl",
            &[
                ("lean_beef", 170.0),
                ("brown_rice", 120.0),
                ("black_beans", 120.0),
                ("bell_pepper", 100.0),
            ],
            63.0,
        ),
        t(
            "Chicken pasta",
            &[
                ("chicken_breast", 170.0),
                ("pasta", 120.0),
                ("broccoli", 150.0),
                ("olive_oil", 15.0),
            ],
            72.0,
        ),
    ],
    [
        t(
            "Salmon rice plate",
            &[
                ("salmon", 180.0),
                ("brown_rice", 120.0),
                ("kale", 80.0),
                ("coconut_oil", 10.0),
            ],
            48.0,
        ),
        t(
            "Turkey sweet potato",
            &[
                ("turkey_breast", 180.0),
                ("sweet_potato", 250.0),
                ("broccoli", 150.0),
                ("olive_oil", 10.0),
            ],
            60.0,
        ),
    ],
    [
        t(
            "Milk & banana shake",
            &[("milk", 400.0), ("banana", 120.0), ("peanut_butter", 20.0)],
            20.0,
        ),
        t(
            "Cottage cheese & almonds",
            &[("cottage_cheese", 200.0), ("almonds", 30.0), ("honey", 10.0)],
            28.0,
        ),
    ],
];

fn slot_index(slot: MealSlot) -> usize {
    match slot {
        MealSlot::Breakfast => 0,
        MealSlot::Lunch => 1,
        MealSlot::Dinner => 2,
        MealSlot::Snack => 3,
    }
}

/// The two fixed variants (A, B) for a goal and slot.
pub fn templates_for(goal: FitnessGoal, slot: MealSlot) -> &'static [MealTemplate; 2] {
    let table = match goal {
        FitnessGoal::Cutting => &CUTTING,
        FitnessGoal::Maintenance => &MAINTENANCE,
        FitnessGoal::Bulking => &BULKING,
    };
    &table[slot_index(slot)]
}

/// Every template in the catalog, for validation and listings.
pub fn all_templates() -> impl Iterator<Item = (FitnessGoal, MealSlot, &'static MealTemplate)> {
    [FitnessGoal::Cutting, FitnessGoal::Maintenance, FitnessGoal::Bulking]
        .into_iter()
        .flat_map(|goal| {
            MealSlot::ALL.into_iter().flat_map(move |slot| {
                templates_for(goal, slot)
                    .iter()
                    .map(move |template| (goal, slot, template))
            })
        })
}
