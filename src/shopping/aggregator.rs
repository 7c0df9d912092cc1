use std::collections::{HashMap, HashSet};

use crate::models::{
    AggregatedShoppingItem, FoodCategory, MealCoverage, RawLineItem, ShoppingListItem, Unit,
};
use crate::shopping::normalizer::normalize;

/// Identity of a purchasable line: same food name, category and base unit.
type BucketKey = (String, FoodCategory, Unit);

#[derive(Debug)]
struct Bucket {
    food_id: String,
    name: String,
    category: FoodCategory,
    unit: Unit,
    price_per_unit: f64,
    quantity: f64,
    estimated_price: f64,
    reasons: Vec<String>,
    coverage: MealCoverage,
    source_ids: Vec<String>,
    purchased: bool,
}

impl Bucket {
    fn new(raw: &RawLineItem, unit: Unit) -> Self {
        Self {
            food_id: raw.food_id.clone(),
            name: raw.name.trim().to_string(),
            category: raw.category,
            unit,
            price_per_unit: raw.price_per_unit / raw.unit.to_base(1.0),
            quantity: 0.0,
            estimated_price: 0.0,
            reasons: Vec::new(),
            coverage: MealCoverage::default(),
            source_ids: Vec::new(),
            purchased: false,
        }
    }

    fn absorb(&mut self, raw: &RawLineItem) {
        self.quantity += raw.unit.to_base(raw.quantity);
        self.estimated_price += raw.estimated_price;
        self.purchased |= raw.purchased;
        self.coverage.merge(&raw.coverage);
        let reason = raw.reason.trim();
        if !reason.is_empty() && !self.reasons.iter().any(|r| r == reason) {
            self.reasons.push(reason.to_string());
        }
        if !self.source_ids.contains(&raw.id) {
            self.source_ids.push(raw.id.clone());
        }
    }
}

/// Text shown next to a line, e.g. "Covers 4 days of protein".
pub fn coverage_text(coverage: &MealCoverage, category: FoodCategory, plan_days: u32) -> String {
    let days = coverage.days_covered(plan_days);
    let unit = if days == 1 { "day" } else { "days" };
    format!("Covers {} {} of {}", days, unit, category.coverage_label())
}

/// Merge raw lines into unique purchasable items.
///
/// Output is sorted by category name, then item name. Each id is the
/// underlying food id; when two lines would collide, the category and unit
/// are appended and a counter breaks any remaining tie.
pub fn aggregate(raw_items: &[RawLineItem], plan_days: u32) -> Vec<AggregatedShoppingItem> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<BucketKey, usize> = HashMap::new();

    for raw in raw_items {
        if raw.quantity.is_nan() || raw.quantity <= 0.0 {
            tracing::warn!(id = %raw.id, quantity = raw.quantity, "skipping non-positive quantity");
            continue;
        }
        let unit = raw.unit.base();
        let key = (raw.name.trim().to_lowercase(), raw.category, unit);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Bucket::new(raw, unit));
            buckets.len() - 1
        });
        buckets[slot].absorb(raw);
    }

    buckets.sort_by(|a, b| {
        a.category
            .as_str()
            .cmp(b.category.as_str())
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut id_counts: HashMap<&str, usize> = HashMap::new();
    let mut name_counts: HashMap<String, usize> = HashMap::new();
    for bucket in &buckets {
        *id_counts.entry(bucket.food_id.as_str()).or_insert(0) += 1;
        *name_counts.entry(bucket.name.to_lowercase()).or_insert(0) += 1;
    }
    let collides: Vec<bool> = buckets
        .iter()
        .map(|b| id_counts[b.food_id.as_str()] > 1 || name_counts[&b.name.to_lowercase()] > 1)
        .collect();

    // Plain labels are claimed first; a suffixed label never takes a real
    // food id such as `eggs_g`.
    let mut taken_ids: HashSet<String> = HashSet::new();
    let mut taken_names: HashSet<String> = HashSet::new();
    for (bucket, _) in buckets.iter().zip(&collides).filter(|(_, c)| !**c) {
        taken_ids.insert(bucket.food_id.to_lowercase());
        taken_names.insert(bucket.name.to_lowercase());
    }
    let labels: Vec<(String, String)> = buckets
        .iter()
        .zip(&collides)
        .map(|(bucket, &collides)| {
            if !collides {
                return (bucket.food_id.clone(), bucket.name.clone());
            }
            let category = bucket.category.as_str();
            let unit = bucket.unit.as_str();
            let id = claim(
                &mut taken_ids,
                format!("{}_{}_{}", bucket.food_id, category, unit),
                |base, n| format!("{}_{}", base, n),
            );
            let name = claim(
                &mut taken_names,
                format!("{} ({}, {})", bucket.name, category, unit),
                |base, n| format!("{} #{}", base, n),
            );
            (id, name)
        })
        .collect();

    let items: Vec<AggregatedShoppingItem> = buckets
        .into_iter()
        .zip(labels)
        .map(|(bucket, (id, name))| {
            let normalized = normalize(&bucket.name, bucket.quantity, bucket.unit);
            let coverage_text = coverage_text(&bucket.coverage, bucket.category, plan_days);

            AggregatedShoppingItem {
                item: ShoppingListItem {
                    id,
                    name,
                    category: bucket.category,
                    unit: bucket.unit,
                    price_per_unit: bucket.price_per_unit,
                    quantity: bucket.quantity,
                    reason: bucket.reasons.join("; "),
                    estimated_price: bucket.estimated_price,
                },
                display_quantity: normalized.display.clone(),
                normalized,
                coverage: bucket.coverage,
                coverage_text,
                source_ids: bucket.source_ids,
                purchased: bucket.purchased,
            }
        })
        .collect();

    tracing::debug!(
        raw = raw_items.len(),
        aggregated = items.len(),
        "aggregated shopping list"
    );
    items
}

/// First free label starting at `base`, adding a counter while it is taken.
/// Names are compared case-insensitively.
fn claim(
    taken: &mut HashSet<String>,
    base: String,
    numbered: impl Fn(&str, usize) -> String,
) -> String {
    let mut label = base.clone();
    let mut n = 2;
    while taken.contains(&label.to_lowercase()) {
        label = numbered(&base, n);
        n += 1;
    }
    taken.insert(label.to_lowercase());
    label
}

/// Flip the purchased flag of the item addressed by `id` (its own id or any
/// source id). Returns the new state, or `None` when nothing matched.
pub fn toggle_purchased(items: &mut [AggregatedShoppingItem], id: &str) -> Option<bool> {
    let item = items.iter_mut().find(|i| i.addresses(id))?;
    item.purchased = !item.purchased;
    Some(item.purchased)
}

pub fn total_cost(items: &[AggregatedShoppingItem]) -> f64 {
    items.iter().map(|i| i.item.estimated_price).sum()
}
