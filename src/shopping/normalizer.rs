use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{NormalizedQuantity, Unit};

/// Retail packaging a food is bought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Tub,
    Bottle,
    Can,
    Unit,
    Head,
    Bunch,
}

impl PackageKind {
    pub fn singular(&self) -> &'static str {
        match self {
            PackageKind::Tub => "tub",
            PackageKind::Bottle => "bottle",
            PackageKind::Can => "can",
            PackageKind::Unit => "unit",
            PackageKind::Head => "head",
            PackageKind::Bunch => "bunch",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            PackageKind::Tub => "tubs",
            PackageKind::Bottle => "bottles",
            PackageKind::Can => "cans",
            PackageKind::Unit => "units",
            PackageKind::Head => "heads",
            PackageKind::Bunch => "bunches",
        }
    }

    pub fn label(&self, count: u32) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

/// Package size in `base_unit` for one food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    pub package_size: f64,
    pub base_unit: Unit,
    pub kind: PackageKind,
}

const fn rule(package_size: f64, base_unit: Unit, kind: PackageKind) -> ConversionRule {
    ConversionRule {
        package_size,
        base_unit,
        kind,
    }
}

/// Package rules keyed by exact catalog display name.
pub static CONVERSION_RULES: LazyLock<HashMap<&'static str, ConversionRule>> =
    LazyLock::new(|| {
        use PackageKind::{Bottle, Bunch, Can, Head, Tub};
        let g = Unit::Gram;
        let ml = Unit::Milliliter;

        let mut m = HashMap::new();
        m.insert("Greek yogurt", rule(200.0, g, Tub));
        m.insert("Milk", rule(1000.0, ml, Bottle));
        m.insert("Tuna (canned)", rule(120.0, g, Can));
        m.insert("Sardines (canned)", rule(120.0, g, Can));
        m.insert("Tomato", rule(150.0, g, PackageKind::Unit));
        m.insert("Bell pepper", rule(200.0, g, PackageKind::Unit));
        m.insert("Onion", rule(150.0, g, PackageKind::Unit));
        m.insert("Banana", rule(120.0, g, PackageKind::Unit));
        m.insert("Apple", rule(180.0, g, PackageKind::Unit));
        m.insert("Avocado", rule(150.0, g, PackageKind::Unit));
        m.insert("Broccoli", rule(300.0, g, Head));
        m.insert("Garlic", rule(50.0, g, Head));
        m.insert("Spinach", rule(200.0, g, Bunch));
        m.insert("Kale", rule(200.0, g, Bunch));
        m.insert("Parsley", rule(50.0, g, Bunch));
        m.insert("Olive oil", rule(500.0, g, Bottle));
        m.insert("Coconut oil", rule(400.0, g, Bottle));
        m
    });

pub fn conversion_rule(name: &str) -> Option<&'static ConversionRule> {
    CONVERSION_RULES.get(name)
}

pub fn has_conversion_rule(name: &str) -> bool {
    CONVERSION_RULES.contains_key(name)
}

/// Names with a package rule, sorted.
pub fn foods_with_conversion_rules() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONVERSION_RULES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Integer when whole, otherwise up to two decimals without trailing zeros.
pub fn format_amount(value: f64) -> String {
    let rounded = round2(value);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.2}", rounded)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Convert a raw quantity into something that can be bought.
///
/// Package counts are always rounded up.
pub fn normalize(name: &str, quantity: f64, unit: Unit) -> NormalizedQuantity {
    let base_unit = unit.base();
    let base_quantity = unit.to_base(quantity);

    if let Some(rule) = conversion_rule(name).filter(|r| r.base_unit == base_unit) {
        if rule.package_size > 0.0 && base_quantity > 0.0 {
            let packages = (base_quantity / rule.package_size).ceil() as u32;
            let label = rule.kind.label(packages);
            return NormalizedQuantity {
                original_quantity: quantity,
                original_unit: unit,
                value: packages as f64,
                unit_label: label.to_string(),
                display: format!("{} {}", packages, label),
                packages: Some(packages),
            };
        }
    }

    let (value, unit_label, display) = match base_unit {
        Unit::Gram if base_quantity >= 1000.0 => {
            let kg = round2(base_quantity / 1000.0);
            (kg, "kg", format!("{:.2} kg", kg))
        }
        Unit::Milliliter if base_quantity >= 1000.0 => {
            let l = round2(base_quantity / 1000.0);
            (l, "l", format!("{:.2} l", l))
        }
        other => {
            let value = round2(base_quantity);
            (
                value,
                other.as_str(),
                format!("{} {}", format_amount(value), other.as_str()),
            )
        }
    };

    NormalizedQuantity {
        original_quantity: quantity,
        original_unit: unit,
        value,
        unit_label: unit_label.to_string(),
        display,
        packages: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_round_up() {
        let tomato = normalize("Tomato", 151.0, Unit::Gram);
        assert_eq!(tomato.packages, Some(2));
        assert_eq!(tomato.display, "2 units");

        let yogurt = normalize("Greek yogurt", 200.0, Unit::Gram);
        assert_eq!(yogurt.packages, Some(1));
        assert_eq!(yogurt.display, "1 tub");
        assert_eq!(yogurt.original_quantity, 200.0);
    }

    #[test]
    fn test_package_count_never_under_provisions() {
        for name in foods_with_conversion_rules() {
            let rule = conversion_rule(name).unwrap();
            for quantity in [1.0, 49.0, 120.0, 333.0, 1234.0] {
                let normalized = normalize(name, quantity, rule.base_unit);
                let packages = normalized.packages.unwrap() as f64;
                assert!(packages * rule.package_size >= quantity, "{name} {quantity}");
                assert!((packages - 1.0) * rule.package_size < quantity);
            }
        }
    }

    #[test]
    fn test_rule_applies_after_unit_collapse() {
        let milk = normalize("Milk", 1.5, Unit::Liter);
        assert_eq!(milk.packages, Some(2));
        assert_eq!(milk.display, "2 bottles");
        assert_eq!(milk.original_unit, Unit::Liter);
    }

    #[test]
    fn test_fallback_formatting() {
        assert_eq!(normalize("Brown rice", 1250.0, Unit::Gram).display, "1.25 kg");
        assert_eq!(normalize("Brown rice", 1000.0, Unit::Gram).display, "1.00 kg");
        assert_eq!(normalize("Soy milk", 2000.0, Unit::Milliliter).display, "2.00 l");
        assert_eq!(normalize("Brown rice", 420.0, Unit::Gram).display, "420 g");
        assert_eq!(normalize("Honey", 12.5, Unit::Gram).display, "12.5 g");
        assert_eq!(normalize("Eggs", 9.0, Unit::Piece).display, "9 pcs");
        assert_eq!(normalize("Brown rice", 420.0, Unit::Gram).packages, None);
    }

    #[test]
    fn test_rule_lookup_is_exact() {
        assert!(has_conversion_rule("Tuna (canned)"));
        assert!(!has_conversion_rule("tuna (canned)"));
        let names = foods_with_conversion_rules();
        assert_eq!(names.len(), 17);
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(2.456), "2.46");
    }
}
