//! Field constraints for products, declared once.
//!
//! [`PRODUCT_RULES`] is read by the client adapter ([`crate::validate`]) and by
//! the studio adapter ([`crate::studio`]). Neither adapter restates a bound or
//! an option list; they only choose how a [`Violation`] is worded.

use crate::draft::{FieldValue, ProductField};
use crate::options::{Color, OptionDomain, OptionEntry, Size};

/// Shape of a field and its bounds.
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Character count within `min..=max`.
    Text {
        min: usize,
        max: usize,
        multiline: bool,
    },
    /// Numeric value within `min..=max`.
    Number { min: f64, max: f64, integer: bool },
    /// Values picked from a fixed list.
    Options {
        options: fn() -> Vec<OptionEntry>,
        min: usize,
        unique: bool,
        /// Whether the studio lists `{title, value}` pairs instead of bare values.
        titled: bool,
        layout: Option<&'static str>,
    },
}

/// Wording of a field's violations.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Below the lower bound (too short, too small, too few).
    pub min: &'static str,
    /// Above the upper bound.
    pub max: Option<&'static str>,
    /// Single message the studio shows for any bound violation.
    pub studio: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: ProductField,
    pub title: &'static str,
    pub required: bool,
    pub kind: RuleKind,
    pub messages: Messages,
}

/// A single broken constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Missing,
    WrongType { expected: &'static str },
    TooShort,
    TooLong,
    NotANumber,
    NotAnInteger,
    TooSmall,
    TooLarge,
    TooFew,
    NotAllowed(String),
    Duplicate(String),
}

impl Violation {
    /// Whether this is a bound violation (worded by the rule's messages).
    pub fn is_bound(&self) -> bool {
        matches!(
            self,
            Violation::TooShort
                | Violation::TooLong
                | Violation::TooSmall
                | Violation::TooLarge
                | Violation::TooFew
        )
    }
}

pub static PRODUCT_RULES: [FieldRule; 6] = [
    FieldRule {
        field: ProductField::ProductName,
        title: "Product Name",
        required: true,
        kind: RuleKind::Text {
            min: 3,
            max: 20,
            multiline: false,
        },
        messages: Messages {
            min: "Product name min 3 characters",
            max: Some("Product name max 20 characters"),
            studio: "Product name must be between 3 and 20 characters",
        },
    },
    FieldRule {
        field: ProductField::Description,
        title: "Description",
        required: true,
        kind: RuleKind::Text {
            min: 20,
            max: 200,
            multiline: true,
        },
        messages: Messages {
            min: "Product description min 20 characters",
            max: Some("Product description max 200 characters"),
            studio: "Description must be between 20 and 200 characters",
        },
    },
    FieldRule {
        field: ProductField::Size,
        title: "Sizes",
        required: false,
        kind: RuleKind::Options {
            options: Size::entries,
            min: 1,
            unique: true,
            titled: true,
            layout: Some("grid"),
        },
        messages: Messages {
            min: "At least one size must be selected",
            max: None,
            studio: "At least one size must be selected",
        },
    },
    FieldRule {
        field: ProductField::Color,
        title: "Color",
        required: true,
        kind: RuleKind::Options {
            options: Color::entries,
            min: 1,
            unique: false,
            titled: false,
            layout: None,
        },
        messages: Messages {
            min: "Select a color",
            max: None,
            studio: "At least one color must be selected",
        },
    },
    FieldRule {
        field: ProductField::Price,
        title: "Price",
        required: true,
        kind: RuleKind::Number {
            min: 1.0,
            max: 9999.0,
            integer: false,
        },
        messages: Messages {
            min: "Product price must be at least 1",
            max: Some("Product price must be less than 9999"),
            studio: "Price must be between 1 and 9999",
        },
    },
    FieldRule {
        field: ProductField::ProductInventory,
        title: "Product Inventory",
        required: true,
        kind: RuleKind::Number {
            min: 1.0,
            max: 200.0,
            integer: true,
        },
        messages: Messages {
            min: "Product inventory must be at least 1",
            max: Some("Product inventory must be less than 200"),
            studio: "Inventory must be between 1 and 200",
        },
    },
];

/// Rule of `field`.
pub fn rule_for(field: ProductField) -> &'static FieldRule {
    // PRODUCT_RULES follows ProductField::ALL order.
    let idx = ProductField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default();
    &PRODUCT_RULES[idx]
}

impl FieldRule {
    /// Constraints `value` breaks; empty when it satisfies the rule.
    pub fn check(&self, value: &FieldValue<'_>) -> Vec<Violation> {
        let mut out = Vec::new();
        match (self.kind, value) {
            (RuleKind::Text { min, max, .. }, FieldValue::Text(s)) => {
                let len = s.chars().count();
                if len < min {
                    out.push(Violation::TooShort);
                } else if len > max {
                    out.push(Violation::TooLong);
                }
            }
            (RuleKind::Number { min, max, integer }, FieldValue::Number(n)) => {
                if !n.is_finite() {
                    out.push(Violation::NotANumber);
                    return out;
                }
                if integer && n.fract() != 0.0 {
                    out.push(Violation::NotAnInteger);
                }
                if *n < min {
                    out.push(Violation::TooSmall);
                } else if *n > max {
                    out.push(Violation::TooLarge);
                }
            }
            (
                RuleKind::Options {
                    options,
                    min,
                    unique,
                    ..
                },
                FieldValue::Options(values),
            ) => {
                let allowed = options();
                for value in values {
                    if !allowed.iter().any(|o| o.value == *value) {
                        out.push(Violation::NotAllowed(value.to_string()));
                    }
                }
                if unique {
                    let mut reported: Vec<&str> = Vec::new();
                    for (idx, value) in values.iter().enumerate() {
                        if values[..idx].contains(value) && !reported.contains(value) {
                            reported.push(*value);
                            out.push(Violation::Duplicate(value.to_string()));
                        }
                    }
                }
                if values.len() < min {
                    out.push(Violation::TooFew);
                }
            }
            (kind, _) => out.push(Violation::WrongType {
                expected: kind.type_name(),
            }),
        }
        out
    }
}

impl RuleKind {
    /// JSON type the field holds.
    pub fn type_name(&self) -> &'static str {
        match self {
            RuleKind::Text { .. } => "String",
            RuleKind::Number { .. } => "Number",
            RuleKind::Options { .. } => "Array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_follow_field_order() {
        for (rule, field) in PRODUCT_RULES.iter().zip(ProductField::ALL) {
            assert_eq!(rule.field, field);
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn text_bounds_are_inclusive() {
        let rule = rule_for(ProductField::ProductName);
        assert_eq!(rule.check(&FieldValue::Text("Sh")), vec![Violation::TooShort]);
        assert!(rule.check(&FieldValue::Text("She")).is_empty());
        assert!(rule.check(&FieldValue::Text(&"x".repeat(20))).is_empty());
        assert_eq!(rule.check(&FieldValue::Text(&"x".repeat(21))), vec![Violation::TooLong]);
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let rule = rule_for(ProductField::ProductName);
        assert!(rule.check(&FieldValue::Text("ñüé")).is_empty());
    }

    #[test]
    fn number_rules() {
        let inventory = rule_for(ProductField::ProductInventory);
        assert!(inventory.check(&FieldValue::Number(1.0)).is_empty());
        assert!(inventory.check(&FieldValue::Number(200.0)).is_empty());
        assert_eq!(inventory.check(&FieldValue::Number(0.0)), vec![Violation::TooSmall]);
        assert_eq!(inventory.check(&FieldValue::Number(201.0)), vec![Violation::TooLarge]);
        assert_eq!(inventory.check(&FieldValue::Number(2.5)), vec![Violation::NotAnInteger]);
        assert_eq!(inventory.check(&FieldValue::Number(f64::NAN)), vec![Violation::NotANumber]);

        let price = rule_for(ProductField::Price);
        assert!(price.check(&FieldValue::Number(19.99)).is_empty());
        assert_eq!(price.check(&FieldValue::Number(10000.0)), vec![Violation::TooLarge]);
    }

    #[test]
    fn option_rules() {
        let size = rule_for(ProductField::Size);
        assert_eq!(size.check(&FieldValue::Options(vec![])), vec![Violation::TooFew]);
        assert!(size.check(&FieldValue::Options(vec!["Xl", "M"])).is_empty());
        assert_eq!(
            size.check(&FieldValue::Options(vec!["M", "XXL"])),
            vec![Violation::NotAllowed("XXL".into())]
        );
        assert_eq!(
            size.check(&FieldValue::Options(vec!["M", "L", "M", "M"])),
            vec![Violation::Duplicate("M".into())]
        );

        let color = rule_for(ProductField::Color);
        assert!(color.check(&FieldValue::Options(vec!["Gold", "Gold"])).is_empty());
    }

    #[test]
    fn mismatched_shapes_report_the_expected_type() {
        let rule = rule_for(ProductField::Price);
        assert_eq!(
            rule.check(&FieldValue::Text("50")),
            vec![Violation::WrongType { expected: "Number" }]
        );
    }
}
