//! Client-side validation: gate a draft before anything is sent.

use productdesk_core::ValidationErrors;

use crate::draft::{ProductDraft, ProductField};
use crate::product::ProductDocument;
use crate::rules::{FieldRule, PRODUCT_RULES, Violation, rule_for};

/// A draft that satisfied every rule.
///
/// The only way to obtain one is [`validate`], so a [`ProductDocument`] built
/// from it is always within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft(ProductDraft);

impl ValidatedDraft {
    /// Create payload carrying every field of the draft.
    pub fn to_document(&self) -> ProductDocument {
        ProductDocument::from_validated(&self.0)
    }
}

/// Check every field of `draft`.
pub fn validate(draft: &ProductDraft) -> Result<ValidatedDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in &PRODUCT_RULES {
        for message in messages(rule, draft) {
            errors.push(rule.field.name(), message);
        }
    }
    errors.into_result(ValidatedDraft(draft.clone()))
}

/// Messages for one field; empty when the field is valid.
pub fn validate_field(draft: &ProductDraft, field: ProductField) -> Vec<String> {
    messages(rule_for(field), draft)
}

fn messages(rule: &FieldRule, draft: &ProductDraft) -> Vec<String> {
    rule.check(&draft.value(rule.field))
        .iter()
        .map(|v| client_message(rule, v))
        .collect()
}

fn client_message(rule: &FieldRule, violation: &Violation) -> String {
    match violation {
        Violation::TooShort | Violation::TooSmall | Violation::TooFew => rule.messages.min.to_string(),
        Violation::TooLong | Violation::TooLarge => {
            rule.messages.max.unwrap_or(rule.messages.min).to_string()
        }
        Violation::NotANumber => format!("{} must be a number", rule.title),
        Violation::NotAnInteger => format!("{} must be a whole number", rule.title),
        Violation::Missing => "Required".to_string(),
        Violation::WrongType { expected } => format!("Expected {}", expected.to_lowercase()),
        Violation::NotAllowed(v) => format!("Invalid option {v:?}"),
        Violation::Duplicate(v) => format!("{v:?} is selected more than once"),
    }
}
