//! Products domain module.
//!
//! Business rules for the product form, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage): option domains, the toggle
//! selection, the draft, one constraint table and its two adapters (client
//! validation and studio schema).

pub mod draft;
pub mod options;
pub mod product;
pub mod rules;
pub mod selection;
pub mod studio;
pub mod validate;

pub use draft::{FieldValue, ProductDraft, ProductField, parse_number_input};
pub use options::{Color, OptionDomain, OptionEntry, Size};
pub use product::{PRODUCT_TYPE, Product, ProductDocument};
pub use rules::{FieldRule, PRODUCT_RULES, RuleKind, Violation, rule_for};
pub use selection::Selection;
pub use studio::{DocumentSchema, product_schema, validate_document};
pub use validate::{ValidatedDraft, validate, validate_field};
