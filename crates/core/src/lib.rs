//! `productdesk-core` — shared building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, FieldErrors, ValidationErrors};
pub use id::DocumentId;
pub use value_object::ValueObject;
