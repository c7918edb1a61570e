//! Value object trait: equality by value, not identity.
//!
//! Option values (sizes, colors) and selections of them have **no identity**.
//! Two selections holding the same values in the same order are the same
//! selection.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are passed around by value
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: shows up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
