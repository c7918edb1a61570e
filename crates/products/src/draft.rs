//! The in-memory, not-yet-persisted product.

use serde::{Deserialize, Serialize};

use crate::options::{Color, Size};
use crate::selection::Selection;

/// Form fields, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductField {
    #[serde(rename = "productName")]
    ProductName,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "product_inventory")]
    ProductInventory,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        ProductField::ProductName,
        ProductField::Description,
        ProductField::Size,
        ProductField::Color,
        ProductField::Price,
        ProductField::ProductInventory,
    ];

    /// Field name used in documents and error maps.
    pub fn name(self) -> &'static str {
        match self {
            ProductField::ProductName => "productName",
            ProductField::Description => "description",
            ProductField::Size => "size",
            ProductField::Color => "color",
            ProductField::Price => "price",
            ProductField::ProductInventory => "product_inventory",
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A product being filled in.
///
/// Numeric fields hold whatever the user typed, converted the way a number
/// input converts text (see [`parse_number_input`]), so out-of-range and
/// non-numeric values survive until validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub description: String,
    pub size: Selection<Size>,
    pub color: Selection<Color>,
    pub price: f64,
    pub product_inventory: f64,
}

/// Borrowed view of one field's value, shared by both validation adapters.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Options(Vec<&'a str>),
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ProductField) -> FieldValue<'_> {
        match field {
            ProductField::ProductName => FieldValue::Text(&self.product_name),
            ProductField::Description => FieldValue::Text(&self.description),
            ProductField::Size => FieldValue::Options(self.size.values()),
            ProductField::Color => FieldValue::Options(self.color.values()),
            ProductField::Price => FieldValue::Number(self.price),
            ProductField::ProductInventory => FieldValue::Number(self.product_inventory),
        }
    }
}

/// Convert number-input text: blank is `0`, anything unparsable is `NaN`.
pub fn parse_number_input(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}
