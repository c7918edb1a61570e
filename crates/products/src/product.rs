//! Create payload and stored product documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use productdesk_core::{DocumentId, Entity};

use crate::draft::ProductDraft;
use crate::options::{Color, Size};
use crate::selection::Selection;

/// Document type name in the content lake.
pub const PRODUCT_TYPE: &str = "product";

fn product_type() -> String {
    PRODUCT_TYPE.to_string()
}

/// Create payload: the draft's fields tagged with the document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_type", default = "product_type")]
    pub doc_type: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub description: String,
    pub size: Selection<Size>,
    pub color: Selection<Color>,
    pub price: f64,
    pub product_inventory: u32,
}

impl ProductDocument {
    /// Only called with drafts that passed validation, so the inventory is a
    /// whole number in `1..=200`.
    pub(crate) fn from_validated(draft: &ProductDraft) -> Self {
        Self {
            doc_type: product_type(),
            product_name: draft.product_name.clone(),
            description: draft.description.clone(),
            size: draft.size.clone(),
            color: draft.color.clone(),
            price: draft.price,
            product_inventory: draft.product_inventory as u32,
        }
    }
}

/// A persisted product document.
///
/// System fields (`_id`, `_rev`, timestamps) are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(rename = "_createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub document: ProductDocument,
}

impl Product {
    /// A stored product known only by its id (no revision or timestamps).
    pub fn from_parts(id: DocumentId, document: ProductDocument) -> Self {
        Self {
            id,
            revision: None,
            created_at: None,
            updated_at: None,
            document,
        }
    }

    pub fn name(&self) -> &str {
        &self.document.product_name
    }
}

impl Entity for Product {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use serde_json::json;

    fn document() -> ProductDocument {
        let draft = ProductDraft {
            product_name: "Shoe".into(),
            description: "A".repeat(25),
            size: [Size::M, Size::XL].into_iter().collect(),
            color: [Color::Black].into_iter().collect(),
            price: 50.0,
            product_inventory: 10.0,
        };
        validate(&draft).unwrap().to_document()
    }

    #[test]
    fn create_payload_shape() {
        let json = serde_json::to_value(document()).unwrap();
        assert_eq!(
            json,
            json!({
                "_type": "product",
                "productName": "Shoe",
                "description": "A".repeat(25),
                "size": ["M", "Xl"],
                "color": ["Black"],
                "price": 50.0,
                "product_inventory": 10
            })
        );
    }

    #[test]
    fn stored_document_decodes_system_fields() {
        let raw = json!({
            "_id": "f1c2d3",
            "_type": "product",
            "_rev": "rev1",
            "_createdAt": "2025-01-08T10:00:00Z",
            "_updatedAt": "2025-01-08T10:00:00Z",
            "productName": "Shoe",
            "description": "A".repeat(25),
            "size": ["M", "Xl"],
            "color": ["Black"],
            "price": 50,
            "product_inventory": 10
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id().as_str(), "f1c2d3");
        assert_eq!(product.revision.as_deref(), Some("rev1"));
        assert!(product.created_at.is_some());
        assert_eq!(product.document, document());
        assert_eq!(product.name(), "Shoe");
    }
}
