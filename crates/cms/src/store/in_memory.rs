use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use productdesk_core::{DocumentId, Entity};
use productdesk_products::{Product, ProductDocument, validate_document};

use super::r#trait::{CmsError, DocumentStore};

/// In-memory document store.
///
/// Intended for dry runs and tests. Assigns ids and system fields the way the
/// content lake does and re-validates every document with the studio rules.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Product>>,
    fail_with: Option<String>,
    create_calls: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every create call fails with [`CmsError::Unavailable`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of create calls received, successful or not.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Stored documents, in creation order.
    pub fn documents(&self) -> Vec<Product> {
        self.documents
            .read()
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, id: &DocumentId) -> Option<Product> {
        self.documents
            .read()
            .ok()
            .and_then(|docs| docs.iter().find(|p| p.id() == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, document: &ProductDocument) -> Result<Product, CmsError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_with {
            return Err(CmsError::Unavailable(reason.clone()));
        }

        let raw = serde_json::to_value(document).map_err(|e| CmsError::Decode(e.to_string()))?;
        validate_document(&raw).map_err(CmsError::Rejected)?;

        let now = Utc::now();
        let product = Product {
            id: DocumentId::generate(),
            revision: Some(Uuid::now_v7().simple().to_string()),
            created_at: Some(now),
            updated_at: Some(now),
            document: document.clone(),
        };

        let mut docs = self
            .documents
            .write()
            .map_err(|_| CmsError::Unavailable("lock poisoned".to_string()))?;
        docs.push(product.clone());

        tracing::debug!(id = %product.id, "stored product in memory");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use productdesk_products::{Color, ProductDraft, Size, validate};

    fn payload() -> ProductDocument {
        let draft = ProductDraft {
            product_name: "Shoe".into(),
            description: "A".repeat(25),
            size: [Size::M].into_iter().collect(),
            color: [Color::Black].into_iter().collect(),
            price: 50.0,
            product_inventory: 10.0,
        };
        validate(&draft).unwrap().to_document()
    }

    #[tokio::test]
    async fn create_assigns_identity_and_system_fields() {
        let store = InMemoryDocumentStore::new();
        let product = store.create(&payload()).await.unwrap();

        assert!(product.revision.is_some());
        assert!(product.created_at.is_some());
        assert_eq!(product.document, payload());
        assert_eq!(store.get(&product.id), Some(product));
        assert_eq!(store.create_calls(), 1);
    }

    #[tokio::test]
    async fn each_create_gets_a_new_id() {
        let store = InMemoryDocumentStore::new();
        let a = store.create(&payload()).await.unwrap();
        let b = store.create(&payload()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn rejects_documents_the_studio_would_reject() {
        let store = InMemoryDocumentStore::new();
        let mut doc = payload();
        doc.product_name = "x".into();

        let err = store.create(&doc).await.unwrap_err();
        match err {
            CmsError::Rejected(errors) => assert!(errors.contains("productName")),
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn failing_store_counts_calls_and_stores_nothing() {
        let store = InMemoryDocumentStore::failing("maintenance");
        assert!(matches!(store.create(&payload()).await, Err(CmsError::Unavailable(_))));
        assert_eq!(store.create_calls(), 1);
        assert!(store.is_empty());
    }
}
