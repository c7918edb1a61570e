use async_trait::async_trait;
use thiserror::Error;

use productdesk_core::ValidationErrors;
use productdesk_products::{Product, ProductDocument};

/// Create-document operation error.
///
/// Any of these ends a submission as failed; none of them is fatal to the
/// caller, which can submit again.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The request never got an answer (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status (auth, permissions, server errors).
    #[error("CMS API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The store's own validation refused the document.
    #[error("document rejected: {0}")]
    Rejected(ValidationErrors),

    /// The response could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The store cannot accept writes right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere product documents can be created.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `document` as a new document and return it with its
    /// server-assigned identity.
    ///
    /// Exactly one write is attempted; implementations never retry.
    async fn create(&self, document: &ProductDocument) -> Result<Product, CmsError>;
}
