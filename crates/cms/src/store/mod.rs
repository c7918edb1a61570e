//! Document store boundary.
//!
//! The form only needs "create this document"; everything about transport,
//! authentication and server-side validation lives behind [`DocumentStore`].

pub mod http;
pub mod in_memory;
pub mod r#trait;

pub use http::HttpCmsClient;
pub use in_memory::InMemoryDocumentStore;
pub use r#trait::{CmsError, DocumentStore};
