//! `productdesk-cms`
//!
//! **Responsibility:** talk to the hosted content lake.
//!
//! This crate provides:
//! - `CmsConfig`: project/dataset/version/token, checked once at construction
//! - `DocumentStore`: the create-document seam the form submits through
//! - `HttpCmsClient`: the mutations API over HTTPS
//! - `InMemoryDocumentStore`: dry runs and tests

pub mod config;
pub mod mutation;
pub mod store;

pub use config::{CmsConfig, ConfigError, DEFAULT_API_VERSION};
pub use store::{CmsError, DocumentStore, HttpCmsClient, InMemoryDocumentStore};
