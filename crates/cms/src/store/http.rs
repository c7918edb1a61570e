use async_trait::async_trait;

use productdesk_products::{Product, ProductDocument};

use super::r#trait::{CmsError, DocumentStore};
use crate::config::CmsConfig;
use crate::mutation::{MutateRequest, MutateResponse, error_message};

/// Client for the content lake's mutations API.
///
/// One `create` is one POST; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpCmsClient {
    config: CmsConfig,
    http: reqwest::Client,
}

impl HttpCmsClient {
    /// Build a client from settings that already passed validation.
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("productdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CmsError::Unavailable(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }
}

#[async_trait]
impl DocumentStore for HttpCmsClient {
    async fn create(&self, document: &ProductDocument) -> Result<Product, CmsError> {
        let url = self.config.mutate_url();
        tracing::debug!(%url, "sending create mutation");

        let resp = self
            .http
            .post(&url)
            .query(&[
                ("returnIds", "true"),
                ("returnDocuments", "true"),
                ("visibility", "sync"),
            ])
            .bearer_auth(self.config.token())
            .json(&MutateRequest::create(document))
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CmsError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        let parsed: MutateResponse = resp
            .json()
            .await
            .map_err(|e| CmsError::Decode(e.to_string()))?;
        tracing::debug!(transaction_id = %parsed.transaction_id, "create mutation committed");
        parsed.into_product(document)
    }
}
