//! Wire format of the mutations endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use productdesk_products::{Product, ProductDocument};

use crate::store::CmsError;

/// Request body: a transaction of mutations.
#[derive(Debug, Serialize)]
pub struct MutateRequest<'a> {
    pub mutations: Vec<Mutation<'a>>,
}

impl<'a> MutateRequest<'a> {
    pub fn create(document: &'a ProductDocument) -> Self {
        Self {
            mutations: vec![Mutation::Create(document)],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation<'a> {
    Create(&'a ProductDocument),
}

/// Response body of a committed transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
pub struct MutationResult {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
    /// Present when the request asked for `returnDocuments`.
    #[serde(default)]
    pub document: Option<Value>,
}

impl MutateResponse {
    /// The created product.
    ///
    /// Falls back to `payload` under the returned id when the response only
    /// carried the id or its document does not read back as a product. The
    /// document exists either way, so only a missing or unusable id fails.
    pub fn into_product(self, payload: &ProductDocument) -> Result<Product, CmsError> {
        let result = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::Decode("transaction returned no results".to_string()))?;

        if let Some(document) = result.document {
            match serde_json::from_value::<Product>(document) {
                Ok(product) => return Ok(product),
                Err(e) => tracing::warn!(
                    id = %result.id,
                    error = %e,
                    "created document did not read back; using the sent payload"
                ),
            }
        }

        let id = result
            .id
            .parse()
            .map_err(|e| CmsError::Decode(format!("{e}")))?;
        Ok(Product::from_parts(id, payload.clone()))
    }
}

/// Human-readable reason out of an error response body.
///
/// The API answers with either `{"error": {"description": ...}}` or
/// `{"error": "...", "message": "..."}`; anything else falls back to the
/// status line.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let from_body = parsed.as_ref().and_then(|v| {
        v.pointer("/error/description")
            .and_then(Value::as_str)
            .or_else(|| v.get("message").and_then(Value::as_str))
            .or_else(|| v.get("error").and_then(Value::as_str))
            .map(str::to_string)
    });

    from_body.unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.chars().take(200).collect()
        }
    })
}
