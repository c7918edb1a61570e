use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

use productdesk_cms::{CmsConfig, CmsError, DocumentStore, HttpCmsClient};
use productdesk_products::{Color, ProductDocument, ProductDraft, Size, validate};

#[derive(Debug, Clone)]
struct Captured {
    version: String,
    dataset: String,
    query: HashMap<String, String>,
    authorization: Option<String>,
    body: Value,
}

type Requests = Arc<Mutex<Vec<Captured>>>;

struct FakeCms {
    base_url: String,
    requests: Requests,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeCms {
    async fn spawn() -> Self {
        let requests: Requests = Arc::default();
        let app = Router::new()
            .route("/:version/data/mutate/:dataset", post(mutate))
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            requests,
            handle,
        }
    }

    fn client(&self, dataset: &str) -> HttpCmsClient {
        let config = CmsConfig::new("abc123", dataset, "sk-test-token")
            .unwrap()
            .with_api_host(&self.base_url)
            .unwrap();
        HttpCmsClient::new(config).unwrap()
    }

    fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeCms {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn mutate(
    State(requests): State<Requests>,
    Path((version, dataset)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> axum::response::Response {
    requests.lock().unwrap().push(Captured {
        version,
        dataset: dataset.clone(),
        query,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    match dataset.as_str() {
        "denied" => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Unauthorized",
                "message": "Session not found",
                "statusCode": 401
            })),
        )
            .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        "drifted" => Json(json!({
            "transactionId": "tx-2",
            "results": [{
                "id": "doc-2",
                "operation": "create",
                "document": { "_id": "doc-2", "_type": "product", "size": ["XXL"] }
            }]
        }))
        .into_response(),
        _ => {
            let mut document = body["mutations"][0]["create"].clone();
            document["_id"] = json!("doc-1");
            document["_rev"] = json!("rev-1");
            document["_createdAt"] = json!("2025-01-08T10:00:00Z");
            document["_updatedAt"] = json!("2025-01-08T10:00:00Z");
            Json(json!({
                "transactionId": "tx-1",
                "results": [{ "id": "doc-1", "operation": "create", "document": document }]
            }))
            .into_response()
        }
    }
}

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
async fn create_posts_one_mutation_with_auth() {
    let cms = FakeCms::spawn().await;
    let client = cms.client("production");
    assert_eq!(client.config().dataset(), "production");

    let product = client.create(&payload()).await.unwrap();
    assert_eq!(product.id.as_str(), "doc-1");
    assert_eq!(product.revision.as_deref(), Some("rev-1"));
    assert_eq!(product.document, payload());

    let requests = cms.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.version, "v2025-01-08");
    assert_eq!(req.dataset, "production");
    assert_eq!(req.authorization.as_deref(), Some("Bearer sk-test-token"));
    assert_eq!(req.query.get("returnDocuments").map(String::as_str), Some("true"));
    assert_eq!(
        req.body,
        json!({
            "mutations": [{
                "create": {
                    "_type": "product",
                    "productName": "Shoe",
                    "description": "A".repeat(25),
                    "size": ["M"],
                    "color": ["Black"],
                    "price": 50.0,
                    "product_inventory": 10
                }
            }]
        })
    );
}

#[tokio::test]
async fn api_errors_carry_status_and_reason() {
    let cms = FakeCms::spawn().await;

    match cms.client("denied").create(&payload()).await {
        Err(CmsError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Session not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    match cms.client("broken").create(&payload()).await {
        Err(CmsError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // No retries: one request per call.
    assert_eq!(cms.requests().len(), 2);
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let cms = FakeCms::spawn().await;
    let err = cms.client("garbled").create(&payload()).await.unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[tokio::test]
async fn created_document_that_does_not_read_back_still_succeeds() {
    let cms = FakeCms::spawn().await;
    let product = cms.client("drifted").create(&payload()).await.unwrap();
    assert_eq!(product.id.as_str(), "doc-2");
    assert_eq!(product.document, payload());
    assert_eq!(cms.requests().len(), 1);
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = CmsConfig::new("abc123", "production", "sk-test-token")
        .unwrap()
        .with_api_host(&format!("http://{addr}"))
        .unwrap();
    let client = HttpCmsClient::new(config).unwrap();

    let err = client.create(&payload()).await.unwrap_err();
    assert!(matches!(err, CmsError::Network(_)));
}
