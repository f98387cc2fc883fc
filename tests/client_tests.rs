//! Integration tests for the ReadyCloud resource operations.
//!
//! These tests run the client against an in-memory transport that records
//! every request, verifying URLs, headers, query parameters and encoded
//! bodies exactly.

use std::collections::HashMap;
use std::sync::Mutex;

use readycloud::clients::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use readycloud::{
    ApiToken, ApiVersion, ConfigError, HttpError, OrganizationId, ReadyCloud, ReadyCloudConfig,
    RestError, Webhook,
};
use serde_json::json;

/// Transport that records requests and answers with a canned response.
#[derive(Debug)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl RecordingTransport {
    fn new(response: HttpResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Transport that never reaches the server.
#[derive(Debug)]
struct FailingTransport;

impl Transport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Other {
            message: "connection refused".to_string(),
        })
    }
}

fn v1_config() -> ReadyCloudConfig {
    ReadyCloudConfig::builder()
        .token(ApiToken::new("12345").unwrap())
        .build()
        .unwrap()
}

fn v2_config(org_id: Option<&str>) -> ReadyCloudConfig {
    let mut builder = ReadyCloudConfig::builder()
        .token(ApiToken::new("12345").unwrap())
        .api_version(ApiVersion::V2);
    if let Some(org_id) = org_id {
        builder = builder.org_id(OrganizationId::new(org_id).unwrap());
    }
    builder.build().unwrap()
}

fn client_with(config: ReadyCloudConfig, response: HttpResponse) -> ReadyCloud<RecordingTransport> {
    ReadyCloud::with_transport(config, RecordingTransport::new(response))
}

fn ok_client() -> ReadyCloud<RecordingTransport> {
    client_with(v1_config(), HttpResponse::new(200, "{}"))
}

fn expected_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    headers.insert("AUTHORIZATION".to_string(), "bearer 12345".to_string());
    headers
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn only_request(rc: &ReadyCloud<RecordingTransport>) -> HttpRequest {
    let requests = rc.http_client().transport().requests();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.into_iter().next().unwrap()
}

fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body")).unwrap()
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_get_orders_sends_get_with_params() {
    let rc = ok_client();

    rc.get_orders(&params(&[("limit", "2")])).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/");
    assert_eq!(request.headers, expected_headers());
    assert_eq!(request.query, Some(params(&[("limit", "2")])));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_create_order_sends_encoded_body() {
    let rc = ok_client();
    let order = json!({"message": "test"});

    rc.create_order(&order).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/");
    assert_eq!(request.headers, expected_headers());
    assert_eq!(request.body.as_deref(), Some(r#"{"message":"test"}"#));
    assert!(request.query.is_none());
}

#[tokio::test]
async fn test_update_order_sends_put_to_order_url() {
    let rc = ok_client();

    rc.update_order(1, &json!({"message": "test"})).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Put);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/1/");
    assert_eq!(body_json(&request), json!({"message": "test"}));
}

#[tokio::test]
async fn test_partial_update_order_sends_patch() {
    let rc = ok_client();

    rc.partial_update_order(1, &json!({"status": "shipped"}))
        .await
        .unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Patch);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/1/");
    assert_eq!(body_json(&request), json!({"status": "shipped"}));
}

#[tokio::test]
async fn test_delete_order_sends_delete_without_body() {
    let rc = ok_client();

    rc.delete_order(1).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Delete);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/1/");
    assert_eq!(request.headers, expected_headers());
    assert!(request.body.is_none());
    assert!(request.query.is_none());
}

#[tokio::test]
async fn test_get_order_sends_get_without_params() {
    let rc = ok_client();

    rc.get_order("abc").await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.url, "https://readycloud.com/api/v1/orders/abc/");
    assert!(request.query.is_none());
}

#[tokio::test]
async fn test_typed_order_payload_is_passed_through() {
    #[derive(serde::Serialize)]
    struct Order {
        number: u32,
        note: Option<String>,
    }

    let rc = ok_client();
    rc.create_order(&Order {
        number: 7,
        note: None,
    })
    .await
    .unwrap();

    assert_eq!(body_json(&only_request(&rc)), json!({"number": 7, "note": null}));
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_create_orders_webhook_sends_post() {
    let rc = ok_client();

    rc.create_orders_webhook("https://example.com/test")
        .await
        .unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.url, "https://readycloud.com/api/v1/webhooks/");
    assert_eq!(request.headers, expected_headers());
    assert_eq!(
        body_json(&request),
        json!({"entity": "orders", "url": "https://example.com/test"})
    );
}

#[tokio::test]
async fn test_get_webhooks_sends_get_with_params() {
    let rc = ok_client();

    rc.get_webhooks(&params(&[("limit", "2")])).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.url, "https://readycloud.com/api/v1/webhooks/");
    assert_eq!(request.query, Some(params(&[("limit", "2")])));
}

#[tokio::test]
async fn test_update_orders_webhook_sends_put() {
    let rc = ok_client();

    rc.update_orders_webhook(1, "https://example.com/new-url")
        .await
        .unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Put);
    assert_eq!(request.url, "https://readycloud.com/api/v1/webhooks/1/");
    assert_eq!(
        body_json(&request),
        json!({"entity": "orders", "url": "https://example.com/new-url"})
    );
}

#[tokio::test]
async fn test_generic_webhook_keeps_entity() {
    let rc = ok_client();

    rc.create_webhook(&Webhook::new("shipments", "https://example.com/s"))
        .await
        .unwrap();

    assert_eq!(
        body_json(&only_request(&rc)),
        json!({"entity": "shipments", "url": "https://example.com/s"})
    );
}

#[tokio::test]
async fn test_delete_webhook_sends_delete() {
    let rc = ok_client();

    rc.delete_webhook(1).await.unwrap();

    let request = only_request(&rc);
    assert_eq!(request.http_method, HttpMethod::Delete);
    assert_eq!(request.url, "https://readycloud.com/api/v1/webhooks/1/");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_get_webhook_sends_get() {
    let rc = ok_client();

    rc.get_webhook(9).await.unwrap();

    assert_eq!(
        only_request(&rc).url,
        "https://readycloud.com/api/v1/webhooks/9/"
    );
}

// ============================================================================
// API v2 and organizations
// ============================================================================

#[tokio::test]
async fn test_v2_get_orders_scoped_under_org() {
    let rc = client_with(v2_config(Some("acme")), HttpResponse::new(200, "{}"));

    rc.get_orders(&params(&[])).await.unwrap();

    assert_eq!(
        only_request(&rc).url,
        "https://readycloud.com/api/v2/orgs/acme/orders/"
    );
}

#[tokio::test]
async fn test_v2_without_org_fails_before_sending() {
    let rc = client_with(v2_config(None), HttpResponse::new(200, "{}"));

    let result = rc.get_orders(&params(&[("limit", "2")])).await;

    assert!(matches!(
        result,
        Err(RestError::Config(ConfigError::MissingOrganizationId { .. }))
    ));
    assert!(rc.http_client().transport().requests().is_empty());
}

#[tokio::test]
async fn test_unknown_version_fails_before_sending() {
    let config = ReadyCloudConfig::builder()
        .token(ApiToken::new("12345").unwrap())
        .api_version("v3".parse().unwrap())
        .build()
        .unwrap();
    let rc = client_with(config, HttpResponse::new(200, "{}"));

    let result = rc.create_orders_webhook("https://example.com").await;

    assert!(matches!(
        result,
        Err(RestError::Config(ConfigError::UnsupportedApiVersion { .. }))
    ));
    assert!(rc.http_client().transport().requests().is_empty());
}

#[tokio::test]
async fn test_organizations_under_v2() {
    let rc = client_with(v2_config(None), HttpResponse::new(200, r#"{"results": []}"#));

    let response = rc.get_organizations(&params(&[])).await.unwrap();
    assert_eq!(response.get("results"), Some(&json!([])));

    rc.get_organization("acme").await.unwrap();

    let urls: Vec<String> = rc
        .http_client()
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://readycloud.com/api/v2/orgs/".to_string(),
            "https://readycloud.com/api/v2/orgs/acme/".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_organizations_rejected_under_v1() {
    let rc = ok_client();

    let result = rc.get_organization("acme").await;

    assert!(matches!(
        result,
        Err(RestError::Config(ConfigError::RequiresApiVersion { .. }))
    ));
    assert!(rc.http_client().transport().requests().is_empty());
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn test_500_raises_server_error_with_raw_body() {
    let rc = client_with(v1_config(), HttpResponse::new(500, "{broken json"));

    let result = rc.get_orders(&params(&[("limit", "2")])).await;

    let error = result.unwrap_err();
    assert_eq!(
        error.server_error().map(|e| e.content.as_str()),
        Some("{broken json")
    );
    assert_eq!(rc.http_client().transport().requests().len(), 1);
}

#[tokio::test]
async fn test_500_raises_for_every_verb() {
    let rc = client_with(v1_config(), HttpResponse::new(500, ""));
    let order = json!({});

    assert!(rc.get_order(1).await.unwrap_err().server_error().is_some());
    assert!(rc.create_order(&order).await.unwrap_err().server_error().is_some());
    assert!(rc.update_order(1, &order).await.unwrap_err().server_error().is_some());
    assert!(rc
        .partial_update_order(1, &order)
        .await
        .unwrap_err()
        .server_error()
        .is_some());
    assert!(rc.delete_order(1).await.unwrap_err().server_error().is_some());
}

#[tokio::test]
async fn test_other_error_statuses_are_returned_as_data() {
    for code in [400, 404, 502] {
        let rc = client_with(v1_config(), HttpResponse::new(code, r#"{"detail": "nope"}"#));

        let response = rc.get_order(1).await.unwrap();

        assert_eq!(response.status_code(), code);
        assert!(!response.is_ok());
        assert_eq!(response.get("detail"), Some(&json!("nope")));
    }
}

#[tokio::test]
async fn test_json_response_is_normalized() {
    let rc = client_with(v1_config(), HttpResponse::new(200, r#"{"test": "test"}"#));

    let response = rc.get_orders(&params(&[])).await.unwrap();

    assert_eq!(
        serde_json::Value::from(response),
        json!({"test": "test", "status_code": 200, "ok": true})
    );
}

#[tokio::test]
async fn test_html_response_is_wrapped() {
    let rc = client_with(v1_config(), HttpResponse::new(200, "<h1>Test<h1>"));

    let response = rc.get_orders(&params(&[])).await.unwrap();

    assert_eq!(
        serde_json::Value::from(response),
        json!({"content": "<h1>Test<h1>", "status_code": 200, "ok": true})
    );
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let rc = ReadyCloud::with_transport(v1_config(), FailingTransport);

    let result = rc.delete_webhook(1).await;

    match result {
        Err(RestError::Http(HttpError::Transport(error))) => {
            assert!(error.to_string().contains("connection refused"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadyCloud>();
    assert_send_sync::<ReadyCloud<RecordingTransport>>();
}
