//! End-to-end tests for the reqwest-backed transport against a mock gateway.

use payrail::{Client, Params, PayrailError};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("key_id:key_secret")
const BASIC_AUTH: &str = "Basic a2V5X2lkOmtleV9zZWNyZXQ=";

async fn client_for(server: &MockServer) -> Client {
    let base_url = Url::parse(&format!("{}/v1/", server.uri())).unwrap();
    Client::builder("key_id", "key_secret")
        .with_base_url(base_url)
        .build()
}

fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn list_request_carries_auth_and_normalized_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(header("Authorization", BASIC_AUTH))
        .and(query_param("count", "10"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "collection",
            "count": 0,
            "items": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.orders.all(Params::new()).await.unwrap();

    assert_eq!(response["entity"], json!("collection"));
}

#[tokio::test]
async fn create_sends_params_as_json_body() {
    let server = MockServer::start().await;
    let body = json!({
        "amount": 50000,
        "currency": "INR",
        "notes": {"internal_ref": "po-1142"},
    });

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(header("Authorization", BASIC_AUTH))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ord_DaaS6LOUAASb7Y",
            "entity": "order",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.orders.create(params(body)).await.unwrap();

    assert_eq!(response["id"], json!("ord_DaaS6LOUAASb7Y"));
}

#[tokio::test]
async fn sub_action_path_and_verb() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_links/plink_ExjpAUN3gVHrPJ/notify_by/email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .payment_links
        .notify_by("plink_ExjpAUN3gVHrPJ", "email")
        .await
        .unwrap();

    assert_eq!(response["success"], json!(true));
}

#[tokio::test]
async fn gateway_error_maps_to_api_error_with_body() {
    let server = MockServer::start().await;
    let error_body = json!({
        "error": {
            "code": "BAD_REQUEST_ERROR",
            "description": "amount is required",
        }
    });

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.orders.create(Params::new()).await.unwrap_err();

    match err {
        PayrailError::ApiError { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, error_body);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_failure_never_reaches_the_wire() {
    let server = MockServer::start().await;

    // No mock mounted: any request would fail the expectation below.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.orders.fetch("").await.unwrap_err();

    assert!(matches!(err, PayrailError::MissingField(f) if f == "order_id"));
}

#[tokio::test]
async fn delete_uses_query_style_request() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cust_1/tokens/tok_1"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .customers
        .delete_token("cust_1", "tok_1")
        .await
        .unwrap();

    assert_eq!(response["deleted"], json!(true));
}
