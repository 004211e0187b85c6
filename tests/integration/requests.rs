use serde_json::json;
use tcapi_sdk::client::RequestMethod;
use tcapi_sdk::rest::ErrorKind;
use tcapi_sdk::{ClientConfig, RequestOptions};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_no_content_is_empty_object() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("DELETE"))
        .and(path("/cards/9"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let body = client
        .request("/cards/9", RequestMethod::Delete, RequestOptions::new())
        .await
        .unwrap();

    assert!(body.is_object());
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_ignore_status_policy_both_ways() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/sets/0"))
        .and(header("x-tcapi-ignore-status", "1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"status": "422", "title": "Invalid id"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sets/0"))
        .and(header("x-tcapi-ignore-status", "0"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"status": "422", "title": "Invalid id", "detail": "id must be positive"}]
        })))
        .mount(&server)
        .await;

    let lenient = common::client(&server);
    let body = lenient.get("/sets/0").await.unwrap();
    assert_eq!(body["errors"][0]["title"], json!("Invalid id"));

    let strict = common::client_with_config(
        &server,
        ClientConfig::builder().with_ignore_status(false).build(),
    );
    let err = strict.get("/sets/0").await.unwrap_err();
    match err.kind {
        ErrorKind::Http { status, ref message } => {
            assert_eq!(status, 422);
            assert!(message.contains("id must be positive"));
        }
        ref other => panic!("unexpected kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_authentication_error() {
    common::init_tracing();
    let server = wiremock::MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Client authentication failed"
        })))
        .mount(&server)
        .await;

    let client = common::client(&server);
    let err = client.get("/cards").await.unwrap_err();

    assert!(err.is_authentication());
    assert!(!err.to_string().contains("integration-secret"));
}

#[tokio::test]
async fn test_error_body_tokens_are_redacted() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("failed for Authorization: Bearer tok"),
        )
        .mount(&server)
        .await;

    let strict = common::client_with_config(
        &server,
        ClientConfig::builder().with_ignore_status(false).build(),
    );
    let err = strict.get("/cards").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(!err.to_string().contains("Bearer tok"));
}
