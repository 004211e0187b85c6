use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tcapi_sdk::auth::{FileTokenCache, MemoryTokenCache, TokenCache, TokenProvider};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_token_reused_within_ttl_then_refreshed() {
    common::init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})))
        .expect(2)
        .mount(&server)
        .await;

    let provider = TokenProvider::new(server.uri())
        .unwrap()
        .with_ttl(Duration::from_millis(100));
    let creds = common::credentials();

    let first = provider.get_token(&creds).await.unwrap();
    let second = provider.get_token(&creds).await.unwrap();
    assert_eq!(first, second);

    tokio::time::sleep(Duration::from_millis(250)).await;
    provider.get_token(&creds).await.unwrap();
}

#[tokio::test]
async fn test_shared_cache_across_clients() {
    let server = common::server_with_token("shared").await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let cache: Arc<dyn TokenCache> = Arc::new(MemoryTokenCache::new());
    let a = common::client(&server).with_token_cache(cache.clone());
    let b = common::client(&server).with_token_cache(cache.clone());

    a.get("/cards").await.unwrap();
    b.get("/cards").await.unwrap();

    let token_requests = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == "/oauth/token")
        .count();
    assert_eq!(token_requests, 1);

    let cached = cache
        .get(&common::credentials().cache_key())
        .unwrap()
        .unwrap();
    assert_eq!(cached.token, "shared");
    assert_eq!(cached.credentials_hash, common::credentials().credentials_hash());
}

#[tokio::test]
async fn test_file_cache_survives_new_provider() {
    let server = common::server_with_token("persisted").await;
    let dir = tempfile::TempDir::new().unwrap();

    let first = TokenProvider::new(server.uri())
        .unwrap()
        .with_cache(Arc::new(FileTokenCache::with_path(dir.path())));
    first.get_token(&common::credentials()).await.unwrap();

    let second = TokenProvider::new("http://127.0.0.1:1")
        .unwrap()
        .with_cache(Arc::new(FileTokenCache::with_path(dir.path())));
    let token = second.get_token(&common::credentials()).await.unwrap();
    assert_eq!(token, "persisted");
}
