use std::sync::Once;

use serde_json::json;
use tcapi_sdk::{ClientConfig, ClientCredentials, TcapiClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Once = Once::new();

/// Install a test subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn credentials() -> ClientCredentials {
    ClientCredentials::new("integration-client", "integration-secret")
}

/// Start a mock server whose token endpoint always issues `token`.
pub async fn server_with_token(token: &str) -> MockServer {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;
    server
}

pub fn client(server: &MockServer) -> TcapiClient {
    client_with_config(server, ClientConfig::default())
}

pub fn client_with_config(server: &MockServer, config: ClientConfig) -> TcapiClient {
    TcapiClient::with_config(server.uri(), credentials(), config)
        .expect("client should build for a mock server URI")
}
