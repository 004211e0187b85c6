//! OAuth 2.0 client-credentials exchange.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use tcapi_client::ClientConfig;

use crate::credentials::ClientCredentials;
use crate::error::{Error, ErrorKind, Result};

/// Path of the token endpoint, relative to the API base URL.
pub const TOKEN_PATH: &str = "/oauth/token";

/// OAuth client for the TCAPI token endpoint.
#[derive(Clone)]
pub struct OAuthClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Create a new OAuth client with default HTTP settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, &ClientConfig::default())
    }

    /// Create a new OAuth client honoring the TLS and timeout settings of `config`.
    pub fn with_config(base_url: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let http_client = tcapi_client::build_reqwest_client(config)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }

    /// Exchange client credentials for an access token.
    ///
    /// The credentials are not logged to prevent credential exposure.
    #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id()))]
    pub async fn client_credentials(&self, credentials: &ClientCredentials) -> Result<TokenResponse> {
        let mut params = vec![
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
        ];

        if !credentials.scope().is_empty() {
            params.push(("scope", credentials.scope()));
        }

        let body = serde_urlencoded::to_string(params)?;

        let response = self
            .http_client
            .post(self.token_url())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let body = response.text().await?;

        let token = parse_token_response(status, success, &body)?;
        info!(expires_in = ?token.expires_in, "Access token acquired");
        Ok(token)
    }
}

/// Turn a token endpoint response into a [`TokenResponse`] or an auth error.
fn parse_token_response(status: u16, success: bool, body: &str) -> Result<TokenResponse> {
    if !success {
        if let Ok(error) = serde_json::from_str::<OAuthErrorResponse>(body) {
            return Err(Error::new(ErrorKind::OAuth {
                error: error.error,
                description: error.error_description,
            }));
        }
        return Err(Error::new(ErrorKind::OAuth {
            error: format!("http_{status}"),
            description: format!("token endpoint returned HTTP {status}"),
        }));
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidTokenResponse("body is not valid JSON".to_string()),
            e,
        )
    })?;

    match value.get("access_token").and_then(|v| v.as_str()) {
        Some(token) if !token.is_empty() => {}
        _ => {
            return Err(Error::new(ErrorKind::InvalidTokenResponse(
                "missing access_token".to_string(),
            )))
        }
    }

    serde_json::from_value(value).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidTokenResponse("unexpected token response shape".to_string()),
            e,
        )
    })
}

/// Token response from the OAuth endpoint.
///
/// `access_token` is redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Server-side lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}
