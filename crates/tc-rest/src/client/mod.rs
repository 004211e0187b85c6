//! Authenticated TCAPI client.
//!
//! Every request obtains a bearer token from the [`TokenProvider`] first,
//! then goes out through the shared [`TcHttpClient`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{instrument, warn};

use tcapi_auth::{ClientCredentials, TokenCache, TokenProvider};
use tcapi_client::{
    ClientConfig, RequestBuilder, RequestMethod, Response, TcHttpClient, IGNORE_STATUS_HEADER,
};
use tcapi_jsonapi::{JsonApiResponse, ResponseMapper};

use crate::error::{Error, ErrorKind, Result};

mod resources;
mod stats;

pub use resources::ResourceClient;

/// Optional parts of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// JSON body.
    pub body: Option<Value>,
    /// Extra headers. These win over the defaults on a case-insensitive
    /// name match.
    pub headers: Vec<(String, String)>,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// TCAPI client.
///
/// Cloning is cheap: clones share the HTTP connection pool and the token
/// cache.
///
/// # Example
///
/// ```rust,ignore
/// use tcapi_auth::ClientCredentials;
/// use tcapi_jsonapi::ResourceKind;
/// use tcapi_rest::TcapiClient;
///
/// let client = TcapiClient::new(
///     "https://api.example.com",
///     ClientCredentials::new("client_id", "client_secret"),
/// )?;
///
/// let card = client.resource(ResourceKind::Card).find("9").await?;
/// let counts = client.counts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct TcapiClient {
    base_url: String,
    credentials: ClientCredentials,
    http: TcHttpClient,
    tokens: TokenProvider,
    mapper: Arc<ResponseMapper>,
    reauthenticate: bool,
}

impl TcapiClient {
    /// Create a client with default HTTP settings.
    pub fn new(base_url: impl Into<String>, credentials: ClientCredentials) -> Result<Self> {
        Self::with_config(base_url, credentials, ClientConfig::default())
    }

    /// Create a client with custom HTTP settings.
    pub fn with_config(
        base_url: impl Into<String>,
        credentials: ClientCredentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::new(ErrorKind::Config("base URL is empty".to_string())));
        }

        let tokens = TokenProvider::with_config(base_url.clone(), &config)?;
        let http = TcHttpClient::new(config)?;

        Ok(Self {
            base_url,
            credentials,
            http,
            tokens,
            mapper: Arc::new(ResponseMapper::new()),
            reauthenticate: false,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Required:
    /// - `TCAPI_BASE_URL`
    /// - `TCAPI_CLIENT_ID`
    /// - `TCAPI_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `TCAPI_SCOPE`
    /// - `TCAPI_VERIFY_SSL` (default: true)
    /// - `TCAPI_IGNORE_STATUS` (default: true)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("TCAPI_BASE_URL").map_err(|_| {
            Error::new(ErrorKind::Config(
                "Environment variable not set: TCAPI_BASE_URL".to_string(),
            ))
        })?;
        let credentials = ClientCredentials::from_env()?;
        let config = ClientConfig::from_env()?;
        Self::with_config(base_url, credentials, config)
    }

    /// Replace the token provider, e.g. to share one across clients.
    pub fn with_token_provider(mut self, tokens: TokenProvider) -> Self {
        self.tokens = tokens;
        self
    }

    /// Replace the token cache.
    pub fn with_token_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.tokens = self.tokens.with_cache(cache);
        self
    }

    /// Replace the response mapper.
    pub fn with_mapper(mut self, mapper: ResponseMapper) -> Self {
        self.mapper = Arc::new(mapper);
        self
    }

    /// On HTTP 401, drop the cached token, fetch a new one and resend once.
    ///
    /// Off by default.
    pub fn with_reauthentication(mut self, enabled: bool) -> Self {
        self.reauthenticate = enabled;
        self
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the HTTP configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Get the token provider.
    pub fn token_provider(&self) -> &TokenProvider {
        &self.tokens
    }

    /// Get the response mapper.
    pub fn mapper(&self) -> &ResponseMapper {
        &self.mapper
    }

    /// Send an authenticated request and return the body as generic JSON.
    ///
    /// An empty body (e.g. 204) yields an empty JSON object.
    #[instrument(skip(self, options), fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        path: &str,
        method: RequestMethod,
        options: RequestOptions,
    ) -> Result<Value> {
        let response = self.send(path, method, &options).await?;
        response.json_value().await.map_err(Into::into)
    }

    /// Send an authenticated request and map the body as a JSON:API document.
    pub async fn request_document(
        &self,
        path: &str,
        method: RequestMethod,
        options: RequestOptions,
    ) -> Result<JsonApiResponse> {
        let value = self.request(path, method, options).await?;
        self.mapper.parse_value(value).map_err(Into::into)
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(path, RequestMethod::Get, RequestOptions::new())
            .await
    }

    /// POST a JSON body to `path`.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.request(path, RequestMethod::Post, RequestOptions::new().body(body))
            .await
    }

    /// PATCH a JSON body to `path`.
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.request(path, RequestMethod::Patch, RequestOptions::new().body(body))
            .await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(path, RequestMethod::Delete, RequestOptions::new())
            .await
    }

    async fn send(
        &self,
        path: &str,
        method: RequestMethod,
        options: &RequestOptions,
    ) -> Result<Response> {
        let token = self.tokens.get_token(&self.credentials).await?;
        let result = self
            .http
            .execute(self.build_request(path, method, options, &token))
            .await;

        if !self.reauthenticate || !is_unauthorized(&result) {
            return result.map_err(Into::into);
        }

        warn!("Request was rejected with 401, refreshing token and retrying once");
        self.tokens.invalidate(&self.credentials);
        let token = self.tokens.get_token(&self.credentials).await?;
        self.http
            .execute(self.build_request(path, method, options, &token))
            .await
            .map_err(Into::into)
    }

    fn build_request(
        &self,
        path: &str,
        method: RequestMethod,
        options: &RequestOptions,
        token: &str,
    ) -> RequestBuilder {
        let mut request = RequestBuilder::new(method, self.url_for(path))
            .header("Accept", "application/json")
            .bearer_auth(token)
            .header(
                IGNORE_STATUS_HEADER,
                self.http.config().ignore_status_header_value(),
            )
            .headers(
                options
                    .headers
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            );

        for (name, value) in &options.query {
            request = request.query(name.as_str(), value.as_str());
        }

        if let Some(body) = &options.body {
            request = request.json_value(body.clone());
        }

        request
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn is_unauthorized(result: &tcapi_client::Result<Response>) -> bool {
    match result {
        Ok(response) => response.status() == 401,
        Err(err) => err.status() == Some(401),
    }
}
