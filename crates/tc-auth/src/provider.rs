//! Cached token acquisition.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use tcapi_client::ClientConfig;

use crate::cache::{CachedToken, MemoryTokenCache, TokenCache};
use crate::credentials::ClientCredentials;
use crate::error::Result;
use crate::oauth::OAuthClient;

/// Local lifetime of a cached token, independent of the server's `expires_in`.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60);

/// Hands out bearer tokens, exchanging credentials only on a cache miss.
///
/// Concurrent misses for the same credentials may each perform an
/// exchange; the last write wins.
#[derive(Clone)]
pub struct TokenProvider {
    oauth: OAuthClient,
    cache: Arc<dyn TokenCache>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("oauth", &self.oauth)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenProvider {
    /// Create a provider with an in-memory cache and default HTTP settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, &ClientConfig::default())
    }

    /// Create a provider with an in-memory cache and the given HTTP settings.
    pub fn with_config(base_url: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let oauth = OAuthClient::with_config(base_url, config)?;
        Ok(Self::from_parts(oauth, Arc::new(MemoryTokenCache::new())))
    }

    /// Create a provider from an OAuth client and any cache implementation.
    pub fn from_parts(oauth: OAuthClient, cache: Arc<dyn TokenCache>) -> Self {
        Self {
            oauth,
            cache,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Replace the token cache.
    pub fn with_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Override the local token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Local token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The OAuth client used for exchanges.
    pub fn oauth(&self) -> &OAuthClient {
        &self.oauth
    }

    /// Return a bearer token for `credentials`.
    ///
    /// A non-expired cached token is returned without any network call.
    /// Otherwise the credentials are exchanged and the new token is cached
    /// for [`TokenProvider::ttl`].
    #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id()))]
    pub async fn get_token(&self, credentials: &ClientCredentials) -> Result<String> {
        let cache_key = credentials.cache_key();

        match self.cache.get(&cache_key) {
            Ok(Some(cached)) => {
                debug!("Token cache hit");
                return Ok(cached.token);
            }
            Ok(None) => debug!("Token cache miss"),
            Err(e) => warn!(error = %e, "Token cache read failed, treating as miss"),
        }

        let response = self.oauth.client_credentials(credentials).await?;

        let entry = CachedToken {
            credentials_hash: credentials.credentials_hash(),
            token: response.access_token.clone(),
            expires_in_server_seconds: response.expires_in,
        };
        if let Err(e) = self.cache.put(&cache_key, entry, self.ttl) {
            warn!(error = %e, "Token cache write failed");
        }

        Ok(response.access_token)
    }

    /// Drop the cached token for `credentials`.
    pub fn invalidate(&self, credentials: &ClientCredentials) {
        if let Err(e) = self.cache.remove(&credentials.cache_key()) {
            warn!(error = %e, "Token cache invalidation failed");
        }
    }
}
