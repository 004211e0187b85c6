//! Token cache abstraction and the in-memory implementation.

use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A cached access token.
///
/// `token` is redacted in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    /// Hash of the credentials the token was issued for.
    pub credentials_hash: String,
    /// The bearer token.
    pub token: String,
    /// Lifetime reported by the server, informational only.
    #[serde(default)]
    pub expires_in_server_seconds: Option<u64>,
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("credentials_hash", &self.credentials_hash)
            .field("token", &"[REDACTED]")
            .field("expires_in_server_seconds", &self.expires_in_server_seconds)
            .finish()
    }
}

/// Key/value store with per-entry TTL for access tokens.
pub trait TokenCache: Send + Sync {
    /// Load a non-expired token.
    fn get(&self, key: &str) -> Result<Option<CachedToken>>;

    /// Store a token for `ttl`.
    fn put(&self, key: &str, token: CachedToken, ttl: Duration) -> Result<()>;

    /// Remove a token.
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Clone)]
struct Entry {
    token: CachedToken,
    ttl: Duration,
}

struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Process-local token cache backed by moka.
#[derive(Clone)]
pub struct MemoryTokenCache {
    inner: Cache<String, Entry>,
}

impl std::fmt::Debug for MemoryTokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl MemoryTokenCache {
    /// Default maximum number of credential sets held at once.
    pub const DEFAULT_MAX_CAPACITY: u64 = 1024;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_CAPACITY)
    }

    /// Create a cache holding at most `max_capacity` tokens.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();
        Self { inner }
    }
}

impl Default for MemoryTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCache for MemoryTokenCache {
    fn get(&self, key: &str) -> Result<Option<CachedToken>> {
        Ok(self.inner.get(key).map(|entry| entry.token))
    }

    fn put(&self, key: &str, token: CachedToken, ttl: Duration) -> Result<()> {
        self.inner.insert(key.to_string(), Entry { token, ttl });
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.invalidate(key);
        Ok(())
    }
}
