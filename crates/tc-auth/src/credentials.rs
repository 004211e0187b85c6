//! OAuth client credentials.
//!
//! The client secret is redacted in Debug output.

use sha2::{Digest, Sha256};

use crate::error::{Error, ErrorKind, Result};

/// Prefix of every token cache key.
const CACHE_KEY_PREFIX: &str = "tcapi_token_";

/// Client id, secret and scope for the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    scope: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("scope", &self.scope)
            .finish()
    }
}

impl ClientCredentials {
    /// Create new credentials with an empty scope.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: String::new(),
        }
    }

    /// Set the OAuth scope string.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `TCAPI_CLIENT_ID`
    /// - `TCAPI_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `TCAPI_SCOPE` (default: empty)
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("TCAPI_CLIENT_ID")
            .map_err(|_| Error::new(ErrorKind::EnvVar("TCAPI_CLIENT_ID".to_string())))?;
        let client_secret = std::env::var("TCAPI_CLIENT_SECRET")
            .map_err(|_| Error::new(ErrorKind::EnvVar("TCAPI_CLIENT_SECRET".to_string())))?;
        let scope = std::env::var("TCAPI_SCOPE").unwrap_or_default();

        let creds = Self::new(client_id, client_secret).with_scope(scope);
        creds.validate()?;
        Ok(creds)
    }

    /// Get the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the client secret (for the token exchange only).
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Get the OAuth scope string.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Reject credentials that cannot possibly authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "client_id is empty".to_string(),
            )));
        }
        if self.client_secret.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "client_secret is empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Hex SHA-256 digest of the id/secret pair.
    ///
    /// Each value is preceded by its byte length, so no two distinct pairs
    /// share an encoding whatever characters they contain.
    pub fn credentials_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [&self.client_id, &self.client_secret] {
            hasher.update((field.len() as u64).to_be_bytes());
            hasher.update(field.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    /// Key under which this credential set's token is cached.
    pub fn cache_key(&self) -> String {
        format!("{}{}", CACHE_KEY_PREFIX, self.credentials_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ClientCredentials::new("my-client", "super_secret_value");
        let debug_output = format!("{:?}", creds);
        assert!(debug_output.contains("my-client"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_value"));
    }

    #[test]
    fn test_cache_key_is_stable_and_opaque() {
        let a = ClientCredentials::new("client", "secret");
        let b = ClientCredentials::new("client", "secret").with_scope("read");

        assert_eq!(a.cache_key(), b.cache_key());
        assert!(a.cache_key().starts_with("tcapi_token_"));
        assert_eq!(a.credentials_hash().len(), 64);
        assert!(!a.cache_key().contains("secret"));
    }

    #[test]
    fn test_cache_key_differs_per_credential_set() {
        let a = ClientCredentials::new("client", "secret");
        let b = ClientCredentials::new("client", "other-secret");
        let c = ClientCredentials::new("ab", "c");
        let d = ClientCredentials::new("a", "bc");

        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(c.cache_key(), d.cache_key());
    }

    #[test]
    fn test_cache_key_unambiguous_with_colons() {
        let a = ClientCredentials::new("a:b", "c");
        let b = ClientCredentials::new("a", "b:c");
        let c = ClientCredentials::new("a:", "");
        let d = ClientCredentials::new("a", ":");

        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(c.cache_key(), d.cache_key());
    }

    #[test]
    fn test_validate() {
        assert!(ClientCredentials::new("id", "secret").validate().is_ok());
        assert!(ClientCredentials::new(" ", "secret").validate().is_err());
        assert!(ClientCredentials::new("id", "").validate().is_err());
    }
}
