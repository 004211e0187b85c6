//! # tc-auth
//!
//! TCAPI authentication via the OAuth 2.0 client-credentials grant.
//!
//! ## Security
//!
//! - Client secrets and access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Cache keys are SHA-256 digests, never raw credentials
//!
//! ## Token caching
//!
//! [`TokenProvider`] consults a [`TokenCache`] before every exchange. Entries
//! live for 60 seconds regardless of the `expires_in` the server reports, so
//! a rotated or revoked secret stops being served from cache quickly.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tcapi_auth::{ClientCredentials, TokenProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tcapi_auth::Error> {
//!     let creds = ClientCredentials::from_env()?;
//!     let provider = TokenProvider::new("https://api.example.com")?;
//!
//!     // First call performs the exchange, the second is served from cache.
//!     let token = provider.get_token(&creds).await?;
//!     let again = provider.get_token(&creds).await?;
//!     assert_eq!(token, again);
//!     Ok(())
//! }
//! ```

mod cache;
mod credentials;
mod error;
mod oauth;
mod provider;
mod storage;

pub use cache::{CachedToken, MemoryTokenCache, TokenCache};
pub use credentials::ClientCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, TokenResponse, TOKEN_PATH};
pub use provider::{TokenProvider, DEFAULT_TOKEN_TTL};
pub use storage::FileTokenCache;
