//! # tcapi-sdk
//!
//! Client library for the trading card content API (TCAPI).
//!
//! This library authenticates with the OAuth 2.0 client-credentials grant,
//! sends requests against the JSON:API endpoints and maps the responses
//! into typed domain objects with their related resources attached.
//!
//! ## Security
//!
//! - Client secrets and access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages are sanitized of bearer tokens and secrets
//!
//! ## Crates
//!
//! - **tcapi-client** - HTTP transport: configuration, status policy, error parsing
//! - **tcapi-auth** - Client credentials, token exchange, 60 second token cache
//! - **tcapi-jsonapi** - JSON:API document mapping and type resolution
//! - **tcapi-rest** - Authenticated client, resource accessors, stats
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tcapi_sdk::{ClientCredentials, ResourceKind, TcapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TcapiClient::new(
//!         "https://api.example.com",
//!         ClientCredentials::new("client_id", "client_secret"),
//!     )?;
//!
//!     let cards = client.resource(ResourceKind::Card).list().await?;
//!     for card in cards.payload.iter() {
//!         println!("{} {:?}", card.id(), card.get_str("name"));
//!     }
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use tcapi_auth as auth;
#[cfg(feature = "client")]
pub use tcapi_client as client;
#[cfg(feature = "jsonapi")]
pub use tcapi_jsonapi as jsonapi;
#[cfg(feature = "rest")]
pub use tcapi_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use tcapi_auth::{ClientCredentials, TokenProvider};
#[cfg(feature = "client")]
pub use tcapi_client::ClientConfig;
#[cfg(feature = "jsonapi")]
pub use tcapi_jsonapi::{DomainObject, JsonApiResponse, ResourceKind, ResponseMapper};
#[cfg(feature = "rest")]
pub use tcapi_rest::{RequestOptions, TcapiClient};
