//! # tc-client
//!
//! Core HTTP transport for the trading card content API (TCAPI).
//!
//! This crate provides the foundational HTTP client with:
//! - Configurable TLS verification, timeouts, and User-Agent
//! - The TCAPI "ignore status" policy for non-2xx responses
//! - JSON:API error body parsing with sanitized messages
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (tc-rest: TcapiClient, resource accessors, stats)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    tc-auth                                  │
//! │  - OAuth client-credentials exchange                        │
//! │  - Token cache keyed by hashed credentials                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TcHttpClient                             │
//! │  - Raw HTTP with status policy and error parsing            │
//! │  - Request building                                         │
//! │  - Response body normalization                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use tcapi_client::{ClientConfig, TcHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tcapi_client::Error> {
//!     let client = TcHttpClient::new(ClientConfig::default())?;
//!
//!     let response = client
//!         .send(client.get("https://api.example.com/cards/9").bearer_auth("token"))
//!         .await?;
//!
//!     let body = response.json_value().await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::{build_reqwest_client, TcHttpClient};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::Response;

/// Header carrying the ignore-status diagnostic flag.
pub const IGNORE_STATUS_HEADER: &str = "X-TCAPI-Ignore-Status";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("tcapi-sdk/", env!("CARGO_PKG_VERSION"));
