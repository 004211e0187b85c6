//! # tc-rest
//!
//! Authenticated TCAPI client with resource accessors and statistics.
//!
//! ## Features
//!
//! - **Requests** - Token acquisition, default headers, status policy and
//!   JSON body normalization on every call
//! - **Documents** - JSON:API bodies mapped into typed domain objects
//! - **Resources** - Find, list, create, update and delete per collection
//! - **Stats** - Counts, growth and snapshots DTOs
//! - **Reauthentication** - Optional single retry with a fresh token on 401
//!
//! ## Example
//!
//! ```rust,ignore
//! use tcapi_jsonapi::ResourceKind;
//! use tcapi_rest::TcapiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tcapi_rest::Error> {
//!     let client = TcapiClient::from_env()?;
//!
//!     let doc = client.resource(ResourceKind::Card).find("9").await?;
//!     if let Some(card) = doc.single() {
//!         println!("{:?} in {} set(s)", card.get_str("name"), card.related("sets").len());
//!     }
//!
//!     let counts = client.counts().await?;
//!     println!("{:?}", counts.get_by_entity_type("cards"));
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod stats;

pub use client::{RequestOptions, ResourceClient, TcapiClient};
pub use error::{Error, ErrorKind, Result};
pub use stats::{
    CountsResponse, EntityCount, EntityGrowth, GrowthResponse, Snapshot, SnapshotsResponse,
};
