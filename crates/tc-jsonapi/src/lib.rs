//! # tc-jsonapi
//!
//! Maps TCAPI JSON:API responses into typed domain objects.
//!
//! A document's primary data becomes one [`DomainObject`] or an ordered
//! collection of them. Every resource under `included` is mapped too,
//! grouped by its wire `type`, and attached to each primary object as its
//! relationships. `meta` and `links` are returned next to the payload in
//! [`JsonApiResponse`].
//!
//! ## Type resolution
//!
//! Wire types resolve through [`TypeRegistry`]: a small override table
//! (`parentset`/`subset` → `Set`, `checklist` → `Card`) first, then English
//! singularization and capitalization against the closed [`ResourceKind`]
//! set. A type that resolves to nothing fails the whole parse.
//!
//! ## Example
//!
//! ```rust
//! use tcapi_jsonapi::{ResourceKind, ResponseMapper};
//!
//! let body = r#"{
//!     "data": {"id": "9", "type": "cards", "attributes": {"name": "Ace"}},
//!     "included": [{"id": "5", "type": "sets", "attributes": {"name": "1990 Set"}}]
//! }"#;
//!
//! let response = ResponseMapper::new().parse(body).unwrap();
//! let card = response.single().unwrap();
//!
//! assert_eq!(card.kind(), ResourceKind::Card);
//! assert_eq!(card.get_str("name"), Some("Ace"));
//! assert_eq!(card.related("sets")[0].get_str("name"), Some("1990 Set"));
//! ```

mod document;
mod error;
mod kind;
mod mapper;
mod object;
mod registry;
mod value;

pub use document::{Document, PrimaryData, ResourceObject};
pub use error::{Error, ErrorKind, Result};
pub use kind::ResourceKind;
pub use mapper::{JsonApiResponse, Payload, ResponseMapper};
pub use object::{DomainObject, Relationships};
pub use registry::{capitalize, singularize, TypeRegistry};
pub use value::{attributes_from_json, AttributeValue, Attributes};
