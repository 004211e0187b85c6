//! Per-collection accessors.
//!
//! [`ResourceClient`] builds `/collection` and `/collection/{id}` paths for a
//! [`ResourceKind`]. Reads are mapped through the client's mapper; writes
//! return the raw JSON body.

use serde_json::Value;
use tracing::instrument;

use tcapi_client::RequestMethod;
use tcapi_jsonapi::{JsonApiResponse, ResourceKind};

use super::{RequestOptions, TcapiClient};
use crate::error::Result;

impl TcapiClient {
    /// Accessor for one resource collection, e.g. `/cards`.
    pub fn resource(&self, kind: ResourceKind) -> ResourceClient<'_> {
        ResourceClient { client: self, kind }
    }
}

/// Path construction for one resource collection.
///
/// Borrows the [`TcapiClient`], so every accessor shares its HTTP pool and
/// token cache.
#[derive(Debug, Clone, Copy)]
pub struct ResourceClient<'a> {
    client: &'a TcapiClient,
    kind: ResourceKind,
}

impl ResourceClient<'_> {
    /// The resource kind.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Collection path, e.g. `/cards`.
    pub fn collection_path(&self) -> String {
        format!("/{}", self.kind.collection_path())
    }

    /// Member path, e.g. `/cards/9`. The id is percent-encoded.
    pub fn member_path(&self, id: &str) -> String {
        format!(
            "/{}/{}",
            self.kind.collection_path(),
            urlencoding::encode(id)
        )
    }

    /// Fetch one resource.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn find(&self, id: &str) -> Result<JsonApiResponse> {
        self.client
            .request_document(&self.member_path(id), RequestMethod::Get, RequestOptions::new())
            .await
    }

    /// Fetch the collection.
    pub async fn list(&self) -> Result<JsonApiResponse> {
        self.list_with(&[]).await
    }

    /// Fetch the collection with query parameters, passed through as-is.
    #[instrument(skip(self, params), fields(kind = %self.kind))]
    pub async fn list_with(&self, params: &[(&str, &str)]) -> Result<JsonApiResponse> {
        let options = params
            .iter()
            .fold(RequestOptions::new(), |options, (name, value)| {
                options.query(*name, *value)
            });
        self.client
            .request_document(&self.collection_path(), RequestMethod::Get, options)
            .await
    }

    /// Create a resource. The body is sent unchanged.
    #[instrument(skip(self, body), fields(kind = %self.kind))]
    pub async fn create(&self, body: Value) -> Result<Value> {
        self.client.post(&self.collection_path(), body).await
    }

    /// Update a resource with PATCH. The body is sent unchanged.
    #[instrument(skip(self, body), fields(kind = %self.kind))]
    pub async fn update(&self, id: &str, body: Value) -> Result<Value> {
        self.client.patch(&self.member_path(id), body).await
    }

    /// Delete a resource.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client.delete(&self.member_path(id)).await
    }
}
