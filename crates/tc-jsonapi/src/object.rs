//! Domain objects reconstructed from JSON:API resources.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::kind::ResourceKind;
use crate::value::{AttributeValue, Attributes};

/// Related objects grouped by their raw wire `type`, order preserved within
/// each group.
pub type Relationships = BTreeMap<String, Vec<DomainObject>>;

/// A typed reconstruction of one JSON:API resource.
///
/// The resource `id` is also present in [`DomainObject::attributes`] under
/// the `id` key, taking precedence over any attribute of the same name.
/// Relationships live beside the attributes, never inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainObject {
    kind: ResourceKind,
    resource_type: String,
    id: String,
    attributes: Attributes,
    relationships: Arc<Relationships>,
}

impl DomainObject {
    /// Build an object with no relationships.
    pub fn new(
        kind: ResourceKind,
        resource_type: impl Into<String>,
        id: impl Into<String>,
        mut attributes: Attributes,
    ) -> Self {
        let id = id.into();
        attributes.insert("id".to_string(), AttributeValue::String(id.clone()));
        Self {
            kind,
            resource_type: resource_type.into(),
            id,
            attributes,
            relationships: Arc::default(),
        }
    }

    /// Attach a relationships map, replacing any existing one.
    pub fn with_relationships(mut self, relationships: Arc<Relationships>) -> Self {
        self.relationships = relationships;
        self
    }

    /// Resolved domain kind.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Raw wire `type`, e.g. `cards`.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All attributes, including `id`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up one attribute.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Look up a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_str)
    }

    /// The full relationships map.
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Related objects of one wire type; empty when there are none.
    pub fn related(&self, resource_type: &str) -> &[DomainObject] {
        self.relationships
            .get(resource_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if two objects share the same relationships allocation.
    pub fn shares_relationships_with(&self, other: &DomainObject) -> bool {
        Arc::ptr_eq(&self.relationships, &other.relationships)
    }
}
