//! JSON:API document to domain object mapping.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{Document, PrimaryData, ResourceObject};
use crate::error::Result;
use crate::object::{DomainObject, Relationships};
use crate::registry::TypeRegistry;

/// Mapped primary data.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `data` was a single resource object.
    Single(DomainObject),
    /// `data` was an array, in document order.
    Collection(Vec<DomainObject>),
}

impl Payload {
    /// Number of primary objects.
    pub fn len(&self) -> usize {
        match self {
            Payload::Single(_) => 1,
            Payload::Collection(items) => items.len(),
        }
    }

    /// Returns true for an empty collection.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the primary objects.
    pub fn iter(&self) -> std::slice::Iter<'_, DomainObject> {
        match self {
            Payload::Single(obj) => std::slice::from_ref(obj).iter(),
            Payload::Collection(items) => items.iter(),
        }
    }
}

/// Result of mapping one document: primary data plus its meta and links.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonApiResponse {
    pub payload: Payload,
    pub meta: Map<String, Value>,
    pub links: Map<String, Value>,
}

impl JsonApiResponse {
    /// The object, if the document carried a single resource.
    pub fn single(&self) -> Option<&DomainObject> {
        match &self.payload {
            Payload::Single(obj) => Some(obj),
            Payload::Collection(_) => None,
        }
    }

    /// The objects, if the document carried a collection.
    pub fn collection(&self) -> Option<&[DomainObject]> {
        match &self.payload {
            Payload::Single(_) => None,
            Payload::Collection(items) => Some(items),
        }
    }

    /// Consume the response, keeping only the primary data.
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Maps JSON:API documents into [`DomainObject`]s.
///
/// Holds no per-document state; one mapper can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ResponseMapper {
    registry: TypeRegistry,
}

impl ResponseMapper {
    /// Create a mapper with the built-in type registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with a custom registry.
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// The registry used for type resolution.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Parse and map a JSON body.
    pub fn parse(&self, body: &str) -> Result<JsonApiResponse> {
        let value: Value = serde_json::from_str(body)?;
        self.parse_value(value)
    }

    /// Map an already-parsed JSON value.
    pub fn parse_value(&self, value: Value) -> Result<JsonApiResponse> {
        let document = Document::from_value(value)?;

        let included_count = document.included.len();
        let relationships = Arc::new(self.build_relationships(document.included)?);

        let payload = match document.data {
            PrimaryData::Single(resource) => {
                Payload::Single(self.build(resource)?.with_relationships(relationships))
            }
            PrimaryData::Collection(resources) => Payload::Collection(
                resources
                    .into_iter()
                    .map(|resource| {
                        Ok(self
                            .build(resource)?
                            .with_relationships(Arc::clone(&relationships)))
                    })
                    .collect::<Result<_>>()?,
            ),
        };

        debug!(
            primary = payload.len(),
            included = included_count,
            "Mapped JSON:API document"
        );

        Ok(JsonApiResponse {
            payload,
            meta: document.meta,
            links: document.links,
        })
    }

    fn build(&self, resource: ResourceObject) -> Result<DomainObject> {
        let kind = self.registry.resolve(&resource.resource_type)?;
        Ok(DomainObject::new(
            kind,
            resource.resource_type,
            resource.id,
            resource.attributes,
        ))
    }

    fn build_relationships(&self, included: Vec<ResourceObject>) -> Result<Relationships> {
        let mut relationships = Relationships::new();
        for resource in included {
            let group = resource.resource_type.clone();
            let object = self.build(resource)?;
            relationships.entry(group).or_default().push(object);
        }
        Ok(relationships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::kind::ResourceKind;
    use crate::value::AttributeValue;
    use serde_json::json;

    #[test]
    fn test_single_card_without_included() {
        let mapper = ResponseMapper::new();
        let response = mapper
            .parse(r#"{"data":{"id":"9","type":"cards","attributes":{"name":"Ace"}}}"#)
            .unwrap();

        let card = response.single().unwrap();
        assert_eq!(card.kind(), ResourceKind::Card);
        assert_eq!(card.id(), "9");
        assert_eq!(card.get_str("name"), Some("Ace"));
        assert_eq!(card.attributes().len(), 2);
        assert!(card.relationships().is_empty());
        assert!(response.meta.is_empty());
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_single_card_with_included_set() {
        let mapper = ResponseMapper::new();
        let response = mapper
            .parse_value(json!({
                "data": {"id": "9", "type": "cards", "attributes": {"name": "Ace"}},
                "included": [
                    {"id": "5", "type": "sets", "attributes": {"name": "1990 Set"}}
                ]
            }))
            .unwrap();

        let card = response.single().unwrap();
        let sets = card.related("sets");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].kind(), ResourceKind::Set);
        assert_eq!(sets[0].id(), "5");
        assert_eq!(sets[0].get_str("name"), Some("1990 Set"));
        assert!(sets[0].relationships().is_empty());
    }

    #[test]
    fn test_attributes_equal_source_plus_id() {
        let mapper = ResponseMapper::new();
        let response = mapper
            .parse_value(json!({
                "data": {
                    "id": "12",
                    "type": "players",
                    "attributes": {"first_name": "Ken", "rookie_year": 1989, "active": false}
                }
            }))
            .unwrap();

        let player = response.single().unwrap();
        let mut expected = crate::value::Attributes::new();
        expected.insert("first_name".into(), AttributeValue::from("Ken"));
        expected.insert("rookie_year".into(), AttributeValue::Integer(1989));
        expected.insert("active".into(), AttributeValue::Bool(false));
        expected.insert("id".into(), AttributeValue::from("12"));
        assert_eq!(player.attributes(), &expected);
    }

    #[test]
    fn test_collection_keeps_order_and_shares_relationships() {
        let mapper = ResponseMapper::new();
        let response = mapper
            .parse_value(json!({
                "data": [
                    {"id": "3", "type": "cards", "attributes": {"name": "C"}},
                    {"id": "1", "type": "cards", "attributes": {"name": "A"}},
                    {"id": "2", "type": "checklists", "attributes": {"name": "B"}}
                ],
                "included": [
                    {"id": "5", "type": "sets", "attributes": {"name": "Base"}},
                    {"id": "7", "type": "teams", "attributes": {"name": "Mariners"}},
                    {"id": "6", "type": "sets", "attributes": {"name": "Update"}}
                ],
                "meta": {"page": {"total": 3}},
                "links": {"self": "/cards"}
            }))
            .unwrap();

        let cards = response.collection().unwrap();
        let ids: Vec<&str> = cards.iter().map(DomainObject::id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(cards[2].kind(), ResourceKind::Card);
        assert_eq!(cards[2].resource_type(), "checklists");

        assert!(cards[0].shares_relationships_with(&cards[1]));
        assert!(cards[1].shares_relationships_with(&cards[2]));

        let set_ids: Vec<&str> = cards[0].related("sets").iter().map(DomainObject::id).collect();
        assert_eq!(set_ids, vec!["5", "6"]);
        assert_eq!(cards[0].related("teams").len(), 1);

        assert_eq!(response.meta["page"]["total"], json!(3));
        assert_eq!(response.links["self"], json!("/cards"));
    }

    #[test]
    fn test_included_overrides_resolve() {
        let mapper = ResponseMapper::new();
        let response = mapper
            .parse_value(json!({
                "data": {"id": "1", "type": "sets"},
                "included": [
                    {"id": "2", "type": "parentset"},
                    {"id": "3", "type": "subset"}
                ]
            }))
            .unwrap();

        let set = response.single().unwrap();
        assert_eq!(set.related("parentset")[0].kind(), ResourceKind::Set);
        assert_eq!(set.related("subset")[0].kind(), ResourceKind::Set);
    }

    #[test]
    fn test_empty_collection() {
        let response = ResponseMapper::new().parse(r#"{"data":[]}"#).unwrap();
        assert!(response.payload.is_empty());
        assert_eq!(response.collection(), Some(&[][..]));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let mapper = ResponseMapper::new();
        let body = r#"{
            "data": [{"id": "1", "type": "cards", "attributes": {"name": "A"}}],
            "included": [{"id": "5", "type": "sets", "attributes": {"name": "Base"}}],
            "meta": {"count": 1}
        }"#;

        let first = mapper.parse(body).unwrap();
        let second = mapper.parse(body).unwrap();
        assert_eq!(first, second);

        let a = &first.collection().unwrap()[0];
        let b = &second.collection().unwrap()[0];
        assert!(!a.shares_relationships_with(b));
    }

    #[test]
    fn test_unknown_types_are_fatal() {
        let mapper = ResponseMapper::new();

        let err = mapper
            .parse_value(json!({"data": {"id": "1", "type": "widgets"}}))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownResourceType("widgets".into()));

        let err = mapper
            .parse_value(json!({
                "data": {"id": "1", "type": "cards"},
                "included": [{"id": "2", "type": "gizmos"}]
            }))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownResourceType("gizmos".into()));
    }

    #[test]
    fn test_malformed_input() {
        let mapper = ResponseMapper::new();

        for body in ["not json", "", r#"{"meta":{}}"#, r#"{"data":null}"#, r#"{"data":true}"#] {
            let err = mapper.parse(body).unwrap_err();
            assert!(
                matches!(err.kind, ErrorKind::MalformedDocument(_)),
                "{body}: {:?}",
                err.kind
            );
        }
    }

    #[test]
    fn test_payload_iter() {
        let response = ResponseMapper::new()
            .parse(r#"{"data":{"id":"9","type":"cards"}}"#)
            .unwrap();
        assert_eq!(response.payload.iter().count(), 1);
        assert!(matches!(response.into_payload(), Payload::Single(_)));
    }
}
