//! The JSON:API envelope as it arrives on the wire.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::value::{attributes_from_json, Attributes};

/// One resource object: `{ id, type, attributes }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceObject {
    pub id: String,
    pub resource_type: String,
    pub attributes: Attributes,
}

impl ResourceObject {
    /// Read a resource object from JSON.
    ///
    /// A numeric `id` is rendered as its decimal string. Missing or `null`
    /// attributes become an empty map.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut object) = value else {
            return Err(Error::malformed("resource object is not a JSON object"));
        };

        let id = match object.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => return Err(Error::malformed("resource id must be a string or number")),
            None => return Err(Error::malformed("resource object has no id")),
        };

        let resource_type = match object.remove("type") {
            Some(Value::String(t)) if !t.is_empty() => t,
            Some(_) => return Err(Error::malformed("resource type must be a non-empty string")),
            None => return Err(Error::malformed("resource object has no type")),
        };

        let attributes = match object.remove("attributes") {
            None | Some(Value::Null) => Attributes::new(),
            Some(Value::Object(map)) => attributes_from_json(map),
            Some(_) => return Err(Error::malformed("resource attributes must be an object")),
        };

        Ok(Self {
            id,
            resource_type,
            attributes,
        })
    }
}

/// Primary data: one resource or an ordered list.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryData {
    Single(ResourceObject),
    Collection(Vec<ResourceObject>),
}

/// A parsed top-level JSON:API document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: PrimaryData,
    pub included: Vec<ResourceObject>,
    pub meta: Map<String, Value>,
    pub links: Map<String, Value>,
}

impl Document {
    /// Read a document from a generic JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(Error::malformed("document root is not a JSON object"));
        };

        let data = match root.remove("data") {
            Some(Value::Array(items)) => PrimaryData::Collection(
                items
                    .into_iter()
                    .map(ResourceObject::from_value)
                    .collect::<Result<_>>()?,
            ),
            Some(object @ Value::Object(_)) => {
                PrimaryData::Single(ResourceObject::from_value(object)?)
            }
            Some(Value::Null) | None => {
                return Err(Error::malformed("document has no primary data"))
            }
            Some(_) => return Err(Error::malformed("data must be an object or an array")),
        };

        let included = match root.remove("included") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(ResourceObject::from_value)
                .collect::<Result<_>>()?,
            Some(_) => return Err(Error::malformed("included must be an array")),
        };

        Ok(Self {
            data,
            included,
            meta: object_member(&mut root, "meta")?,
            links: object_member(&mut root, "links")?,
        })
    }
}

/// Take an optional object-valued member; `null` counts as absent.
fn object_member(root: &mut Map<String, Value>, key: &str) -> Result<Map<String, Value>> {
    match root.remove(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(Error::malformed(format!("{key} must be an object"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn assert_malformed(value: Value) {
        let err = Document::from_value(value).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MalformedDocument(_)),
            "unexpected kind: {:?}",
            err.kind
        );
    }

    #[test]
    fn test_single_resource() {
        let doc = Document::from_value(json!({
            "data": {"id": "9", "type": "cards", "attributes": {"name": "Ace"}},
            "meta": {"total": 1}
        }))
        .unwrap();

        match doc.data {
            PrimaryData::Single(obj) => {
                assert_eq!(obj.id, "9");
                assert_eq!(obj.resource_type, "cards");
                assert_eq!(obj.attributes["name"].as_str(), Some("Ace"));
            }
            other => panic!("expected single, got {other:?}"),
        }
        assert_eq!(doc.meta["total"], json!(1));
        assert!(doc.links.is_empty());
        assert!(doc.included.is_empty());
    }

    #[test]
    fn test_numeric_id_and_missing_attributes() {
        let obj = ResourceObject::from_value(json!({"id": 42, "type": "sets"})).unwrap();
        assert_eq!(obj.id, "42");
        assert!(obj.attributes.is_empty());

        let obj =
            ResourceObject::from_value(json!({"id": "1", "type": "sets", "attributes": null}))
                .unwrap();
        assert!(obj.attributes.is_empty());
    }

    #[test]
    fn test_null_meta_and_links_default_to_empty() {
        let doc = Document::from_value(json!({
            "data": [],
            "meta": null,
            "links": null,
            "included": null
        }))
        .unwrap();
        assert_eq!(doc.data, PrimaryData::Collection(vec![]));
        assert!(doc.meta.is_empty());
        assert!(doc.links.is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        assert_malformed(json!([]));
        assert_malformed(json!({}));
        assert_malformed(json!({"data": null}));
        assert_malformed(json!({"data": "cards"}));
        assert_malformed(json!({"data": 7}));
        assert_malformed(json!({"data": {"type": "cards"}}));
        assert_malformed(json!({"data": {"id": "1"}}));
        assert_malformed(json!({"data": {"id": true, "type": "cards"}}));
        assert_malformed(json!({"data": {"id": "1", "type": "cards", "attributes": []}}));
        assert_malformed(json!({"data": ["not an object"]}));
        assert_malformed(json!({"data": [], "meta": "oops"}));
        assert_malformed(json!({"data": [], "links": [1]}));
        assert_malformed(json!({"data": [], "included": {}}));
    }
}
