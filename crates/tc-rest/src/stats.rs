//! Statistics DTOs.
//!
//! The stats endpoints answer with a JSON:API-shaped document whose figures
//! live under `data.attributes`. Construction never fails: a missing, null
//! or mistyped field yields its default, and entries that are not objects
//! are skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Total number of records for one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityCount {
    #[serde(alias = "entityType")]
    pub entity_type: String,
    pub total: i64,
}

impl EntityCount {
    fn from_entry(entry: &Value) -> Self {
        let entry = Some(entry);
        Self {
            entity_type: string_field(entry, "entity_type", "entityType"),
            total: int_field(entry, "total", "total"),
        }
    }
}

/// Response of `GET /stats/counts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsResponse {
    pub generated_at: String,
    pub counts: Vec<EntityCount>,
}

impl CountsResponse {
    /// Build from a raw response document.
    pub fn from_response(response: &Value) -> Self {
        let attrs = attributes(response);
        Self {
            generated_at: string_field(attrs, "generated_at", "generatedAt"),
            counts: entries(attrs, "counts", "counts", EntityCount::from_entry),
        }
    }

    /// First entry for `entity_type`.
    pub fn get_by_entity_type(&self, entity_type: &str) -> Option<&EntityCount> {
        self.counts.iter().find(|c| c.entity_type == entity_type)
    }
}

/// Growth of one entity type over a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityGrowth {
    #[serde(alias = "entityType")]
    pub entity_type: String,
    pub current: i64,
    pub previous: i64,
    pub change: i64,
    #[serde(alias = "percentChange")]
    pub percent_change: f64,
}

impl EntityGrowth {
    fn from_entry(entry: &Value) -> Self {
        let entry = Some(entry);
        Self {
            entity_type: string_field(entry, "entity_type", "entityType"),
            current: int_field(entry, "current", "current"),
            previous: int_field(entry, "previous", "previous"),
            change: int_field(entry, "change", "change"),
            percent_change: float_field(entry, "percent_change", "percentChange"),
        }
    }
}

/// Response of `GET /stats/growth`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthResponse {
    pub period: String,
    pub growth: Vec<EntityGrowth>,
}

impl GrowthResponse {
    /// Build from a raw response document.
    pub fn from_response(response: &Value) -> Self {
        let attrs = attributes(response);
        Self {
            period: string_field(attrs, "period", "period"),
            growth: entries(attrs, "growth", "growth", EntityGrowth::from_entry),
        }
    }

    /// First entry for `entity_type`.
    pub fn get_by_entity_type(&self, entity_type: &str) -> Option<&EntityGrowth> {
        self.growth.iter().find(|g| g.entity_type == entity_type)
    }
}

/// A dated total for one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(alias = "entityType")]
    pub entity_type: String,
    pub date: String,
    pub total: i64,
}

impl Snapshot {
    fn from_entry(entry: &Value) -> Self {
        let entry = Some(entry);
        Self {
            entity_type: string_field(entry, "entity_type", "entityType"),
            date: string_field(entry, "date", "date"),
            total: int_field(entry, "total", "total"),
        }
    }
}

/// Response of `GET /stats/snapshots`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotsResponse {
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotsResponse {
    /// Build from a raw response document.
    pub fn from_response(response: &Value) -> Self {
        Self {
            snapshots: entries(
                attributes(response),
                "snapshots",
                "snapshots",
                Snapshot::from_entry,
            ),
        }
    }

    /// First entry for `entity_type`.
    pub fn get_by_entity_type(&self, entity_type: &str) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.entity_type == entity_type)
    }
}

fn attributes(response: &Value) -> Option<&Value> {
    response.pointer("/data/attributes").filter(|v| v.is_object())
}

fn field<'a>(attrs: Option<&'a Value>, snake: &str, camel: &str) -> Option<&'a Value> {
    let attrs = attrs?;
    attrs.get(snake).or_else(|| attrs.get(camel))
}

fn string_field(attrs: Option<&Value>, snake: &str, camel: &str) -> String {
    field(attrs, snake, camel)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Integral fields also accept floats (`12.0`), truncated toward zero.
fn int_field(attrs: Option<&Value>, snake: &str, camel: &str) -> i64 {
    field(attrs, snake, camel)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or_default()
}

fn float_field(attrs: Option<&Value>, snake: &str, camel: &str) -> f64 {
    field(attrs, snake, camel)
        .and_then(Value::as_f64)
        .unwrap_or_default()
}

fn entries<T>(
    attrs: Option<&Value>,
    snake: &str,
    camel: &str,
    build: fn(&Value) -> T,
) -> Vec<T> {
    field(attrs, snake, camel)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter(|item| item.is_object()).map(build).collect())
        .unwrap_or_default()
}
