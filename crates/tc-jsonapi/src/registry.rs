//! Wire type to resource kind resolution.

use std::collections::HashMap;

use crate::error::{Error, ErrorKind, Result};
use crate::kind::ResourceKind;

/// Irregular wire types, checked before the regular rule.
const OVERRIDES: &[(&str, ResourceKind)] = &[
    ("parentset", ResourceKind::Set),
    ("parentsets", ResourceKind::Set),
    ("subset", ResourceKind::Set),
    ("subsets", ResourceKind::Set),
    ("checklist", ResourceKind::Card),
    ("checklists", ResourceKind::Card),
];

/// Resolves raw JSON:API `type` strings to [`ResourceKind`]s.
///
/// Resolution order:
/// 1. the lowercased raw type is looked up in the override table
/// 2. otherwise it is singularized and capitalized, then exact-matched
///    against each kind's [`ResourceKind::type_key`]
///
/// Anything else is an [`ErrorKind::UnknownResourceType`].
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    overrides: HashMap<String, ResourceKind>,
    kinds: HashMap<&'static str, ResourceKind>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self {
            overrides: OVERRIDES
                .iter()
                .map(|(raw, kind)| (raw.to_string(), *kind))
                .collect(),
            kinds: ResourceKind::ALL
                .iter()
                .map(|kind| (kind.type_key(), *kind))
                .collect(),
        }
    }
}

impl TypeRegistry {
    /// Create the registry with the built-in kinds and overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override entry. `raw_type` is matched case-insensitively.
    pub fn with_override(mut self, raw_type: &str, kind: ResourceKind) -> Self {
        self.overrides.insert(raw_type.to_lowercase(), kind);
        self
    }

    /// Resolve a raw wire type.
    pub fn resolve(&self, raw_type: &str) -> Result<ResourceKind> {
        let lowered = raw_type.to_lowercase();

        if let Some(kind) = self.overrides.get(&lowered) {
            return Ok(*kind);
        }

        let key = capitalize(&singularize(&lowered));
        self.kinds
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownResourceType(raw_type.to_string())))
    }

    /// Returns true if `raw_type` resolves to some kind.
    pub fn is_known(&self, raw_type: &str) -> bool {
        self.resolve(raw_type).is_ok()
    }
}

/// English singularization for lowercase words.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if word.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    for suffix in ["xes", "ches", "shes", "zzes", "uses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
