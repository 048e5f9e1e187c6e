//! Placeholder registry for attribute names and values

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Maps synthetic placeholders to attribute names (`#status`) and values
/// (`:status`).
///
/// A name placeholder is registered once no matter how many clauses use it.
/// Value placeholders are always distinct: binding a stem that is already
/// taken yields a suffixed placeholder instead of overwriting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderRegistry {
    names: BTreeMap<String, String>,
    values: Map<String, Value>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the placeholder for `attribute`, registering it on first use.
    pub fn name(&mut self, attribute: &str) -> String {
        let placeholder = format!("#{}", attribute);
        self.names
            .entry(placeholder.clone())
            .or_insert_with(|| attribute.to_string());
        placeholder
    }

    /// Binds `value` under a fresh placeholder derived from `stem`.
    pub fn value(&mut self, stem: &str, value: Value) -> String {
        let mut placeholder = format!(":{}", stem);
        let mut suffix = 1;
        while self.values.contains_key(&placeholder) {
            placeholder = format!(":{}_{}", stem, suffix);
            suffix += 1;
        }
        self.values.insert(placeholder.clone(), value);
        placeholder
    }

    pub fn resolve_name(&self, placeholder: &str) -> Option<&str> {
        self.names.get(placeholder).map(String::as_str)
    }

    pub fn resolve_value(&self, placeholder: &str) -> Option<&Value> {
        self.values.get(placeholder)
    }

    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_registered_once() {
        let mut registry = PlaceholderRegistry::new();
        let a = registry.name("createdAt");
        let b = registry.name("createdAt");

        assert_eq!(a, "#createdAt");
        assert_eq!(a, b);
        assert_eq!(registry.names().len(), 1);
        assert_eq!(registry.resolve_name("#createdAt"), Some("createdAt"));
    }

    #[test]
    fn test_values_never_collide() {
        let mut registry = PlaceholderRegistry::new();
        let a = registry.value("tag", json!("x"));
        let b = registry.value("tag", json!("y"));

        assert_eq!(a, ":tag");
        assert_eq!(b, ":tag_1");
        assert_eq!(registry.resolve_value(":tag"), Some(&json!("x")));
        assert_eq!(registry.resolve_value(":tag_1"), Some(&json!("y")));
    }

    #[test]
    fn test_unknown_placeholders() {
        let registry = PlaceholderRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve_name("#nope"), None);
        assert_eq!(registry.resolve_value(":nope"), None);
    }
}
