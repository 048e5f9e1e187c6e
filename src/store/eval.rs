//! Clause evaluation against stored documents
//!
//! No type coercion: a string never equals a number, and a missing or null
//! attribute never matches.

use std::cmp::Ordering;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::expression::{Comparator, Condition, PlaceholderRegistry};

/// Checks a document against all clauses (AND semantics)
pub(super) fn matches_all(
    conditions: &[Condition],
    placeholders: &PlaceholderRegistry,
    document: &Value,
) -> StoreResult<bool> {
    for condition in conditions {
        if !matches(condition, placeholders, document)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches(
    condition: &Condition,
    placeholders: &PlaceholderRegistry,
    document: &Value,
) -> StoreResult<bool> {
    match condition {
        Condition::Compare { name, op, value } => {
            let expected = resolve_value(placeholders, value)?;
            let Some(actual) = attribute(placeholders, name, document)? else {
                return Ok(false);
            };
            Ok(match op {
                Comparator::Eq => actual == expected,
                Comparator::Gt => compare(actual, expected) == Some(Ordering::Greater),
                Comparator::Lt => compare(actual, expected) == Some(Ordering::Less),
            })
        }
        Condition::Contains { name, value } => {
            let needle = resolve_value(placeholders, value)?;
            let Some(actual) = attribute(placeholders, name, document)? else {
                return Ok(false);
            };
            Ok(match (actual, needle) {
                (Value::Array(items), _) => items.contains(needle),
                (Value::String(haystack), Value::String(n)) => haystack.contains(n.as_str()),
                _ => false,
            })
        }
        Condition::AnyOf(inner) => {
            for condition in inner {
                if matches(condition, placeholders, document)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Looks up the attribute a name placeholder refers to; null counts as missing
pub(super) fn attribute<'a>(
    placeholders: &PlaceholderRegistry,
    name: &str,
    document: &'a Value,
) -> StoreResult<Option<&'a Value>> {
    let attribute = placeholders.resolve_name(name).ok_or_else(|| {
        StoreError::invalid(format!(
            "An expression attribute name used in the document path is not defined; attribute name: {}",
            name
        ))
    })?;
    Ok(document.get(attribute).filter(|v| !v.is_null()))
}

pub(super) fn resolve_value<'a>(
    placeholders: &'a PlaceholderRegistry,
    value: &str,
) -> StoreResult<&'a Value> {
    placeholders.resolve_value(value).ok_or_else(|| {
        StoreError::invalid(format!(
            "An expression attribute value used in expression is not defined; attribute value: {}",
            value
        ))
    })
}

/// Orders numbers numerically and strings lexicographically; other pairs
/// are incomparable.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> PlaceholderRegistry {
        PlaceholderRegistry::new()
    }

    #[test]
    fn test_equality_no_coercion() {
        let mut reg = registry();
        let name = reg.name("isUrgent");
        let yes = reg.value("yes", json!(true));
        let text = reg.value("text", json!("true"));

        let doc = json!({"isUrgent": true});
        assert!(matches_all(&[Condition::compare(&name, Comparator::Eq, &yes)], &reg, &doc).unwrap());
        assert!(!matches_all(&[Condition::compare(&name, Comparator::Eq, &text)], &reg, &doc).unwrap());
    }

    #[test]
    fn test_string_range() {
        let mut reg = registry();
        let name = reg.name("createdAt");
        let bound = reg.value("after", json!("2024-02-01T00:00:00Z"));
        let gt = Condition::compare(&name, Comparator::Gt, &bound);
        let lt = Condition::compare(&name, Comparator::Lt, &bound);

        let later = json!({"createdAt": "2024-03-01T00:00:00Z"});
        let same = json!({"createdAt": "2024-02-01T00:00:00Z"});

        assert!(matches_all(&[gt.clone()], &reg, &later).unwrap());
        assert!(!matches_all(&[lt.clone()], &reg, &later).unwrap());
        // Bounds are exclusive
        assert!(!matches_all(&[gt], &reg, &same).unwrap());
        assert!(!matches_all(&[lt], &reg, &same).unwrap());
    }

    #[test]
    fn test_numeric_range() {
        let mut reg = registry();
        let name = reg.name("score");
        let bound = reg.value("min", json!(10));
        let gt = Condition::compare(&name, Comparator::Gt, &bound);

        assert!(matches_all(&[gt.clone()], &reg, &json!({"score": 10.5})).unwrap());
        assert!(!matches_all(&[gt], &reg, &json!({"score": "11"})).unwrap());
    }

    #[test]
    fn test_contains_list_and_string() {
        let mut reg = registry();
        let tags = reg.name("tags");
        let vip = reg.value("tag0", json!("vip"));
        let cond = Condition::contains(&tags, &vip);

        assert!(matches_all(&[cond.clone()], &reg, &json!({"tags": ["ops", "vip"]})).unwrap());
        assert!(!matches_all(&[cond.clone()], &reg, &json!({"tags": ["vipers"]})).unwrap());
        assert!(matches_all(&[cond.clone()], &reg, &json!({"tags": "a-vip-b"})).unwrap());
        assert!(!matches_all(&[cond], &reg, &json!({"tags": null})).unwrap());
    }

    #[test]
    fn test_any_of() {
        let mut reg = registry();
        let tags = reg.name("tags");
        let a = reg.value("tag0", json!("a"));
        let b = reg.value("tag1", json!("b"));
        let group = Condition::AnyOf(vec![
            Condition::contains(&tags, &a),
            Condition::contains(&tags, &b),
        ]);

        assert!(matches_all(&[group.clone()], &reg, &json!({"tags": ["b"]})).unwrap());
        assert!(!matches_all(&[group], &reg, &json!({"tags": ["c"]})).unwrap());
    }

    #[test]
    fn test_missing_attribute_no_match() {
        let mut reg = registry();
        let name = reg.name("isImportant");
        let value = reg.value("v", json!(false));
        let cond = Condition::compare(&name, Comparator::Eq, &value);

        assert!(!matches_all(&[cond], &reg, &json!({"id": "a"})).unwrap());
    }

    #[test]
    fn test_undefined_placeholder_is_invalid_request() {
        let reg = registry();
        let cond = Condition::compare("#ghost", Comparator::Eq, ":ghost");
        let err = matches_all(&[cond], &reg, &json!({})).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRequest(_)));
    }
}
