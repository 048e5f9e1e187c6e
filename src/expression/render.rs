//! Rendering to key-value store condition syntax
//!
//! Produces `KeyConditionExpression` / `FilterExpression` strings plus the
//! placeholder maps a DynamoDB-style query request carries.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::ast::{Condition, Expression};

/// Store-native rendering of an `Expression`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedExpression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_condition: Option<String>,

    pub attribute_names: BTreeMap<String, String>,

    pub attribute_values: Map<String, Value>,
}

impl Condition {
    /// Renders one clause; OR groups are parenthesised.
    pub fn render(&self) -> String {
        match self {
            Condition::Compare { name, op, value } => {
                format!("{} {} {}", name, op.symbol(), value)
            }
            Condition::Contains { name, value } => format!("contains({}, {})", name, value),
            Condition::AnyOf(inner) => {
                let parts: Vec<String> = inner.iter().map(Condition::render).collect();
                format!("({})", parts.join(" OR "))
            }
        }
    }
}

fn join_and(conditions: &[Condition]) -> Option<String> {
    if conditions.is_empty() {
        return None;
    }
    let parts: Vec<String> = conditions.iter().map(Condition::render).collect();
    Some(parts.join(" AND "))
}

impl Expression {
    pub fn render(&self) -> RenderedExpression {
        RenderedExpression {
            key_condition: join_and(&self.key_conditions),
            filter_condition: join_and(&self.filter_conditions),
            attribute_names: self.placeholders.names().clone(),
            attribute_values: self.placeholders.values().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::ExpressionBuilder;
    use crate::model::{ActionStatus, ListFilter};
    use serde_json::json;

    #[test]
    fn test_render_empty() {
        let rendered = ExpressionBuilder::build(None).expression.render();
        assert_eq!(rendered.key_condition, None);
        assert_eq!(rendered.filter_condition, None);
        assert!(rendered.attribute_names.is_empty());
        assert!(rendered.attribute_values.is_empty());
    }

    #[test]
    fn test_render_full_filter() {
        let filter = ListFilter::new()
            .board("board-1")
            .status(ActionStatus::InProgress)
            .important(true)
            .urgent(false)
            .created_after("2024-01-01T00:00:00Z")
            .created_before("2024-06-01T00:00:00Z")
            .tags(["urgent", "vip"]);
        let rendered = ExpressionBuilder::build(Some(&filter)).expression.render();

        assert_eq!(
            rendered.key_condition.as_deref(),
            Some("#actionboardID = :actionboardID")
        );
        assert_eq!(
            rendered.filter_condition.as_deref(),
            Some(
                "#actionListStatus = :actionListStatus AND #isImportant = :isImportant \
                 AND #isUrgent = :isUrgent AND #createdAt > :createdAfter \
                 AND #createdAt < :createdBefore \
                 AND (contains(#tags, :tag0) OR contains(#tags, :tag1))"
            )
        );
        assert_eq!(rendered.attribute_names.len(), 6);
        assert_eq!(rendered.attribute_names["#createdAt"], "createdAt");
        assert_eq!(rendered.attribute_values[":isUrgent"], json!(false));
        assert_eq!(rendered.attribute_values.len(), 8);
    }

    #[test]
    fn test_render_filter_only_without_board() {
        let filter = ListFilter::new().urgent(true);
        let rendered = ExpressionBuilder::build(Some(&filter)).expression.render();

        assert_eq!(rendered.key_condition, None);
        assert_eq!(
            rendered.filter_condition.as_deref(),
            Some("#isUrgent = :isUrgent")
        );
    }

    #[test]
    fn test_single_tag_group_is_parenthesised() {
        let filter = ListFilter::new().tags(["ops"]);
        let rendered = ExpressionBuilder::build(Some(&filter)).expression.render();
        assert_eq!(
            rendered.filter_condition.as_deref(),
            Some("(contains(#tags, :tag0))")
        );
    }
}
