//! ListFilter -> Expression

use serde_json::Value;

use super::ast::{Comparator, Condition, Expression};
use crate::model::{attributes, ListFilter};

/// Output of `ExpressionBuilder::build`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltExpression {
    pub expression: Expression,
    /// True when the by-board secondary index must serve the query
    pub index_selected: bool,
}

/// Translates a filter into key and filter clauses.
///
/// Deterministic: the same filter always yields the same clauses, in the same
/// order, with the same placeholders.
pub struct ExpressionBuilder;

impl ExpressionBuilder {
    pub fn build(filter: Option<&ListFilter>) -> BuiltExpression {
        let Some(filter) = filter else {
            return BuiltExpression::default();
        };

        let mut expr = Expression::new();
        let mut index_selected = false;

        // The board id is the only thing that may become a key clause.
        if let Some(board_id) = filter.board_id() {
            let name = expr.placeholders.name(attributes::BOARD_ID);
            let value = expr
                .placeholders
                .value(attributes::BOARD_ID, Value::from(board_id));
            expr.key_conditions
                .push(Condition::compare(name, Comparator::Eq, value));
            index_selected = true;
        }

        if let Some(status) = filter.action_list_status {
            Self::push_compare(
                &mut expr,
                attributes::STATUS,
                Comparator::Eq,
                attributes::STATUS,
                Value::from(status.as_str()),
            );
        }

        if let Some(flag) = filter.is_important {
            Self::push_compare(
                &mut expr,
                attributes::IS_IMPORTANT,
                Comparator::Eq,
                attributes::IS_IMPORTANT,
                Value::Bool(flag),
            );
        }

        if let Some(flag) = filter.is_urgent {
            Self::push_compare(
                &mut expr,
                attributes::IS_URGENT,
                Comparator::Eq,
                attributes::IS_URGENT,
                Value::Bool(flag),
            );
        }

        if let Some(bound) = filter.created_after_bound() {
            Self::push_compare(
                &mut expr,
                attributes::CREATED_AT,
                Comparator::Gt,
                "createdAfter",
                Value::from(bound),
            );
        }

        if let Some(bound) = filter.created_before_bound() {
            Self::push_compare(
                &mut expr,
                attributes::CREATED_AT,
                Comparator::Lt,
                "createdBefore",
                Value::from(bound),
            );
        }

        if let Some(tags) = filter.tags.as_deref().filter(|t| !t.is_empty()) {
            let name = expr.placeholders.name(attributes::TAGS);
            let group = tags
                .iter()
                .enumerate()
                .map(|(i, tag)| {
                    let value = expr
                        .placeholders
                        .value(&format!("tag{}", i), Value::from(tag.as_str()));
                    Condition::contains(name.clone(), value)
                })
                .collect();
            expr.filter_conditions.push(Condition::AnyOf(group));
        }

        BuiltExpression {
            expression: expr,
            index_selected,
        }
    }

    fn push_compare(
        expr: &mut Expression,
        attribute: &str,
        op: Comparator,
        value_stem: &str,
        value: Value,
    ) {
        let name = expr.placeholders.name(attribute);
        let value = expr.placeholders.value(value_stem, value);
        expr.filter_conditions
            .push(Condition::compare(name, op, value));
    }
}
