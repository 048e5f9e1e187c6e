//! Store request/response types

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::expression::Expression;
use crate::model::ActionRecord;

/// Store-native continuation key: key attribute name -> value.
///
/// Produced by the store; the core only encodes and decodes it.
pub type ContinuationKey = Map<String, Value>;

/// One complete query request
#[derive(Debug, Clone, PartialEq)]
pub struct StoreQuery {
    pub table_name: String,
    /// Secondary index to query, `None` for the primary table
    pub index_name: Option<String>,
    pub expression: Expression,
    /// Maximum number of items in the page
    pub limit: u32,
    pub exclusive_start_key: Option<ContinuationKey>,
    /// `true` walks the sort key ascending, `false` descending
    pub scan_index_forward: bool,
}

impl StoreQuery {
    pub fn new(table_name: impl Into<String>, expression: Expression, limit: u32) -> Self {
        Self {
            table_name: table_name.into(),
            index_name: None,
            expression,
            limit,
            exclusive_start_key: None,
            scan_index_forward: false,
        }
    }

    pub fn render(&self) -> RenderedQuery {
        let rendered = self.expression.render();
        RenderedQuery {
            table_name: self.table_name.clone(),
            index_name: self.index_name.clone(),
            key_condition_expression: rendered.key_condition,
            filter_expression: rendered.filter_condition,
            expression_attribute_names: rendered.attribute_names,
            expression_attribute_values: rendered.attribute_values,
            limit: self.limit,
            exclusive_start_key: self.exclusive_start_key.clone(),
            scan_index_forward: self.scan_index_forward,
        }
    }
}

/// Wire-shaped view of a `StoreQuery`, as a DynamoDB Query request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderedQuery {
    pub table_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_condition_expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub expression_attribute_names: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Map::is_empty")]
    pub expression_attribute_values: Map<String, Value>,

    pub limit: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_key: Option<ContinuationKey>,

    pub scan_index_forward: bool,
}

/// One page returned by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreOutput {
    pub items: Vec<ActionRecord>,
    /// Present when the store stopped before exhausting the access path
    pub last_evaluated_key: Option<ContinuationKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ExpressionBuilder;
    use crate::model::ListFilter;

    #[test]
    fn test_rendered_query_wire_names() {
        let built = ExpressionBuilder::build(Some(&ListFilter::new().board("b1")));
        let mut query = StoreQuery::new("ActionList", built.expression, 25);
        query.index_name = Some("byActionBoard".to_string());

        let json = serde_json::to_value(query.render()).unwrap();
        assert_eq!(json["TableName"], "ActionList");
        assert_eq!(json["IndexName"], "byActionBoard");
        assert_eq!(json["KeyConditionExpression"], "#actionboardID = :actionboardID");
        assert_eq!(json["ExpressionAttributeValues"][":actionboardID"], "b1");
        assert_eq!(json["Limit"], 25);
        assert_eq!(json["ScanIndexForward"], false);
        assert!(json.get("FilterExpression").is_none());
        assert!(json.get("ExclusiveStartKey").is_none());
    }

    #[test]
    fn test_rendered_query_omits_empty_maps() {
        let query = StoreQuery::new("ActionList", Expression::new(), 50);
        let json = serde_json::to_value(query.render()).unwrap();
        assert!(json.get("ExpressionAttributeNames").is_none());
        assert!(json.get("ExpressionAttributeValues").is_none());
        assert!(json.get("IndexName").is_none());
    }
}
