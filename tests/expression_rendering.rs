//! Store request rendering tests
//!
//! Check the DynamoDB-shaped request the planner builds for typical filters.

use std::sync::Arc;

use serde_json::{json, Value};

use actionlist::cursor::CursorCodec;
use actionlist::model::{ActionStatus, ListActionsInput, ListFilter, PageSpec, SortField, SortSpec};
use actionlist::planner::{PlannerConfig, QueryPlanner};
use actionlist::store::MemoryStore;

fn planner() -> QueryPlanner {
    QueryPlanner::new(Arc::new(MemoryStore::default()), PlannerConfig::default())
}

fn rendered(input: &ListActionsInput) -> Value {
    let query = planner().plan(input).expect("plan");
    serde_json::to_value(query.render()).expect("render")
}

// =============================================================================
// Key and filter conditions
// =============================================================================

#[test]
fn test_full_filter_rendering() {
    let filter = ListFilter::new()
        .board("b1")
        .status(ActionStatus::InProgress)
        .important(true)
        .urgent(false)
        .created_after("2024-01-01T00:00:00Z")
        .created_before("2024-12-31T00:00:00Z")
        .tags(["ops", "vip"]);
    let json = rendered(&ListActionsInput::new().with_filter(filter));

    assert_eq!(json["IndexName"], "byActionBoard");
    assert_eq!(json["KeyConditionExpression"], "#actionboardID = :actionboardID");
    assert_eq!(
        json["FilterExpression"],
        "#actionListStatus = :actionListStatus AND #isImportant = :isImportant AND \
         #isUrgent = :isUrgent AND #createdAt > :createdAfter AND #createdAt < :createdBefore AND \
         (contains(#tags, :tag0) OR contains(#tags, :tag1))"
    );
    assert_eq!(
        json["ExpressionAttributeNames"],
        json!({
            "#actionListStatus": "actionListStatus",
            "#actionboardID": "actionboardID",
            "#createdAt": "createdAt",
            "#isImportant": "isImportant",
            "#isUrgent": "isUrgent",
            "#tags": "tags"
        })
    );
    assert_eq!(json["ExpressionAttributeValues"][":actionListStatus"], "InProgress");
    assert_eq!(json["ExpressionAttributeValues"][":isUrgent"], false);
    assert_eq!(json["ExpressionAttributeValues"][":tag1"], "vip");
}

#[test]
fn test_no_filter_renders_bare_table_request() {
    let json = rendered(&ListActionsInput::new());

    assert_eq!(json["TableName"], "ActionList");
    assert_eq!(json["Limit"], 50);
    assert_eq!(json["ScanIndexForward"], false);
    assert!(json.get("IndexName").is_none());
    assert!(json.get("KeyConditionExpression").is_none());
    assert!(json.get("FilterExpression").is_none());
    assert!(json.get("ExpressionAttributeNames").is_none());
}

#[test]
fn test_filter_without_board_has_no_key_condition() {
    let json = rendered(&ListActionsInput::new().with_filter(ListFilter::new().tags(["x"])));

    assert!(json.get("IndexName").is_none());
    assert!(json.get("KeyConditionExpression").is_none());
    assert_eq!(json["FilterExpression"], "(contains(#tags, :tag0))");
}

#[test]
fn test_search_term_never_reaches_store() {
    let json = rendered(&ListActionsInput::new().with_filter(ListFilter::new().search("budget")));
    assert!(json.get("FilterExpression").is_none());
}

// =============================================================================
// Paging fields
// =============================================================================

#[test]
fn test_token_becomes_exclusive_start_key() {
    let key = json!({"actionboardID": "b1", "createdAt": "2024-01-02T00:00:00Z", "id": "a2"});
    let token = CursorCodec::encode_for(key.as_object(), Default::default()).expect("token");
    let input = ListActionsInput::new()
        .with_filter(ListFilter::new().board("b1"))
        .with_pagination(PageSpec::limit(500).with_token(token));

    let json = rendered(&input);
    assert_eq!(json["ExclusiveStartKey"], key);
    assert_eq!(json["Limit"], 100);
}

#[test]
fn test_ascending_sort_scans_forward() {
    let input = ListActionsInput::new().with_sort(SortSpec::asc(SortField::CreatedAt));
    assert_eq!(rendered(&input)["ScanIndexForward"], true);
}
