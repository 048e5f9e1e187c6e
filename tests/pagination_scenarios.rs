//! End-to-end pagination tests
//!
//! Drive the handler over a seeded in-memory store and follow tokens page by
//! page, checking order, termination and token binding.

use std::collections::HashSet;
use std::sync::Arc;

use actionlist::api::RequestHandler;
use actionlist::model::{
    ActionRecord, ActionStatus, ListActionsInput, ListFilter, PageSpec, ResultPage, SortField,
    SortSpec,
};
use actionlist::planner::{PlannerConfig, QueryPlanner};
use actionlist::store::MemoryStore;

fn board_one_fixture() -> Vec<ActionRecord> {
    let mut records: Vec<ActionRecord> = (1..=5)
        .map(|i| {
            ActionRecord::new(
                format!("u{}", i),
                format!("Urgent task {}", i),
                "board-1",
                format!("2024-01-0{}T09:00:00Z", i),
            )
            .urgent(true)
        })
        .collect();

    records.push(
        ActionRecord::new("calm", "Calm task", "board-1", "2024-01-03T12:00:00Z").urgent(false),
    );
    records.push(
        ActionRecord::new("other", "Other board", "board-2", "2024-01-04T12:00:00Z")
            .urgent(true)
            .with_status(ActionStatus::Completed),
    );
    records
}

fn handler() -> RequestHandler {
    let store = MemoryStore::with_records("ActionList", "byActionBoard", board_one_fixture())
        .expect("seed store");
    let planner = QueryPlanner::new(Arc::new(store), PlannerConfig::default());
    RequestHandler::new(Arc::new(planner))
}

fn urgent_on_board_one(limit: i64, token: Option<String>, sort: Option<SortSpec>) -> ListActionsInput {
    let mut page = PageSpec::limit(limit);
    page.next_token = token;
    let mut input = ListActionsInput::new()
        .with_filter(ListFilter::new().board("board-1").urgent(true))
        .with_pagination(page);
    input.sort = sort;
    input
}

fn page(handler: &RequestHandler, input: &ListActionsInput) -> ResultPage {
    let response = handler.handle_input(input);
    assert!(response.success, "unexpected failure: {:?}", response.error);
    response.data.expect("data on success")
}

fn ids(page: &ResultPage) -> Vec<&str> {
    page.items.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================================
// Page walking
// =============================================================================

#[test]
fn test_two_pages_then_exhaustion() {
    let handler = handler();

    let first = page(&handler, &urgent_on_board_one(2, None, None));
    assert_eq!(ids(&first), vec!["u5", "u4"]);
    assert_eq!(first.total_count, 2);
    let token = first.next_token.clone().expect("first page has a token");

    let second = page(&handler, &urgent_on_board_one(2, Some(token), None));
    assert_eq!(ids(&second), vec!["u3", "u2"]);
    let token = second.next_token.clone().expect("second page has a token");

    let third = page(&handler, &urgent_on_board_one(2, Some(token), None));
    assert_eq!(ids(&third), vec!["u1"]);
    assert!(third.next_token.is_none());
}

#[test]
fn test_pages_are_disjoint_and_complete() {
    let handler = handler();
    let mut seen = HashSet::new();
    let mut token = None;

    loop {
        let current = page(&handler, &urgent_on_board_one(2, token.take(), None));
        for item in &current.items {
            assert!(seen.insert(item.id.clone()), "duplicate item {}", item.id);
            assert_eq!(item.actionboard_id, "board-1");
            assert_eq!(item.is_urgent, Some(true));
        }
        match current.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    assert_eq!(seen.len(), 5);
}

#[test]
fn test_ascending_walk() {
    let handler = handler();
    let asc = Some(SortSpec::asc(SortField::CreatedAt));

    let first = page(&handler, &urgent_on_board_one(3, None, asc.clone()));
    assert_eq!(ids(&first), vec!["u1", "u2", "u3"]);

    let second = page(&handler, &urgent_on_board_one(3, first.next_token, asc));
    assert_eq!(ids(&second), vec!["u4", "u5"]);
    assert!(second.next_token.is_none());
}

#[test]
fn test_same_request_same_page() {
    let handler = handler();
    let input = urgent_on_board_one(2, None, None);

    let a = page(&handler, &input);
    let b = page(&handler, &input);
    assert_eq!(a, b);
}

// =============================================================================
// Token binding
// =============================================================================

#[test]
fn test_token_replayed_with_other_direction_fails() {
    let handler = handler();
    let first = page(&handler, &urgent_on_board_one(2, None, None));

    let replay = urgent_on_board_one(
        2,
        first.next_token,
        Some(SortSpec::asc(SortField::CreatedAt)),
    );
    let response = handler.handle_input(&replay);

    assert!(!response.success);
    assert!(response
        .error
        .expect("error text")
        .starts_with("Invalid nextToken format"));
}

#[test]
fn test_garbage_token_fails() {
    let handler = handler();
    let response = handler.handle_input(&urgent_on_board_one(2, Some("not-base64-json".into()), None));

    assert!(!response.success);
    assert!(response.data.is_none());
}

// =============================================================================
// Keyless listing
// =============================================================================

#[test]
fn test_listing_without_board_spans_all_boards() {
    let handler = handler();
    let input = ListActionsInput::new()
        .with_filter(ListFilter::new().urgent(true))
        .with_pagination(PageSpec::limit(10));

    let result = page(&handler, &input);
    assert_eq!(result.total_count, 6);
    assert!(result.items.iter().any(|r| r.id == "other"));
    assert!(result.items.iter().all(|r| r.id != "calm"));
}

#[test]
fn test_search_refines_only_current_page() {
    let handler = handler();
    let input = ListActionsInput::new()
        .with_filter(ListFilter::new().board("board-1").search("task 4"))
        .with_pagination(PageSpec::limit(2));

    // Newest two on board-1 are u5 and u4; only u4 matches
    let result = page(&handler, &input);
    assert_eq!(ids(&result), vec!["u4"]);
    assert_eq!(result.total_count, 1);
    assert!(result.next_token.is_some());
}
