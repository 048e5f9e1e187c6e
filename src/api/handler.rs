//! List request handler
//!
//! Entry point for resolver events. Every outcome becomes an envelope:
//! deserialization errors, planner errors and panics inside the planner or
//! store all end as `success: false`. Nothing is retried.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use super::errors::{ApiError, ApiResult};
use crate::model::{ListActionsEvent, ListActionsInput, ListActionsResponse, ResultPage};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::planner::QueryPlanner;

/// Field name logged when the event carries no `info`
const DEFAULT_FIELD_NAME: &str = "listActions";

pub struct RequestHandler {
    planner: Arc<QueryPlanner>,
    metrics: Arc<MetricsRegistry>,
}

impl RequestHandler {
    /// Shares the planner's metrics registry
    pub fn new(planner: Arc<QueryPlanner>) -> Self {
        let metrics = Arc::clone(planner.metrics());
        Self { planner, metrics }
    }

    pub fn planner(&self) -> &Arc<QueryPlanner> {
        &self.planner
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Handles a resolver event `{ "arguments": { "input": ... } }`
    pub fn handle(&self, event: &Value) -> ListActionsResponse {
        let request_id = Uuid::new_v4().to_string();
        self.metrics.increment_requests();

        let result = serde_json::from_value::<ListActionsEvent>(event.clone())
            .map_err(|e| ApiError::invalid_request(format!("Invalid event: {}", e)))
            .and_then(|event| {
                let field = event
                    .info
                    .as_ref()
                    .map(|i| i.field_name.as_str())
                    .unwrap_or(DEFAULT_FIELD_NAME)
                    .to_string();
                self.run(&request_id, &field, &event.arguments.input)
            });

        self.respond(&request_id, result)
    }

    /// Handles an already-typed input
    pub fn handle_input(&self, input: &ListActionsInput) -> ListActionsResponse {
        let request_id = Uuid::new_v4().to_string();
        self.metrics.increment_requests();
        let result = self.run(&request_id, DEFAULT_FIELD_NAME, input);
        self.respond(&request_id, result)
    }

    /// Handles a raw JSON event body
    pub fn handle_json(&self, body: &str) -> ListActionsResponse {
        match serde_json::from_str::<Value>(body) {
            Ok(event) => self.handle(&event),
            Err(e) => {
                let request_id = Uuid::new_v4().to_string();
                self.metrics.increment_requests();
                let err = ApiError::invalid_request(format!("Invalid event: {}", e));
                self.respond(&request_id, Err(err))
            }
        }
    }

    fn run(&self, request_id: &str, field: &str, input: &ListActionsInput) -> ApiResult<ResultPage> {
        let limit = input
            .pagination
            .as_ref()
            .and_then(|p| p.limit)
            .map(|l| l.to_string())
            .unwrap_or_default();
        log_event_with_fields(
            Event::ListActionsRequest,
            &[
                ("field", field),
                ("has_token", bool_str(input.next_token().is_some())),
                ("limit", limit.as_str()),
                ("request_id", request_id),
            ],
        );

        match panic::catch_unwind(AssertUnwindSafe(|| self.planner.execute(input))) {
            Ok(result) => result.map_err(ApiError::from),
            Err(payload) => Err(ApiError::internal(format!(
                "Internal error: {}",
                panic_message(payload.as_ref())
            ))),
        }
    }

    fn respond(&self, request_id: &str, result: ApiResult<ResultPage>) -> ListActionsResponse {
        match result {
            Ok(page) => {
                self.metrics.add_items_returned(page.items.len() as u64);
                log_event_with_fields(
                    Event::ListActionsComplete,
                    &[
                        ("has_next_token", bool_str(page.next_token.is_some())),
                        ("items", page.total_count.to_string().as_str()),
                        ("request_id", request_id),
                    ],
                );
                ListActionsResponse::success(page)
            }
            Err(err) => {
                self.metrics.increment_failures();
                log_event_with_fields(
                    Event::ListActionsFailed,
                    &[
                        ("code", err.code()),
                        ("error", err.message()),
                        ("request_id", request_id),
                    ],
                );
                ListActionsResponse::failure(err.message())
            }
        }
    }
}

fn bool_str(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic while listing actions".to_string()
    }
}
