//! Query planner
//!
//! Turns one `ListActionsInput` into exactly one store request and shapes the
//! store's page into a `ResultPage`.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::config::PlannerConfig;
use super::errors::{PlannerError, PlannerResult};
use super::explain::ExplainPlan;
use crate::cursor::CursorCodec;
use crate::expression::ExpressionBuilder;
use crate::model::{attributes, ListActionsInput, ListFilter, ResultPage, SortDirection};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::search::SearchFilter;
use crate::store::{ActionStore, StoreQuery};

/// Plans and runs list queries against one store
pub struct QueryPlanner {
    store: Arc<dyn ActionStore>,
    config: PlannerConfig,
    metrics: Arc<MetricsRegistry>,
}

impl QueryPlanner {
    pub fn new(store: Arc<dyn ActionStore>, config: PlannerConfig) -> Self {
        Self {
            store,
            config,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Shares a metrics registry with the caller
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Builds the store request for `input` without running it.
    ///
    /// Deterministic: the same input always yields the same request.
    pub fn plan(&self, input: &ListActionsInput) -> PlannerResult<StoreQuery> {
        let filter = input.filter.as_ref();
        if let Some(filter) = filter {
            Self::validate_filter(filter)?;
        }

        let direction = Self::direction(input);
        let limit = self
            .config
            .effective_limit(input.pagination.as_ref().and_then(|p| p.limit));

        let built = ExpressionBuilder::build(filter);
        let mut query = StoreQuery::new(&self.config.table_name, built.expression, limit);
        if built.index_selected {
            query.index_name = Some(self.config.board_index_name.clone());
        }
        query.exclusive_start_key = CursorCodec::decode_for(input.next_token(), direction)?;
        query.scan_index_forward = direction.is_forward();

        Ok(query)
    }

    /// Runs one list request: one store call, then page-local search.
    pub fn execute(&self, input: &ListActionsInput) -> PlannerResult<ResultPage> {
        let query = self.plan(input)?;
        let direction = Self::direction(input);

        let rendered = serde_json::to_string(&query.render()).unwrap_or_default();
        log_event_with_fields(Event::StoreQuery, &[("query", rendered.as_str())]);
        self.metrics.increment_store_queries();

        let output = self.store.query(&query)?;

        // The token reflects the store's position, not the refined page
        let next_token = CursorCodec::encode_for(output.last_evaluated_key.as_ref(), direction);

        let items = match input.search_term() {
            Some(term) => {
                self.metrics.increment_search_refinements();
                SearchFilter::apply(output.items, term)
            }
            None => output.items,
        };

        Ok(ResultPage::new(items, next_token))
    }

    /// Describes the store request `execute` would issue
    pub fn explain(&self, input: &ListActionsInput) -> PlannerResult<ExplainPlan> {
        let query = self.plan(input)?;
        let plan = ExplainPlan::from_query(
            &query,
            Self::direction(input),
            input.sort.as_ref().map(|s| s.field.as_str()),
            input.search_term().map(SearchFilter::normalize),
        );
        log_event_with_fields(
            Event::ExplainComplete,
            &[("index_selected", if plan.index_selected { "true" } else { "false" })],
        );
        Ok(plan)
    }

    /// Requested direction, DESC when absent
    fn direction(input: &ListActionsInput) -> SortDirection {
        input
            .sort
            .as_ref()
            .and_then(|s| s.direction)
            .unwrap_or_default()
    }

    /// Bounds are passed to the store as given; only a range that is
    /// provably empty is rejected.
    fn validate_filter(filter: &ListFilter) -> PlannerResult<()> {
        let after = filter.created_after_bound().and_then(parse_timestamp);
        let before = filter.created_before_bound().and_then(parse_timestamp);

        if let (Some(after), Some(before)) = (after, before) {
            if after >= before {
                return Err(PlannerError::validation(
                    attributes::CREATED_AT,
                    "createdAfter must be earlier than createdBefore",
                ));
            }
        }
        Ok(())
    }
}

/// Reads the ISO 8601 forms an AWSDateTime may take. Offset-less values are
/// taken as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    let value = value.trim();
    let offset_form = match value.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };
    ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&offset_form, fmt).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|ts| Utc.from_utc_datetime(&ts))
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|ts| Utc.from_utc_datetime(&ts))
        })
}
