//! Observability for the list path
//!
//! - Structured logging (JSON lines on stderr)
//! - Atomic request counters
//! - Typed lifecycle and request events
//!
//! Observability is read-only: nothing here changes a response.
//!
//! ```ignore
//! use actionlist::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::ListActionsComplete, &[("items", "2")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_requests();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_LEVEL_ENV};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Severity an event is logged at
fn severity_for(event: Event) -> Severity {
    match event {
        Event::StoreQuery => Severity::Trace,
        e if e.is_failure() => Severity::Error,
        _ => Severity::Info,
    }
}

/// Log an event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
