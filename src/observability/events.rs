//! Observable events
//!
//! Events are explicit and typed; the logger only ever sees their names.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Seed records loaded into the store
    StoreSeeded,
    /// HTTP server listening
    Serving,

    // Requests
    /// List request received
    ListActionsRequest,
    /// Store request issued
    StoreQuery,
    /// List request answered
    ListActionsComplete,
    /// List request failed
    ListActionsFailed,
    /// Explain produced
    ExplainComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "ACTIONLIST_SERVING",
            Event::ListActionsRequest => "LIST_ACTIONS_REQUEST",
            Event::StoreQuery => "STORE_QUERY",
            Event::ListActionsComplete => "LIST_ACTIONS_COMPLETE",
            Event::ListActionsFailed => "LIST_ACTIONS_FAILED",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
        }
    }

    /// Returns true if the event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ListActionsFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
