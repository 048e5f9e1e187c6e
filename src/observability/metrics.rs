//! Request counters
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the list path.
///
/// Relaxed ordering throughout; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// List requests received
    requests_total: AtomicU64,
    /// List requests answered with a failure envelope
    requests_failed: AtomicU64,
    /// Store round trips issued
    store_queries: AtomicU64,
    /// Items returned to callers, after search refinement
    items_returned: AtomicU64,
    /// Requests that applied a search term
    search_refinements: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failures(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_queries(&self) {
        self.store_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_items_returned(&self, count: u64) {
        self.items_returned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_search_refinements(&self) {
        self.search_refinements.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            store_queries: self.store_queries.load(Ordering::Relaxed),
            items_returned: self.items_returned.load(Ordering::Relaxed),
            search_refinements: self.search_refinements.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub requests_failed: u64,
    pub store_queries: u64,
    pub items_returned: u64,
    pub search_refinements: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.requests_failed, 0);
        assert_eq!(snapshot.store_queries, 0);
        assert_eq!(snapshot.items_returned, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_requests();
        registry.increment_requests();
        registry.increment_failures();
        registry.increment_store_queries();
        registry.add_items_returned(7);
        registry.increment_search_refinements();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.requests_failed, 1);
        assert_eq!(snapshot.store_queries, 1);
        assert_eq!(snapshot.items_returned, 7);
        assert_eq!(snapshot.search_refinements, 1);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.add_items_returned(3);

        let parsed: serde_json::Value = serde_json::from_str(&registry.to_json()).unwrap();
        assert_eq!(parsed["items_returned"], 3);
        assert_eq!(parsed["requests_total"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        reg.increment_requests();
                        reg.increment_store_queries();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.requests_total, 800);
        assert_eq!(snapshot.store_queries, 800);
    }
}
