//! Planner configuration

use serde::{Deserialize, Serialize};

fn default_table_name() -> String {
    "ActionList".to_string()
}

fn default_board_index_name() -> String {
    "byActionBoard".to_string()
}

fn default_limit() -> u32 {
    50
}

fn default_max_limit() -> u32 {
    100
}

/// Table, index and page-size settings for `QueryPlanner`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Secondary index partitioned by `actionboardID`, sorted by `createdAt`
    #[serde(default = "default_board_index_name")]
    pub board_index_name: String,

    /// Page size when the request has none
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Upper clamp for requested page sizes
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            board_index_name: default_board_index_name(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl PlannerConfig {
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Effective page size: the requested limit (or the default) clamped to
    /// `1..=max_limit`.
    pub fn effective_limit(&self, requested: Option<i64>) -> u32 {
        let max = self.max_limit.max(1);
        let requested = requested.unwrap_or(i64::from(self.default_limit));
        requested.clamp(1, i64::from(max)) as u32
    }
}
