//! Configuration file
//!
//! JSON object; every field is optional:
//!
//! ```json
//! {
//!   "table_name": "ActionList",
//!   "board_index_name": "byActionBoard",
//!   "default_limit": 50,
//!   "max_limit": 100,
//!   "data_file": "actions.json",
//!   "http": { "host": "127.0.0.1", "port": 8080, "cors_origins": [] }
//! }
//! ```
//!
//! `ACTION_TABLE` and `ACTION_BOARD_INDEX` override the table and index
//! names. A relative `data_file` is resolved against the config file's
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::planner::PlannerConfig;

/// Overrides the table name
pub const TABLE_ENV: &str = "ACTION_TABLE";

/// Overrides the by-board index name
pub const BOARD_INDEX_ENV: &str = "ACTION_BOARD_INDEX";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub planner: PlannerConfig,

    /// JSON array of action records loaded into the store at startup
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file, applying environment overrides
    pub fn load(path: &Path) -> CliResult<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Like `load`, with an explicit environment lookup
    pub fn load_with_env<F>(path: &Path, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.apply_env(lookup);

        if let Some(data_file) = &config.data_file {
            if data_file.is_relative() {
                if let Some(dir) = path.parent() {
                    config.data_file = Some(dir.join(data_file));
                }
            }
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup(TABLE_ENV).filter(|v| !v.is_empty()) {
            self.planner.table_name = table;
        }
        if let Some(index) = lookup(BOARD_INDEX_ENV).filter(|v| !v.is_empty()) {
            self.planner.board_index_name = index;
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.planner.table_name.trim().is_empty() {
            return Err(CliError::config_error("table_name must not be empty"));
        }

        if self.planner.board_index_name.trim().is_empty() {
            return Err(CliError::config_error("board_index_name must not be empty"));
        }

        if self.planner.max_limit == 0 {
            return Err(CliError::config_error("max_limit must be > 0"));
        }

        if self.planner.default_limit == 0 {
            return Err(CliError::config_error("default_limit must be > 0"));
        }

        if self.planner.default_limit > self.planner.max_limit {
            return Err(CliError::config_error(format!(
                "default_limit ({}) must not exceed max_limit ({})",
                self.planner.default_limit, self.planner.max_limit
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join("actionlist.json");
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_config_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({}));

        let config = Config::load_with_env(&path, no_env).unwrap();
        assert_eq!(config.planner, PlannerConfig::default());
        assert_eq!(config.data_file, None);
        assert_eq!(config.http, HttpServerConfig::default());
    }

    #[test]
    fn test_env_overrides_names() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"table_name": "FromFile"}));

        let config = Config::load_with_env(&path, |key| match key {
            TABLE_ENV => Some("ActionList-prod".to_string()),
            BOARD_INDEX_ENV => Some(String::new()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.planner.table_name, "ActionList-prod");
        // Empty values do not override
        assert_eq!(config.planner.board_index_name, "byActionBoard");
    }

    #[test]
    fn test_relative_data_file_resolved() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"data_file": "seed.json"}));

        let config = Config::load_with_env(&path, no_env).unwrap();
        assert_eq!(config.data_file, Some(dir.path().join("seed.json")));
    }

    #[test]
    fn test_validates_limits() {
        let dir = TempDir::new().unwrap();

        let path = write_config(&dir, json!({"max_limit": 0}));
        assert!(Config::load_with_env(&path, no_env).is_err());

        let path = write_config(&dir, json!({"default_limit": 200, "max_limit": 100}));
        let err = Config::load_with_env(&path, no_env).unwrap_err();
        assert!(err.message().contains("default_limit"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_with_env(&dir.path().join("nope.json"), no_env).unwrap_err();
        assert!(err.message().starts_with("Failed to read config"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actionlist.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_with_env(&path, no_env).unwrap_err();
        assert!(err.message().starts_with("Invalid config JSON"));
    }
}
