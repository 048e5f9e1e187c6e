//! CLI command implementations
//!
//! Every command loads the config, seeds an in-memory store from
//! `data_file`, and wires store, planner and handler together.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_json};
use crate::api::RequestHandler;
use crate::http_server::HttpServer;
use crate::model::{ActionRecord, ListActionsEvent};
use crate::observability::{log_event_with_fields, Event};
use crate::planner::QueryPlanner;
use crate::store::MemoryStore;

/// Main CLI entry point
///
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query { config } => query(&config),
        Command::Explain { config } => explain(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Answer one event from stdin with a response envelope on stdout
pub fn query(config_path: &Path) -> CliResult<()> {
    let handler = build_handler(&load_config(config_path)?)?;
    let body = read_request()?;
    write_json(&run_query(&handler, &body)?)
}

/// Print the store request one event from stdin would issue
pub fn explain(config_path: &Path) -> CliResult<()> {
    let handler = build_handler(&load_config(config_path)?)?;
    let body = read_request()?;
    match run_explain(&handler, &body) {
        Ok(plan) => write_json(&plan),
        Err(e) => write_error(e.code_str(), e.message()),
    }
}

/// Serve list requests over HTTP until the process stops
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let handler = Arc::new(build_handler(&config)?);

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }
    let server = HttpServer::with_config(http_config, handler);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Envelope JSON for one event body
pub fn run_query(handler: &RequestHandler, body: &str) -> CliResult<String> {
    let response = handler.handle_json(body);
    Ok(serde_json::to_string(&response)?)
}

/// Explain JSON for one event body
pub fn run_explain(handler: &RequestHandler, body: &str) -> CliResult<String> {
    let event: ListActionsEvent = serde_json::from_str(body)?;
    let plan = handler
        .planner()
        .explain(&event.arguments.input)
        .map_err(|e| CliError::request_rejected(e.to_string()))?;
    Ok(plan.to_json_pretty())
}

fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("board_index", config.planner.board_index_name.as_str()),
            ("table", config.planner.table_name.as_str()),
        ],
    );
    Ok(config)
}

/// Store, planner and handler for a loaded config
pub fn build_handler(config: &Config) -> CliResult<RequestHandler> {
    let store = MemoryStore::new(&config.planner.table_name, &config.planner.board_index_name);

    if let Some(data_file) = &config.data_file {
        let records = load_records(data_file)?;
        let count = records.len();
        for record in records {
            store
                .put(record)
                .map_err(|e| CliError::data_error(format!("Failed to load record: {}", e)))?;
        }
        log_event_with_fields(
            Event::StoreSeeded,
            &[("records", count.to_string().as_str()), ("table", store.table_name())],
        );
    }

    let planner = QueryPlanner::new(Arc::new(store), config.planner.clone());
    Ok(RequestHandler::new(Arc::new(planner)))
}

fn load_records(path: &Path) -> CliResult<Vec<ActionRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::data_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::data_error(format!("Invalid records in {}: {}", path.display(), e)))
}
