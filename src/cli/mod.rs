//! CLI module
//!
//! - query: answer one event from stdin
//! - explain: show the store request for one event
//! - serve: HTTP server

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_handler, explain, query, run, run_command, run_explain, run_query, serve};
pub use config::{Config, BOARD_INDEX_ENV, TABLE_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_json};
