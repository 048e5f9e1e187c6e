//! CLI argument definitions using clap
//!
//! Commands:
//! - actionlist query --config <path>
//! - actionlist explain --config <path>
//! - actionlist serve --config <path> [--port <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// actionlist - filtered, paginated listing of action records
#[derive(Parser, Debug)]
#[command(name = "actionlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one list event from stdin and print the response envelope
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./actionlist.json")]
        config: PathBuf,
    },

    /// Read one list event from stdin and print the store request it plans
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./actionlist.json")]
        config: PathBuf,
    },

    /// Serve list requests over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./actionlist.json")]
        config: PathBuf,

        /// Port to listen on, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
