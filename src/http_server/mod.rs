//! # HTTP Server Module
//!
//! Serves the list handler over HTTP.
//!
//! # Endpoints
//!
//! - `POST /actions/list` - Resolver event in, response envelope out
//! - `GET /health` - Health check
//! - `GET /metrics` - Request counters

pub mod action_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
