//! actionlist - filtered, cursor-paginated listing of action records
//!
//! Translates a list request (filter, sort, page) into one query against a
//! sorted key-value store and returns a page plus an opaque continuation
//! token.
//!
//! # Layers
//!
//! - `model`: wire types for records, requests and responses
//! - `cursor`: continuation key <-> opaque token
//! - `expression`: filter -> key/filter clauses with placeholders
//! - `store`: the store contract and an in-memory implementation
//! - `search`: page-local free-text refinement
//! - `planner`: one request -> one store call -> one page
//! - `api`: event in, envelope out
//! - `http_server`, `cli`: outer surfaces

pub mod api;
pub mod cli;
pub mod cursor;
pub mod expression;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod planner;
pub mod search;
pub mod store;
