//! Query planner for list requests
//!
//! # Design Principles
//!
//! - Deterministic: same input, same store request
//! - Bounded: every request carries a clamped page size
//! - One round trip: exactly one store call per request, never chained
//!
//! # Access path selection
//!
//! 1. `actionboardID` present: by-board index, key condition on the board
//! 2. Otherwise: primary table, filter clauses only
//!
//! Physical order is the sort key of the chosen path. The requested sort
//! field is recorded but does not change the order.

mod config;
mod errors;
mod explain;
mod planner;

pub use config::PlannerConfig;
pub use errors::{PlannerError, PlannerErrorCode, PlannerResult, Severity};
pub use explain::ExplainPlan;
pub use planner::QueryPlanner;
