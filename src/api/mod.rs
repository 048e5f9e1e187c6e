//! Request handling for list calls
//!
//! # Flow
//!
//! 1. Deserialize the resolver event
//! 2. Plan and execute through `QueryPlanner` (one store call)
//! 3. Wrap the page or the failure in a `ListActionsResponse`

mod errors;
mod handler;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::RequestHandler;
