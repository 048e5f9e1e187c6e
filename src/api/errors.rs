//! Request-level errors
//!
//! Planner errors pass through with their codes; the handler adds codes for
//! failures that happen before or around planning.

use std::fmt;

use crate::planner::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Event body does not match the request shape
    ActionRequestInvalid,
    /// Planner or store panicked while serving the request
    ActionInternal,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::ActionRequestInvalid => "ACTION_REQUEST_INVALID",
            ApiErrorCode::ActionInternal => "ACTION_INTERNAL",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Any failure that ends in a failure envelope
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code string, own or passed through from the planner
    code: String,
    message: String,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::ActionRequestInvalid.code().to_string(),
            message: reason.into(),
        }
    }

    /// Create an internal error from a caught panic
    pub fn internal(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::ActionInternal.code().to_string(),
            message: reason.into(),
        }
    }

    /// Create from a planner error (pass-through)
    pub fn from_planner_error(err: PlannerError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Text placed in the envelope's `error` field
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        ApiError::from_planner_error(err)
    }
}

/// Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_invalid_request_error() {
        let err = ApiError::invalid_request("missing field `arguments`");
        assert_eq!(err.code(), "ACTION_REQUEST_INVALID");
        assert_eq!(err.to_string(), "ACTION_REQUEST_INVALID: missing field `arguments`");
    }

    #[test]
    fn test_planner_error_passes_through() {
        let err: ApiError = PlannerError::from(StoreError::throttled()).into();
        assert_eq!(err.code(), "ACTION_STORE_FAILED");
        assert_eq!(err.message(), "Rate of requests exceeds the allowed throughput.");
    }
}
