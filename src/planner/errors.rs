//! Planner error types
//!
//! Error codes:
//! - ACTION_QUERY_INVALID (REJECT)
//! - ACTION_CURSOR_MALFORMED (REJECT)
//! - ACTION_STORE_FAILED (ERROR)

use std::fmt;

use crate::cursor::CursorError;
use crate::store::StoreError;

/// Severity levels for planner errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
    /// Backend failure while serving a valid request
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerErrorCode {
    /// Filter values that cannot be queried (bad timestamps, inverted range)
    ActionQueryInvalid,
    /// Continuation token that does not decode
    ActionCursorMalformed,
    /// Store call failed
    ActionStoreFailed,
}

impl PlannerErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            PlannerErrorCode::ActionQueryInvalid => "ACTION_QUERY_INVALID",
            PlannerErrorCode::ActionCursorMalformed => "ACTION_CURSOR_MALFORMED",
            PlannerErrorCode::ActionStoreFailed => "ACTION_STORE_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PlannerErrorCode::ActionStoreFailed => Severity::Error,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for PlannerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Planner error with code and caller-facing message
#[derive(Debug, Clone)]
pub struct PlannerError {
    code: PlannerErrorCode,
    message: String,
    /// Input field at fault, if any
    field: Option<String>,
    /// Underlying store failure, kept for callers that branch on it
    store_error: Option<StoreError>,
}

impl PlannerError {
    /// Create a validation error for one input field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: PlannerErrorCode::ActionQueryInvalid,
            message: reason.into(),
            field: Some(field.into()),
            store_error: None,
        }
    }

    /// Create a malformed cursor error
    pub fn malformed_cursor(reason: impl Into<String>) -> Self {
        Self {
            code: PlannerErrorCode::ActionCursorMalformed,
            message: reason.into(),
            field: Some("nextToken".to_string()),
            store_error: None,
        }
    }

    /// Wrap a store failure
    pub fn store_failed(err: StoreError) -> Self {
        Self {
            code: PlannerErrorCode::ActionStoreFailed,
            message: err.to_string(),
            field: None,
            store_error: Some(err),
        }
    }

    pub fn code(&self) -> PlannerErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Message suitable for the response envelope's `error` field
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn store_error(&self) -> Option<&StoreError> {
        self.store_error.as_ref()
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.store_error
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<CursorError> for PlannerError {
    fn from(err: CursorError) -> Self {
        PlannerError::malformed_cursor(err.to_string())
    }
}

impl From<StoreError> for PlannerError {
    fn from(err: StoreError) -> Self {
        PlannerError::store_failed(err)
    }
}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
