//! Cursor decoding errors

use thiserror::Error;

use crate::model::SortDirection;

/// Result type for cursor operations
pub type CursorResult<T> = Result<T, CursorError>;

/// A continuation token that cannot be turned back into a key.
///
/// Every variant is a malformed cursor from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Not base64, not JSON, not a mapping, or an unknown envelope
    #[error("Invalid nextToken format: {0}")]
    Malformed(String),

    /// Token issued for one scan direction, replayed with the other
    #[error("Invalid nextToken format: token was issued for {issued} order but the request asks for {requested}")]
    DirectionMismatch {
        issued: SortDirection,
        requested: SortDirection,
    },
}

impl CursorError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CursorError::Malformed(reason.into())
    }
}
