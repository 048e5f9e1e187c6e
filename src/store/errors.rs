//! Store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a store call. None of them are retried by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Request rate exceeded provisioned throughput
    #[error("{0}")]
    Throttled(String),

    /// Table or index does not exist
    #[error("Requested resource not found: {0}")]
    ResourceNotFound(String),

    /// The request itself is invalid (bad key condition, bad start key, ...)
    #[error("{0}")]
    InvalidRequest(String),

    /// Store could not serve the request
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn throttled() -> Self {
        StoreError::Throttled("Rate of requests exceeds the allowed throughput.".to_string())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        StoreError::InvalidRequest(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::throttled().to_string(),
            "Rate of requests exceeds the allowed throughput."
        );
        assert_eq!(
            StoreError::ResourceNotFound("table Missing".into()).to_string(),
            "Requested resource not found: table Missing"
        );
        assert_eq!(StoreError::invalid("bad key").to_string(), "bad key");
    }
}
