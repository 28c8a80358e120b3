//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only genuine faults live here. Expected outcomes of normal use (a full
/// inventory, a missing name, an empty search) are plain return values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation received an argument outside its contract
    /// (e.g. a negative item weight).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value failed validation.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::invalid_argument("item weight cannot be negative");
        assert_eq!(
            err.to_string(),
            "invalid argument: item weight cannot be negative"
        );

        let err = DomainError::validation("capacity must be positive");
        assert_eq!(err.to_string(), "validation failed: capacity must be positive");
    }
}
