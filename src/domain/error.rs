//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
