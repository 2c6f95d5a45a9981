//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the statistics and tree rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("cannot compute {operation} of an empty value set")]
    EmptyInput { operation: &'static str },

    #[error("level not found: {0}")]
    LevelNotFound(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
