//! Errors raised by domain rules, before anything touches storage.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Why a domain operation refused its input.
///
/// Lookups and uniqueness live in the store; this type only carries failures
/// that can be decided from the values at hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or out-of-range input: blank name, negative price.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Input is well-formed but the resulting state is not allowed
    /// (stock below zero).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
