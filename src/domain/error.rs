//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy and curry contracts.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cycle detected in hierarchy at '{id}' (depth {depth})")]
    CycleDetected { id: String, depth: usize },

    #[error("cannot curry a function without a fixed arity")]
    IndeterminateArity,

    #[error("curried function already produced its value")]
    Saturated,

    #[error("curried function still partial: {supplied} of {arity} arguments supplied")]
    Unsaturated { supplied: usize, arity: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
