//! Error types for the finite-domain layer.

use thiserror::Error;

/// Errors from constraint posting and propagation.
///
/// `Unsatisfiable` is the expected outcome of a failed search branch; the
/// query engine recovers from it by backtracking and it never surfaces to
/// callers as anything other than "fewer solutions than requested".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A variable's domain became empty during propagation.
    #[error("constraint store is unsatisfiable")]
    Unsatisfiable,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
