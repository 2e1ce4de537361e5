//! Error types for relation evaluation.

use quire_core::ObjectId;
use thiserror::Error;

/// Errors raised while evaluating derived relations.
///
/// All of these signal defects in the scene data or in the caller's goal,
/// not search failure; the query engine surfaces them immediately instead
/// of backtracking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A relation was invoked on an entity failing its required role.
    #[error("type guard failed: {object} is not {required}")]
    TypeGuardFailure {
        object: ObjectId,
        required: &'static str,
    },

    /// Containment recursion did not terminate.
    #[error("containment cycle detected at {0}")]
    CycleDetected(ObjectId),

    /// An object is neither at-rest nor raised, or both.
    #[error("object {0} must be exactly one of at-rest or raised")]
    InvalidState(ObjectId),

    /// A fact required by the evaluation is absent from the store.
    #[error("missing {relation} fact for {object}")]
    MissingFact {
        object: ObjectId,
        relation: &'static str,
    },

    /// An object carries more than one containment parent.
    #[error("object {0} has more than one containment parent")]
    MultipleParents(ObjectId),

    /// An object is declared both paper and ink.
    #[error("object {0} is declared both paper and ink")]
    ConflictingRoles(ObjectId),
}

/// Result type for relation evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
