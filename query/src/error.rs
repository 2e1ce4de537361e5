//! Error types for query execution.

use quire_relation::EvalError;
use thiserror::Error;

/// Errors raised by the query engine.
///
/// Domain wipe-out (`Unsatisfiable`) never appears here: it is recovered
/// locally by backtracking and at worst shows up as fewer solutions than
/// requested.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A relation evaluation failed; scene data or goal defect.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The search-node budget ran out before the search space was covered.
    #[error("search-node budget of {limit} exhausted")]
    BudgetExhausted { limit: usize },

    /// Direct evaluation was asked for a predicate with an unbound argument.
    #[error("argument `{0}` is unbound")]
    UnboundArgument(String),
}

/// Result type for query execution.
pub type QueryResult<T> = Result<T, QueryError>;
