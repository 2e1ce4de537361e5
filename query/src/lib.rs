//! Quire Query Engine
//!
//! Backtracking search over goal trees built from the derived relations.
//!
//! Responsibilities:
//! - Goal representation: conjunction/disjunction trees over predicates
//! - Depth-first chronological backtracking with branch-isolated domains
//! - Deterministic enumeration and solution order
//! - Mutual-exclusion screening of emitted solutions
//! - A search-node budget guaranteeing termination

mod engine;
mod error;
mod goal;
mod solution;

pub use engine::{SolveOptions, Solver};
pub use error::{QueryError, QueryResult};
pub use goal::{Arg, Goal, NumArg, Pred};
pub use solution::Solution;
