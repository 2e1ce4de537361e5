//! Quire Finite-Domain Layer
//!
//! Integer variables with interval bounds and arithmetic/comparison
//! constraints. Posting a constraint propagates bound tightening to a
//! fixpoint immediately and reports `Unsatisfiable` the moment any domain
//! empties. The store is plain data and `Clone`: search branches each own
//! an independent copy, so failure in one branch cannot corrupt another.

mod constraint;
mod domain;
mod error;
mod store;

pub use constraint::Constraint;
pub use domain::{Bounds, VarId, DEFAULT_MAX, DEFAULT_MIN};
pub use error::{DomainError, DomainResult};
pub use store::DomainStore;
