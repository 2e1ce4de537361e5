//! Quire Relation Layer
//!
//! Derived relations over the fact store.
//!
//! Responsibilities:
//! - Role/type guards ahead of every positional check
//! - Geometric relations: planes, stacking, overlap, containment, seams
//! - Viewport relations against device screens
//! - Hierarchy resolution: absolute position and elevation over the
//!   containment forest
//! - The mutual-exclusion ("Pauli") consistency check

mod consistency;
mod error;
mod eval;
mod hierarchy;

pub use consistency::{Checker, Conflict};
pub use error::{EvalError, EvalResult};
pub use eval::Evaluator;
