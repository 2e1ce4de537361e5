//! Shared fixtures for the integration tests.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use quire_core::{rel, DeviceClass, ObjectId, Rect, Role, Term};
    pub use quire_facts::{FactStore, Pat};
    pub use quire_fd::{Constraint, DomainStore};
    pub use quire_query::{Arg, Goal, NumArg, Pred, QueryError, SolveOptions, Solver};
    pub use quire_relation::{Checker, Conflict, EvalError, Evaluator};
    pub use quire_scene::{LayoutConstants, Scene, SceneBuilder, SceneError};
}
