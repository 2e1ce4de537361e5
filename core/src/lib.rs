//! Quire Core Types
//!
//! This crate provides the foundational types used throughout the Quire
//! system:
//! - Identity types (ObjectId, RelId)
//! - Term values stored in fact tuples
//! - Role and device-class enums
//! - Canonical relation names (the `rel` module)
//! - Axis-aligned rectangle geometry

mod geom;
mod id;
pub mod rel;
mod role;
mod term;

pub use geom::*;
pub use id::*;
pub use role::*;
pub use term::*;
