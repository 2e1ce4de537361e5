//! Quire Scene Layer
//!
//! Configuration for the consistency engine: the layout-constant table and
//! a builder that validates a scene declaration and loads it into a fact
//! store in one batch.
//!
//! The store a `Scene` hands out is immutable for the query session; the
//! builder is the only writer.

mod builder;
mod constants;
mod error;

pub use builder::{DeviceBuilder, ObjectBuilder, Scene, SceneBuilder};
pub use constants::LayoutConstants;
pub use error::{SceneError, SceneResult};
