//! Quire Fact Store
//!
//! Ground facts about the scene live here: relation names interned to ids,
//! tuples kept in insertion order, first-argument index for the lookups the
//! hierarchy resolver and consistency checker hammer on.
//!
//! Responsibilities:
//! - Intern relation names
//! - Assert ground facts (batch load, no retraction mid-session)
//! - Pattern queries returning lazy tuple iterators
//! - Whole-store reset between sessions

mod pattern;
mod store;

pub use pattern::Pat;
pub use store::FactStore;
