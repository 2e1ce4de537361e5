//! Term values for fact tuples.
//!
//! A fact is a relation name applied to a tuple of terms. Terms are either
//! object references, integers (positions, sizes, elevations), or symbolic
//! names (shape names, colour names, device classes).

use crate::ObjectId;
use std::fmt;

/// A single position in a fact tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Reference to a material object or device.
    Obj(ObjectId),
    /// Integer value in design units.
    Int(i64),
    /// Symbolic name (shape, colour, device class, ...).
    Name(String),
}

impl Term {
    /// Returns true if this is an object reference.
    pub fn is_obj(&self) -> bool {
        matches!(self, Term::Obj(_))
    }

    /// Returns true if this is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Term::Int(_))
    }

    /// Returns true if this is a symbolic name.
    pub fn is_name(&self) -> bool {
        matches!(self, Term::Name(_))
    }

    /// Get as an object id if this is an object reference.
    pub fn as_obj(&self) -> Option<ObjectId> {
        match self {
            Term::Obj(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as an integer if this is an Int term.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Term::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as a string slice if this is a Name term.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Term::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Obj(id) => write!(f, "{}", id),
            Term::Int(i) => write!(f, "{}", i),
            Term::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<ObjectId> for Term {
    fn from(id: ObjectId) -> Self {
        Term::Obj(id)
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Int(i)
    }
}

impl From<i32> for Term {
    fn from(i: i32) -> Self {
        Term::Int(i as i64)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Name(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Name(s)
    }
}
