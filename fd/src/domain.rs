//! Variables and their interval domains.

use std::fmt;

/// Default symmetric interval for fresh variables, bounding search.
pub const DEFAULT_MIN: i64 = -10_000;
pub const DEFAULT_MAX: i64 = 10_000;

/// Unique identifier for a domain variable within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u32);

impl VarId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Inclusive interval bounds of one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// True if no value remains.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// True if exactly one value remains.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Number of values in the interval (0 when empty).
    pub fn size(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.max - self.min) as u64 + 1
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
