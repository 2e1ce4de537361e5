//! Constraints over domain variables.

use crate::VarId;
use std::fmt;

/// An arithmetic or comparison constraint between variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// a == b
    Eq(VarId, VarId),
    /// a != b
    Ne(VarId, VarId),
    /// a < b
    Lt(VarId, VarId),
    /// a <= b
    Le(VarId, VarId),
    /// a > b
    Gt(VarId, VarId),
    /// a >= b
    Ge(VarId, VarId),
    /// a + b == c
    Sum(VarId, VarId, VarId),
    /// a * b == c
    Product(VarId, VarId, VarId),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Eq(a, b) => write!(f, "{} == {}", a, b),
            Constraint::Ne(a, b) => write!(f, "{} != {}", a, b),
            Constraint::Lt(a, b) => write!(f, "{} < {}", a, b),
            Constraint::Le(a, b) => write!(f, "{} <= {}", a, b),
            Constraint::Gt(a, b) => write!(f, "{} > {}", a, b),
            Constraint::Ge(a, b) => write!(f, "{} >= {}", a, b),
            Constraint::Sum(a, b, c) => write!(f, "{} + {} == {}", a, b, c),
            Constraint::Product(a, b, c) => write!(f, "{} * {} == {}", a, b, c),
        }
    }
}
