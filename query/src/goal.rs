//! Goal trees: conjunctions and disjunctions over relation predicates.

use quire_core::ObjectId;

/// An entity argument: a concrete object or a named query variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Obj(ObjectId),
    Var(String),
}

impl Arg {
    /// Named query variable.
    pub fn var(name: impl Into<String>) -> Self {
        Arg::Var(name.into())
    }
}

impl From<ObjectId> for Arg {
    fn from(obj: ObjectId) -> Self {
        Arg::Obj(obj)
    }
}

impl From<&str> for Arg {
    fn from(name: &str) -> Self {
        Arg::Var(name.to_string())
    }
}

/// A numeric argument: a constant or a named domain variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumArg {
    Const(i64),
    Var(String),
}

impl NumArg {
    /// Named domain variable.
    pub fn var(name: impl Into<String>) -> Self {
        NumArg::Var(name.into())
    }
}

impl From<i64> for NumArg {
    fn from(value: i64) -> Self {
        NumArg::Const(value)
    }
}

impl From<&str> for NumArg {
    fn from(name: &str) -> Self {
        NumArg::Var(name.to_string())
    }
}

/// Candidate pool for enumerating an unbound entity argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Papers and inks, papers first, insertion order.
    Materials,
    /// Papers only.
    Papers,
    /// Declared devices.
    Devices,
}

/// A single relation predicate with (possibly variable) arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pred {
    // Role predicates
    Paper(Arg),
    Ink(Arg),

    // Geometric relations
    SamePlane(Arg, Arg),
    DifferentPlane(Arg, Arg),
    Over(Arg, Arg),
    Under(Arg, Arg),
    Intersect(Arg, Arg),
    Inside(Arg, Arg),
    Contains(Arg, Arg),
    Seam(Arg, Arg),
    Pauli(Arg, Arg),

    // Viewport relations; second argument is a device
    Visible(Arg, Arg),
    OnScreen(Arg, Arg),

    // Attribute bindings onto domain variables
    Position(Arg, NumArg, NumArg, NumArg),
    AbsolutePosition(Arg, NumArg, NumArg, NumArg),
    Size(Arg, NumArg, NumArg),
    Elevation(Arg, NumArg),

    // Pure numeric constraints
    Eq(NumArg, NumArg),
    Ne(NumArg, NumArg),
    Lt(NumArg, NumArg),
    Le(NumArg, NumArg),
    Gt(NumArg, NumArg),
    Ge(NumArg, NumArg),
    /// a + b == c
    Sum(NumArg, NumArg, NumArg),
    /// a * b == c
    Product(NumArg, NumArg, NumArg),
}

impl Pred {
    /// Entity arguments with the pool an unbound variable enumerates.
    pub(crate) fn entity_args(&self) -> Vec<(&Arg, Pool)> {
        match self {
            Pred::Paper(a) | Pred::Seam(a, _) => {
                let mut args = vec![(a, Pool::Papers)];
                if let Pred::Seam(_, b) = self {
                    args.push((b, Pool::Papers));
                }
                args
            }
            Pred::Ink(a) => vec![(a, Pool::Materials)],
            Pred::SamePlane(a, b)
            | Pred::DifferentPlane(a, b)
            | Pred::Over(a, b)
            | Pred::Under(a, b)
            | Pred::Intersect(a, b)
            | Pred::Inside(a, b)
            | Pred::Contains(a, b)
            | Pred::Pauli(a, b) => {
                vec![(a, Pool::Materials), (b, Pool::Materials)]
            }
            Pred::Visible(obj, dev) | Pred::OnScreen(obj, dev) => {
                vec![(obj, Pool::Materials), (dev, Pool::Devices)]
            }
            Pred::Position(a, ..)
            | Pred::AbsolutePosition(a, ..)
            | Pred::Size(a, ..)
            | Pred::Elevation(a, _) => vec![(a, Pool::Materials)],
            Pred::Eq(..)
            | Pred::Ne(..)
            | Pred::Lt(..)
            | Pred::Le(..)
            | Pred::Gt(..)
            | Pred::Ge(..)
            | Pred::Sum(..)
            | Pred::Product(..) => Vec::new(),
        }
    }

    /// Numeric arguments, for bound-ness checks.
    pub(crate) fn num_args(&self) -> Vec<&NumArg> {
        match self {
            Pred::Position(_, x, y, z) | Pred::AbsolutePosition(_, x, y, z) => {
                vec![x, y, z]
            }
            Pred::Size(_, w, h) => vec![w, h],
            Pred::Elevation(_, e) => vec![e],
            Pred::Eq(a, b)
            | Pred::Ne(a, b)
            | Pred::Lt(a, b)
            | Pred::Le(a, b)
            | Pred::Gt(a, b)
            | Pred::Ge(a, b) => vec![a, b],
            Pred::Sum(a, b, c) | Pred::Product(a, b, c) => vec![a, b, c],
            _ => Vec::new(),
        }
    }
}

/// A goal tree: conjunction, disjunction, or a leaf predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Goal {
    /// All sub-goals must hold. Empty conjunction holds trivially.
    All(Vec<Goal>),
    /// At least one sub-goal must hold. Empty disjunction fails.
    Any(Vec<Goal>),
    Pred(Pred),
}

impl Goal {
    pub fn all(goals: Vec<Goal>) -> Self {
        Goal::All(goals)
    }

    pub fn any(goals: Vec<Goal>) -> Self {
        Goal::Any(goals)
    }
}

impl From<Pred> for Goal {
    fn from(pred: Pred) -> Self {
        Goal::Pred(pred)
    }
}
