//! Mutual-exclusion consistency over a scene.
//!
//! Two distinct material objects resting in the same container on the same
//! plane may not overlap in x/y. Objects in different containers are never
//! cross-checked, even when their absolute bounds would overlap; nested
//! container overlap is outside this check's reach and stays that way.

use crate::{EvalResult, Evaluator};
use quire_core::ObjectId;
use quire_facts::FactStore;

/// A pair of objects violating mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first: ObjectId,
    pub second: ObjectId,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} overlaps {} in the same container and plane", self.first, self.second)
    }
}

/// Scene-wide mutual-exclusion checker.
pub struct Checker<'s> {
    eval: Evaluator<'s>,
}

impl<'s> Checker<'s> {
    /// Build a checker over a loaded store.
    pub fn new(store: &'s FactStore) -> EvalResult<Self> {
        Ok(Self {
            eval: Evaluator::new(store)?,
        })
    }

    /// Wrap an existing evaluator.
    pub fn with_evaluator(eval: Evaluator<'s>) -> Self {
        Self { eval }
    }

    /// The evaluator backing this checker.
    pub fn evaluator(&self) -> &Evaluator<'s> {
        &self.eval
    }

    /// True if the pair may coexist.
    ///
    /// An object always coexists with itself. Objects in different
    /// containers coexist unconditionally (two roots share the root frame
    /// and are compared). Same container: the pair must sit on different
    /// planes or keep disjoint rectangles.
    pub fn pauli(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        if a == b {
            return Ok(true);
        }
        self.eval.require_material(a)?;
        self.eval.require_material(b)?;
        if self.eval.parent(a) != self.eval.parent(b) {
            return Ok(true);
        }
        if self.eval.different_plane(a, b)? {
            return Ok(true);
        }
        Ok(!self.eval.intersect(a, b)?)
    }

    /// Check every unordered pair of material objects; each conflicting
    /// pair is reported once, in enumeration order.
    pub fn check_scene(&self) -> EvalResult<Vec<Conflict>> {
        let objects: Vec<ObjectId> = self.eval.materials().collect();
        let mut conflicts = Vec::new();
        for (i, &a) in objects.iter().enumerate() {
            for &b in &objects[i + 1..] {
                if !self.pauli(a, b)? {
                    conflicts.push(Conflict { first: a, second: b });
                }
            }
        }
        Ok(conflicts)
    }

    /// True when the scene holds no mutual-exclusion conflict.
    pub fn is_consistent(&self) -> EvalResult<bool> {
        Ok(self.check_scene()?.is_empty())
    }
}
