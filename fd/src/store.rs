//! The constraint store: variable bounds plus posted constraints.

use crate::{Bounds, Constraint, DomainError, DomainResult, VarId, DEFAULT_MAX, DEFAULT_MIN};

/// A store of finite-domain variables and the constraints posted on them.
///
/// Bounds consistency: every posted constraint tightens interval bounds to a
/// fixpoint over the whole constraint set. Cloning the store yields a fully
/// independent copy, which is how disjunction branches are isolated.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    bounds: Vec<Bounds>,
    constraints: Vec<Constraint>,
}

impl DomainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a variable with the default symmetric bounds.
    pub fn new_var(&mut self) -> VarId {
        self.push_var(Bounds::new(DEFAULT_MIN, DEFAULT_MAX))
    }

    /// Create a variable with explicit inclusive bounds.
    pub fn new_var_in(&mut self, min: i64, max: i64) -> DomainResult<VarId> {
        if min > max {
            return Err(DomainError::Unsatisfiable);
        }
        Ok(self.push_var(Bounds::new(min, max)))
    }

    /// Create a variable fixed to a single value.
    pub fn constant(&mut self, value: i64) -> VarId {
        self.push_var(Bounds::new(value, value))
    }

    fn push_var(&mut self, bounds: Bounds) -> VarId {
        let id = VarId::new(self.bounds.len() as u32);
        self.bounds.push(bounds);
        id
    }

    /// Number of variables created so far.
    pub fn var_count(&self) -> usize {
        self.bounds.len()
    }

    /// Current bounds of a variable.
    pub fn bounds(&self, var: VarId) -> Bounds {
        self.bounds[var.raw() as usize]
    }

    /// Current lower bound.
    pub fn min(&self, var: VarId) -> i64 {
        self.bounds(var).min
    }

    /// Current upper bound.
    pub fn max(&self, var: VarId) -> i64 {
        self.bounds(var).max
    }

    /// True if the variable's domain is a single value.
    pub fn is_fixed(&self, var: VarId) -> bool {
        self.bounds(var).is_fixed()
    }

    /// The variable's value, if fixed.
    pub fn value(&self, var: VarId) -> Option<i64> {
        let b = self.bounds(var);
        b.is_fixed().then_some(b.min)
    }

    /// Post a constraint and propagate immediately.
    pub fn post(&mut self, constraint: Constraint) -> DomainResult<()> {
        self.constraints.push(constraint);
        self.propagate()
    }

    /// Fix a variable to a value and propagate.
    pub fn assign(&mut self, var: VarId, value: i64) -> DomainResult<()> {
        self.tighten(var, value, value)?;
        self.propagate()
    }

    /// Run bound propagation over all posted constraints to a fixpoint.
    fn propagate(&mut self) -> DomainResult<()> {
        loop {
            let mut changed = false;
            for i in 0..self.constraints.len() {
                changed |= self.revise(self.constraints[i])?;
            }
            if !changed {
                return Ok(());
            }
        }
    }

    /// Intersect a variable's bounds with `[min, max]`.
    ///
    /// Returns whether the bounds changed; fails when the domain empties.
    fn tighten(&mut self, var: VarId, min: i64, max: i64) -> DomainResult<bool> {
        let b = &mut self.bounds[var.raw() as usize];
        let new = Bounds::new(b.min.max(min), b.max.min(max));
        if new.is_empty() {
            return Err(DomainError::Unsatisfiable);
        }
        let changed = new != *b;
        *b = new;
        Ok(changed)
    }

    fn revise(&mut self, constraint: Constraint) -> DomainResult<bool> {
        match constraint {
            Constraint::Eq(a, b) => {
                let (ba, bb) = (self.bounds(a), self.bounds(b));
                let min = ba.min.max(bb.min);
                let max = ba.max.min(bb.max);
                Ok(self.tighten(a, min, max)? | self.tighten(b, min, max)?)
            }
            Constraint::Ne(a, b) => {
                let mut changed = self.prune_fixed_neighbor(a, b)?;
                changed |= self.prune_fixed_neighbor(b, a)?;
                Ok(changed)
            }
            Constraint::Lt(a, b) => self.revise_lt(a, b, 1),
            Constraint::Le(a, b) => self.revise_lt(a, b, 0),
            Constraint::Gt(a, b) => self.revise_lt(b, a, 1),
            Constraint::Ge(a, b) => self.revise_lt(b, a, 0),
            Constraint::Sum(a, b, c) => {
                let (ba, bb, bc) = (self.bounds(a), self.bounds(b), self.bounds(c));
                let mut changed = self.tighten(
                    c,
                    ba.min.saturating_add(bb.min),
                    ba.max.saturating_add(bb.max),
                )?;
                changed |= self.tighten(
                    a,
                    bc.min.saturating_sub(bb.max),
                    bc.max.saturating_sub(bb.min),
                )?;
                let (ba, bc) = (self.bounds(a), self.bounds(c));
                changed |= self.tighten(
                    b,
                    bc.min.saturating_sub(ba.max),
                    bc.max.saturating_sub(ba.min),
                )?;
                Ok(changed)
            }
            Constraint::Product(a, b, c) => self.revise_product(a, b, c),
        }
    }

    /// `a <strict> b` with `strict` 1 for `<` and 0 for `<=`.
    fn revise_lt(&mut self, a: VarId, b: VarId, strict: i64) -> DomainResult<bool> {
        let (ba, bb) = (self.bounds(a), self.bounds(b));
        let mut changed = self.tighten(a, i64::MIN, bb.max.saturating_sub(strict))?;
        changed |= self.tighten(b, ba.min.saturating_add(strict), i64::MAX)?;
        Ok(changed)
    }

    /// For `a != b`: when `a` is fixed, shave it off `b`'s endpoints.
    fn prune_fixed_neighbor(&mut self, a: VarId, b: VarId) -> DomainResult<bool> {
        let Some(v) = self.value(a) else {
            return Ok(false);
        };
        let bb = self.bounds(b);
        let mut changed = false;
        if bb.min == v {
            changed |= self.tighten(b, v.saturating_add(1), i64::MAX)?;
        }
        let bb = self.bounds(b);
        if bb.max == v {
            changed |= self.tighten(b, i64::MIN, v.saturating_sub(1))?;
        }
        Ok(changed)
    }

    /// Bounds consistency for `a * b == c`.
    ///
    /// The result interval is tightened from endpoint products; the factor
    /// intervals are tightened only through a fixed nonzero co-factor, where
    /// integer division is well defined.
    fn revise_product(&mut self, a: VarId, b: VarId, c: VarId) -> DomainResult<bool> {
        let (ba, bb) = (self.bounds(a), self.bounds(b));
        let products = [
            ba.min.saturating_mul(bb.min),
            ba.min.saturating_mul(bb.max),
            ba.max.saturating_mul(bb.min),
            ba.max.saturating_mul(bb.max),
        ];
        let lo = products.iter().copied().min().unwrap_or(0);
        let hi = products.iter().copied().max().unwrap_or(0);
        let mut changed = self.tighten(c, lo, hi)?;

        changed |= self.divide_through(b, c, a)?;
        changed |= self.divide_through(a, c, b)?;
        Ok(changed)
    }

    /// If `factor` is fixed, tighten `other` so that factor * other covers c.
    fn divide_through(&mut self, factor: VarId, c: VarId, other: VarId) -> DomainResult<bool> {
        let Some(f) = self.value(factor) else {
            return Ok(false);
        };
        if f == 0 {
            // 0 * other == c forces c to zero and leaves other alone.
            return self.tighten(c, 0, 0);
        }
        let bc = self.bounds(c);
        let (lo, hi) = if f > 0 {
            (div_ceil(bc.min, f), div_floor(bc.max, f))
        } else {
            (div_ceil(bc.max, f), div_floor(bc.min, f))
        };
        self.tighten(other, lo, hi)
    }
}

fn div_floor(n: i64, d: i64) -> i64 {
    let q = n / d;
    if (n % d != 0) && ((n < 0) != (d < 0)) {
        q - 1
    } else {
        q
    }
}

fn div_ceil(n: i64, d: i64) -> i64 {
    let q = n / d;
    if (n % d != 0) && ((n < 0) == (d < 0)) {
        q + 1
    } else {
        q
    }
}
