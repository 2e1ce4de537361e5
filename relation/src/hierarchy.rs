//! Hierarchy resolution over the containment forest.
//!
//! Absolute position and elevation both walk the parent chain: positions
//! accumulate the stored (parent-relative) offsets, elevations accumulate
//! rest offsets plus the raise bonus of every raised ancestor. Containment
//! data is supposed to be acyclic; a visited set turns malformed data into
//! `CycleDetected` instead of an infinite walk.

use crate::{EvalError, EvalResult, Evaluator};
use quire_core::ObjectId;
use std::collections::HashSet;

impl<'s> Evaluator<'s> {
    /// Absolute (x, y, z) of an object: its stored position plus the
    /// absolute position of its container, recursively. A root object's
    /// absolute position is its stored position unchanged.
    pub fn absolute_position(&self, obj: ObjectId) -> EvalResult<(i64, i64, i64)> {
        let (mut x, mut y, mut z) = self.position(obj)?;
        let mut visited = HashSet::new();
        visited.insert(obj);
        let mut cursor = obj;
        while let Some(parent) = self.parent(cursor) {
            if !visited.insert(parent) {
                return Err(EvalError::CycleDetected(parent));
            }
            let (px, py, pz) = self.position(parent)?;
            x += px;
            y += py;
            z += pz;
            cursor = parent;
        }
        Ok((x, y, z))
    }

    /// Resting elevation: the stored rest offset on top of the container's
    /// current elevation, or the stored offset alone for a root.
    ///
    /// "Current" matters: a raised container lifts everything resting on it.
    pub fn rest_elevation(&self, obj: ObjectId) -> EvalResult<i64> {
        let mut visited = HashSet::new();
        visited.insert(obj);
        self.rest_elevation_walk(obj, &mut visited)
    }

    /// Effective elevation: resting elevation, plus the raise offset while
    /// the object itself is raised.
    pub fn elevation(&self, obj: ObjectId) -> EvalResult<i64> {
        let rest = self.rest_elevation(obj)?;
        if self.is_raised(obj)? {
            Ok(rest + self.raise_offset)
        } else {
            Ok(rest)
        }
    }

    fn rest_elevation_walk(
        &self,
        obj: ObjectId,
        visited: &mut HashSet<ObjectId>,
    ) -> EvalResult<i64> {
        let offset = self.rest_offset(obj)?;
        match self.parent(obj) {
            None => Ok(offset),
            Some(parent) => {
                if !visited.insert(parent) {
                    return Err(EvalError::CycleDetected(parent));
                }
                let base = self.rest_elevation_walk(parent, visited)?;
                let bonus = if self.is_raised(parent)? {
                    self.raise_offset
                } else {
                    0
                };
                Ok(base + bonus + offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{EvalError, Evaluator};
    use quire_core::{rel, ObjectId, Term};
    use quire_facts::FactStore;

    /// Two nested containers: o1 at (10,10,1) holds o2 at (5,5,0), which
    /// holds o3 at (2,2,0). Rest offsets 4 / 2 / 1 top down.
    fn nested_store() -> FactStore {
        let mut store = FactStore::new();
        let paper = store.rel(rel::PAPER);
        let pos = store.rel(rel::PAPER_POS);
        let size = store.rel(rel::PAPER_SIZE);
        let contains = store.rel(rel::CONTAINS);
        let root = store.rel(rel::ROOT);
        let at_rest = store.rel(rel::AT_REST);
        let rest = store.rel(rel::REST_ELEV);

        for (id, (x, y, z), offset) in [
            (1u64, (10, 10, 1), 4),
            (2, (5, 5, 0), 2),
            (3, (2, 2, 0), 1),
        ] {
            let obj = ObjectId::new(id);
            store.assert_fact(paper, vec![Term::Obj(obj)]);
            store.assert_fact(
                pos,
                vec![Term::Obj(obj), Term::Int(x), Term::Int(y), Term::Int(z)],
            );
            store.assert_fact(size, vec![Term::Obj(obj), Term::Int(50), Term::Int(50)]);
            store.assert_fact(at_rest, vec![Term::Obj(obj)]);
            store.assert_fact(rest, vec![Term::Obj(obj), Term::Int(offset)]);
        }
        store.assert_fact(root, vec![Term::Obj(ObjectId::new(1))]);
        store.assert_fact(
            contains,
            vec![Term::Obj(ObjectId::new(1)), Term::Obj(ObjectId::new(2))],
        );
        store.assert_fact(
            contains,
            vec![Term::Obj(ObjectId::new(2)), Term::Obj(ObjectId::new(3))],
        );
        store
    }

    #[test]
    fn test_root_absolute_position_is_stored_position() {
        // GIVEN a root container with a stored position
        let store = nested_store();
        let eval = Evaluator::new(&store).unwrap();

        // WHEN resolving its absolute position
        // THEN it round-trips unchanged
        assert_eq!(
            eval.absolute_position(ObjectId::new(1)).unwrap(),
            (10, 10, 1)
        );
    }

    #[test]
    fn test_nested_positions_accumulate() {
        let store = nested_store();
        let eval = Evaluator::new(&store).unwrap();

        assert_eq!(
            eval.absolute_position(ObjectId::new(2)).unwrap(),
            (15, 15, 1)
        );
        assert_eq!(
            eval.absolute_position(ObjectId::new(3)).unwrap(),
            (17, 17, 1)
        );
    }

    #[test]
    fn test_rest_elevation_accumulates_offsets() {
        let store = nested_store();
        let eval = Evaluator::new(&store).unwrap();

        assert_eq!(eval.rest_elevation(ObjectId::new(1)).unwrap(), 4);
        assert_eq!(eval.rest_elevation(ObjectId::new(2)).unwrap(), 6);
        assert_eq!(eval.rest_elevation(ObjectId::new(3)).unwrap(), 7);
    }

    #[test]
    fn test_raised_container_lifts_contents() {
        // GIVEN a raised container with an at-rest object inside it
        let mut store = FactStore::new();
        let paper = store.rel(rel::PAPER);
        let pos = store.rel(rel::PAPER_POS);
        let contains = store.rel(rel::CONTAINS);
        let at_rest = store.rel(rel::AT_REST);
        let raised = store.rel(rel::RAISED);
        let rest = store.rel(rel::REST_ELEV);
        let a = ObjectId::new(1);
        let b = ObjectId::new(2);
        for obj in [a, b] {
            store.assert_fact(paper, vec![Term::Obj(obj)]);
            store.assert_fact(
                pos,
                vec![Term::Obj(obj), Term::Int(0), Term::Int(0), Term::Int(0)],
            );
            store.assert_fact(rest, vec![Term::Obj(obj), Term::Int(0)]);
        }
        store.assert_fact(raised, vec![Term::Obj(a)]);
        store.assert_fact(at_rest, vec![Term::Obj(b)]);
        store.assert_fact(contains, vec![Term::Obj(a), Term::Obj(b)]);
        let eval = Evaluator::new(&store).unwrap();

        // WHEN the contained object is at rest on the raised container
        // THEN it inherits the raise bonus
        assert_eq!(eval.elevation(a).unwrap(), 6);
        assert_eq!(eval.rest_elevation(b).unwrap(), 6);
        assert_eq!(eval.elevation(b).unwrap(), 6);
    }

    #[test]
    fn test_raise_toggle_restores_elevation() {
        // GIVEN a root object with rest offset 0, built at rest and raised
        let build = |raised: bool| {
            let mut store = FactStore::new();
            let paper = store.rel(rel::PAPER);
            let pos = store.rel(rel::PAPER_POS);
            let rest = store.rel(rel::REST_ELEV);
            let state = store.rel(if raised { rel::RAISED } else { rel::AT_REST });
            let obj = ObjectId::new(1);
            store.assert_fact(paper, vec![Term::Obj(obj)]);
            store.assert_fact(
                pos,
                vec![Term::Obj(obj), Term::Int(0), Term::Int(0), Term::Int(0)],
            );
            store.assert_fact(state, vec![Term::Obj(obj)]);
            store.assert_fact(rest, vec![Term::Obj(obj), Term::Int(0)]);
            store
        };
        let obj = ObjectId::new(1);

        // WHEN raised, THEN elevation climbs by the raise offset
        let raised = build(true);
        assert_eq!(Evaluator::new(&raised).unwrap().elevation(obj).unwrap(), 6);

        // WHEN returned to rest, THEN the prior elevation is restored
        let rested = build(false);
        assert_eq!(Evaluator::new(&rested).unwrap().elevation(obj).unwrap(), 0);
    }

    #[test]
    fn test_containment_cycle_is_detected() {
        // GIVEN a malformed store with a two-node containment cycle
        let mut store = FactStore::new();
        let paper = store.rel(rel::PAPER);
        let pos = store.rel(rel::PAPER_POS);
        let contains = store.rel(rel::CONTAINS);
        let a = ObjectId::new(1);
        let b = ObjectId::new(2);
        for obj in [a, b] {
            store.assert_fact(paper, vec![Term::Obj(obj)]);
            store.assert_fact(
                pos,
                vec![Term::Obj(obj), Term::Int(0), Term::Int(0), Term::Int(0)],
            );
        }
        store.assert_fact(contains, vec![Term::Obj(a), Term::Obj(b)]);
        store.assert_fact(contains, vec![Term::Obj(b), Term::Obj(a)]);
        let eval = Evaluator::new(&store).unwrap();

        // WHEN resolving absolute position
        // THEN the walk terminates with a cycle error
        assert!(matches!(
            eval.absolute_position(a).unwrap_err(),
            EvalError::CycleDetected(_)
        ));
    }
}
