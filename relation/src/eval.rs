//! The relation evaluator.

use crate::{EvalError, EvalResult};
use quire_core::{rel, DeviceClass, ObjectId, Rect, RelId, Role, Term};
use quire_facts::{FactStore, Pat};
use std::collections::HashMap;

/// Evaluates derived relations against an immutable fact store.
///
/// Construction resolves relation ids and scans the role and containment
/// facts once: the store is read-only for the duration of a query session,
/// so the parent and role maps stay valid and give O(1) lookups on the
/// paths the hierarchy resolver and consistency checker traverse.
#[derive(Debug)]
pub struct Evaluator<'s> {
    store: &'s FactStore,
    pub(crate) roles: HashMap<ObjectId, Role>,
    pub(crate) parents: HashMap<ObjectId, ObjectId>,
    paper_order: Vec<ObjectId>,
    ink_order: Vec<ObjectId>,
    device_order: Vec<ObjectId>,
    pub(crate) raise_offset: i64,
    rels: Rels,
}

/// Resolved relation ids; `None` when the store never saw the relation.
#[derive(Debug, Default)]
struct Rels {
    shape: Option<RelId>,
    colour: Option<RelId>,
    shape_def: Option<RelId>,
    colour_def: Option<RelId>,
    paper_pos: Option<RelId>,
    paper_size: Option<RelId>,
    contains: Option<RelId>,
    rest_elev: Option<RelId>,
    at_rest: Option<RelId>,
    raised: Option<RelId>,
    device: Option<RelId>,
    pixel_depth: Option<RelId>,
    screen: Option<RelId>,
}

impl<'s> Evaluator<'s> {
    /// Build an evaluator over a loaded store.
    ///
    /// Fails when the role or containment facts already violate the data
    /// model (conflicting roles, more than one parent).
    pub fn new(store: &'s FactStore) -> EvalResult<Self> {
        let rels = Rels {
            shape: store.rel_id(rel::SHAPE),
            colour: store.rel_id(rel::COLOUR),
            shape_def: store.rel_id(rel::SHAPE_DEF),
            colour_def: store.rel_id(rel::COLOUR_DEF),
            paper_pos: store.rel_id(rel::PAPER_POS),
            paper_size: store.rel_id(rel::PAPER_SIZE),
            contains: store.rel_id(rel::CONTAINS),
            rest_elev: store.rel_id(rel::REST_ELEV),
            at_rest: store.rel_id(rel::AT_REST),
            raised: store.rel_id(rel::RAISED),
            device: store.rel_id(rel::DEVICE),
            pixel_depth: store.rel_id(rel::PIXEL_DEPTH),
            screen: store.rel_id(rel::SCREEN),
        };

        let mut roles = HashMap::new();
        let mut paper_order = Vec::new();
        let mut ink_order = Vec::new();
        if let Some(paper) = store.rel_id(rel::PAPER) {
            for tuple in store.facts(paper) {
                if let Some(obj) = tuple.first().and_then(Term::as_obj) {
                    roles.insert(obj, Role::Paper);
                    paper_order.push(obj);
                }
            }
        }
        if let Some(ink) = store.rel_id(rel::INK) {
            for tuple in store.facts(ink) {
                if let Some(obj) = tuple.first().and_then(Term::as_obj) {
                    if roles.insert(obj, Role::Ink) == Some(Role::Paper) {
                        return Err(EvalError::ConflictingRoles(obj));
                    }
                    ink_order.push(obj);
                }
            }
        }

        let mut parents = HashMap::new();
        if let Some(contains) = rels.contains {
            for tuple in store.facts(contains) {
                if let (Some(container), Some(obj)) = (
                    tuple.first().and_then(Term::as_obj),
                    tuple.get(1).and_then(Term::as_obj),
                ) {
                    if parents.insert(obj, container).is_some() {
                        return Err(EvalError::MultipleParents(obj));
                    }
                }
            }
        }

        let mut device_order = Vec::new();
        if let Some(device) = rels.device {
            for tuple in store.facts(device) {
                if let Some(dev) = tuple.first().and_then(Term::as_obj) {
                    device_order.push(dev);
                }
            }
        }

        let raise_offset = store
            .rel_id(rel::RAISE_OFFSET)
            .and_then(|r| store.facts(r).first().cloned())
            .and_then(|t| t.first().and_then(Term::as_int))
            .unwrap_or(6);

        Ok(Self {
            store,
            roles,
            parents,
            paper_order,
            ink_order,
            device_order,
            raise_offset,
            rels,
        })
    }

    /// The underlying fact store.
    pub fn store(&self) -> &'s FactStore {
        self.store
    }

    // ==================== Roles and guards ====================

    /// The role of an object, if it is a material object.
    pub fn role(&self, obj: ObjectId) -> Option<Role> {
        self.roles.get(&obj).copied()
    }

    /// Guard: object must be paper or ink.
    pub fn require_material(&self, obj: ObjectId) -> EvalResult<()> {
        if self.roles.contains_key(&obj) {
            Ok(())
        } else {
            Err(EvalError::TypeGuardFailure {
                object: obj,
                required: "a material object",
            })
        }
    }

    /// Guard: object must be paper.
    pub fn require_paper(&self, obj: ObjectId) -> EvalResult<()> {
        match self.role(obj) {
            Some(Role::Paper) => Ok(()),
            _ => Err(EvalError::TypeGuardFailure {
                object: obj,
                required: "paper",
            }),
        }
    }

    /// Guard: object must be a declared device.
    pub fn require_device(&self, dev: ObjectId) -> EvalResult<()> {
        if self.device_order.contains(&dev) {
            Ok(())
        } else {
            Err(EvalError::TypeGuardFailure {
                object: dev,
                required: "a device",
            })
        }
    }

    /// Papers in fact insertion order.
    pub fn papers(&self) -> &[ObjectId] {
        &self.paper_order
    }

    /// Inks in fact insertion order.
    pub fn inks(&self) -> &[ObjectId] {
        &self.ink_order
    }

    /// Devices in fact insertion order.
    pub fn devices(&self) -> &[ObjectId] {
        &self.device_order
    }

    /// All material objects: papers first, then inks, each in insertion
    /// order. Enumeration order feeds solution determinism.
    pub fn materials(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.paper_order.iter().chain(&self.ink_order).copied()
    }

    // ==================== Stored attributes ====================

    /// Stored (parent-relative) position of an object.
    pub fn position(&self, obj: ObjectId) -> EvalResult<(i64, i64, i64)> {
        self.require_material(obj)?;
        let rel_id = self.rels.paper_pos.ok_or(EvalError::MissingFact {
            object: obj,
            relation: rel::PAPER_POS,
        })?;
        let tuple = self
            .store
            .first(rel_id, &[Pat::obj(obj), Pat::Any, Pat::Any, Pat::Any])
            .ok_or(EvalError::MissingFact {
                object: obj,
                relation: rel::PAPER_POS,
            })?;
        Ok((
            tuple[1].as_int().unwrap_or(0),
            tuple[2].as_int().unwrap_or(0),
            tuple[3].as_int().unwrap_or(0),
        ))
    }

    /// Stored width and height of an object.
    pub fn size(&self, obj: ObjectId) -> EvalResult<(i64, i64)> {
        self.require_material(obj)?;
        let rel_id = self.rels.paper_size.ok_or(EvalError::MissingFact {
            object: obj,
            relation: rel::PAPER_SIZE,
        })?;
        let tuple = self
            .store
            .first(rel_id, &[Pat::obj(obj), Pat::Any, Pat::Any])
            .ok_or(EvalError::MissingFact {
                object: obj,
                relation: rel::PAPER_SIZE,
            })?;
        Ok((tuple[1].as_int().unwrap_or(0), tuple[2].as_int().unwrap_or(0)))
    }

    /// Stored rectangle (parent-relative frame).
    pub fn stored_rect(&self, obj: ObjectId) -> EvalResult<Rect> {
        let (x, y, _) = self.position(obj)?;
        let (w, h) = self.size(obj)?;
        Ok(Rect::new(x, y, w, h))
    }

    /// Containment parent, if any.
    pub fn parent(&self, obj: ObjectId) -> Option<ObjectId> {
        self.parents.get(&obj).copied()
    }

    /// True if the object is a root of the containment forest.
    pub fn is_root(&self, obj: ObjectId) -> bool {
        self.parent(obj).is_none()
    }

    /// Rest-elevation offset stored for an object.
    pub fn rest_offset(&self, obj: ObjectId) -> EvalResult<i64> {
        self.require_material(obj)?;
        let rel_id = self.rels.rest_elev.ok_or(EvalError::MissingFact {
            object: obj,
            relation: rel::REST_ELEV,
        })?;
        let tuple = self
            .store
            .first(rel_id, &[Pat::obj(obj), Pat::Any])
            .ok_or(EvalError::MissingFact {
                object: obj,
                relation: rel::REST_ELEV,
            })?;
        Ok(tuple[1].as_int().unwrap_or(0))
    }

    /// True if the object is raised; false if at rest.
    ///
    /// Exactly one of the two state markers must be present.
    pub fn is_raised(&self, obj: ObjectId) -> EvalResult<bool> {
        self.require_material(obj)?;
        let at_rest = self
            .rels
            .at_rest
            .map(|r| self.store.contains_fact(r, &[Term::Obj(obj)]))
            .unwrap_or(false);
        let raised = self
            .rels
            .raised
            .map(|r| self.store.contains_fact(r, &[Term::Obj(obj)]))
            .unwrap_or(false);
        match (at_rest, raised) {
            (true, false) => Ok(false),
            (false, true) => Ok(true),
            _ => Err(EvalError::InvalidState(obj)),
        }
    }

    // ==================== Shape and colour ====================

    /// Shape name declared for an object.
    pub fn shape_of(&self, obj: ObjectId) -> EvalResult<&str> {
        self.require_material(obj)?;
        self.lookup_name(self.rels.shape, obj, rel::SHAPE)
    }

    /// Colour name declared for an object.
    pub fn colour_of(&self, obj: ObjectId) -> EvalResult<&str> {
        self.require_material(obj)?;
        self.lookup_name(self.rels.colour, obj, rel::COLOUR)
    }

    /// Description from the shape table.
    pub fn shape_description(&self, name: &str) -> Option<&str> {
        self.table_lookup(self.rels.shape_def, name)
    }

    /// Shade from the colour table.
    pub fn colour_shade(&self, name: &str) -> Option<&str> {
        self.table_lookup(self.rels.colour_def, name)
    }

    fn lookup_name(
        &self,
        rel_id: Option<RelId>,
        obj: ObjectId,
        relation: &'static str,
    ) -> EvalResult<&str> {
        rel_id
            .and_then(|r| self.store.first(r, &[Pat::obj(obj), Pat::Any]))
            .and_then(|t| t[1].as_name())
            .ok_or(EvalError::MissingFact {
                object: obj,
                relation,
            })
    }

    fn table_lookup(&self, rel_id: Option<RelId>, name: &str) -> Option<&str> {
        rel_id
            .and_then(|r| self.store.first(r, &[Pat::name(name), Pat::Any]))
            .and_then(|t| t[1].as_name())
    }

    // ==================== Derived relations ====================

    /// Equal absolute z.
    pub fn same_plane(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.require_material(a)?;
        self.require_material(b)?;
        Ok(self.absolute_position(a)?.2 == self.absolute_position(b)?.2)
    }

    /// Unequal absolute z.
    pub fn different_plane(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        Ok(!self.same_plane(a, b)?)
    }

    /// Strictly above in stacking order (absolute z). Distinct from
    /// containment.
    pub fn over(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.require_material(a)?;
        self.require_material(b)?;
        Ok(self.absolute_position(a)?.2 > self.absolute_position(b)?.2)
    }

    /// Strictly below in stacking order (absolute z).
    pub fn under(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.over(b, a)
    }

    /// Axis-aligned x/y overlap on the stored rectangles, half-open.
    pub fn intersect(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.require_material(a)?;
        self.require_material(b)?;
        Ok(self.stored_rect(a)?.intersects(&self.stored_rect(b)?))
    }

    /// a's rectangle fully contained within b's, independent of z.
    pub fn inside(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.require_material(a)?;
        self.require_material(b)?;
        Ok(self.stored_rect(a)?.inside(&self.stored_rect(b)?))
    }

    /// One-hop containment fact. Transitive closure belongs to the
    /// hierarchy resolver, not this relation.
    pub fn contains(&self, container: ObjectId, obj: ObjectId) -> bool {
        self.parent(obj) == Some(container)
    }

    /// Coplanar papers sharing exactly one full edge.
    pub fn seam(&self, a: ObjectId, b: ObjectId) -> EvalResult<bool> {
        self.require_paper(a)?;
        self.require_paper(b)?;
        // A seam presumes two different papers.
        if a == b {
            return Ok(false);
        }
        if !self.same_plane(a, b)? {
            return Ok(false);
        }
        let ra = self.stored_rect(a)?;
        let rb = self.stored_rect(b)?;
        // The shared edge is unordered: either paper may be the one above
        // or to the left.
        let vertical =
            ra.x == rb.x && ra.w == rb.w && (ra.bottom() == rb.y || rb.bottom() == ra.y);
        let horizontal =
            ra.y == rb.y && ra.h == rb.h && (ra.right() == rb.x || rb.right() == ra.x);
        // Both at once would need a zero-size paper; not a valid seam.
        Ok(vertical ^ horizontal)
    }

    // ==================== Viewport relations ====================

    /// Viewport rectangle and z-extent of a device screen.
    pub fn screen(&self, dev: ObjectId) -> EvalResult<(Rect, i64)> {
        self.require_device(dev)?;
        let rel_id = self.rels.screen.ok_or(EvalError::MissingFact {
            object: dev,
            relation: rel::SCREEN,
        })?;
        let tuple = self
            .store
            .first(rel_id, &[Pat::obj(dev), Pat::Any, Pat::Any, Pat::Any])
            .ok_or(EvalError::MissingFact {
                object: dev,
                relation: rel::SCREEN,
            })?;
        let w = tuple[1].as_int().unwrap_or(0);
        let h = tuple[2].as_int().unwrap_or(0);
        let z = tuple[3].as_int().unwrap_or(0);
        Ok((Rect::new(0, 0, w, h), z))
    }

    /// Device class from the device fact.
    pub fn device_class(&self, dev: ObjectId) -> EvalResult<DeviceClass> {
        self.require_device(dev)?;
        let rel_id = self.rels.device.ok_or(EvalError::MissingFact {
            object: dev,
            relation: rel::DEVICE,
        })?;
        self.store
            .first(rel_id, &[Pat::obj(dev), Pat::Any])
            .and_then(|t| t[1].as_name())
            .and_then(DeviceClass::parse)
            .ok_or(EvalError::MissingFact {
                object: dev,
                relation: rel::DEVICE,
            })
    }

    /// Pixels per design unit for a device.
    pub fn pixel_depth(&self, dev: ObjectId) -> EvalResult<i64> {
        self.require_device(dev)?;
        let rel_id = self.rels.pixel_depth.ok_or(EvalError::MissingFact {
            object: dev,
            relation: rel::PIXEL_DEPTH,
        })?;
        self.store
            .first(rel_id, &[Pat::obj(dev), Pat::Any])
            .and_then(|t| t[1].as_int())
            .ok_or(EvalError::MissingFact {
                object: dev,
                relation: rel::PIXEL_DEPTH,
            })
    }

    /// Convert design units to device pixels.
    pub fn to_pixels(&self, dev: ObjectId, units: i64) -> EvalResult<i64> {
        Ok(units * self.pixel_depth(dev)?)
    }

    /// Absolute rectangle of an object: absolute position plus stored size.
    pub fn absolute_rect(&self, obj: ObjectId) -> EvalResult<(Rect, i64)> {
        let (x, y, z) = self.absolute_position(obj)?;
        let (w, h) = self.size(obj)?;
        Ok((Rect::new(x, y, w, h), z))
    }

    /// True if any part of the object overlaps the device viewport.
    pub fn visible(&self, obj: ObjectId, dev: ObjectId) -> EvalResult<bool> {
        self.require_material(obj)?;
        let (viewport, z_extent) = self.screen(dev)?;
        let (rect, z) = self.absolute_rect(obj)?;
        Ok(rect.intersects(&viewport) && z <= z_extent)
    }

    /// True if the object lies fully inside the device viewport.
    pub fn on_screen(&self, obj: ObjectId, dev: ObjectId) -> EvalResult<bool> {
        self.require_material(obj)?;
        let (viewport, z_extent) = self.screen(dev)?;
        let (rect, z) = self.absolute_rect(obj)?;
        Ok(rect.inside(&viewport) && z <= z_extent)
    }
}
