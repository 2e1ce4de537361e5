//! Canonical relation names.
//!
//! The scene loader asserts facts under these names and the evaluator
//! resolves them at construction. Each relation has exactly one signature:
//!
//! - `paper(obj)` / `ink(obj)` — unary role relations
//! - `shape(obj, name)` / `colour(obj, name)`
//! - `shape-def(name, description)` / `colour-def(name, shade)`
//! - `paper-pos(obj, x, y, z)` — parent-relative position
//! - `paper-size(obj, w, h)`
//! - `contains(container, obj)` — one-hop containment
//! - `root(obj)` — containment-forest root marker
//! - `rest-elev(obj, offset)` — rest elevation offset
//! - `at-rest(obj)` / `raised(obj)` — mutually exclusive state markers
//! - `device(dev, class)` — device class
//! - `pixel-depth(dev, px)` — pixels per design unit
//! - `screen(dev, w, h, z-extent)` — viewport in design units
//! - `raise-offset(units)` — elevation added to raised objects

pub const PAPER: &str = "paper";
pub const INK: &str = "ink";
pub const SHAPE: &str = "shape";
pub const COLOUR: &str = "colour";
pub const SHAPE_DEF: &str = "shape-def";
pub const COLOUR_DEF: &str = "colour-def";
pub const PAPER_POS: &str = "paper-pos";
pub const PAPER_SIZE: &str = "paper-size";
pub const CONTAINS: &str = "contains";
pub const ROOT: &str = "root";
pub const REST_ELEV: &str = "rest-elev";
pub const AT_REST: &str = "at-rest";
pub const RAISED: &str = "raised";
pub const DEVICE: &str = "device";
pub const PIXEL_DEPTH: &str = "pixel-depth";
pub const SCREEN: &str = "screen";
pub const RAISE_OFFSET: &str = "raise-offset";
