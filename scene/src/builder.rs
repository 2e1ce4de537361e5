//! SceneBuilder for constructing a validated, immutable fact store.
//!
//! Declarations accumulate in the builder; `build()` validates the whole
//! configuration, assigns object ids in declaration order, and asserts the
//! ground facts in one batch. The resulting store is read-only for the
//! query session.

use crate::{LayoutConstants, SceneError, SceneResult};
use quire_core::{rel, DeviceClass, ObjectId, Role, Term};
use quire_facts::FactStore;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Shape and colour entries every scene starts with; papers are restricted
/// to exactly these.
const PAPER_SHAPE: &str = "rounded-rect";
const PAPER_COLOUR: &str = "white";

fn identifier_pattern() -> Option<&'static regex_lite::Regex> {
    static PATTERN: OnceLock<Option<regex_lite::Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| regex_lite::Regex::new("^[A-Za-z][A-Za-z0-9_-]*$").ok())
        .as_ref()
}

fn valid_identifier(name: &str) -> bool {
    identifier_pattern().map_or(false, |re| re.is_match(name))
}

#[derive(Debug)]
struct ObjectDecl {
    name: String,
    role: Role,
    position: (i64, i64, i64),
    size: (i64, i64),
    rest_elevation: i64,
    raised: bool,
    container: Option<String>,
    shape: Option<String>,
    colour: Option<String>,
}

#[derive(Debug)]
struct DeviceDecl {
    name: String,
    class: DeviceClass,
    pixel_depth: i64,
    screen: (i64, i64, i64),
}

/// A validated scene: the loaded store plus the name table used to build it.
#[derive(Debug)]
pub struct Scene {
    store: FactStore,
    names: HashMap<String, ObjectId>,
}

impl Scene {
    /// The loaded fact store.
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// Consume the scene, keeping only the store.
    pub fn into_store(self) -> FactStore {
        self.store
    }

    /// Object or device id for a declared name.
    pub fn object(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }
}

/// Builder for a scene configuration.
#[derive(Debug)]
pub struct SceneBuilder {
    constants: LayoutConstants,
    objects: Vec<ObjectDecl>,
    devices: Vec<DeviceDecl>,
    shapes: Vec<(String, String)>,
    colours: Vec<(String, String)>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Create a builder with default constants and the built-in shape and
    /// colour tables.
    pub fn new() -> Self {
        Self {
            constants: LayoutConstants::default(),
            objects: Vec::new(),
            devices: Vec::new(),
            shapes: vec![(
                PAPER_SHAPE.to_string(),
                "rectangle with rounded corners".to_string(),
            )],
            colours: vec![(PAPER_COLOUR.to_string(), "#FFFFFF".to_string())],
        }
    }

    /// Replace the layout-constant table.
    pub fn with_constants(mut self, constants: LayoutConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Register a shape in the shape table.
    pub fn shape_def(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.shapes.push((name.into(), description.into()));
    }

    /// Register a colour in the colour table.
    pub fn colour_def(&mut self, name: impl Into<String>, shade: impl Into<String>) {
        self.colours.push((name.into(), shade.into()));
    }

    /// Declare a paper panel.
    pub fn paper(&mut self, name: impl Into<String>) -> ObjectBuilder<'_> {
        ObjectBuilder::new(self, name.into(), Role::Paper)
    }

    /// Declare an ink mark.
    pub fn ink(&mut self, name: impl Into<String>) -> ObjectBuilder<'_> {
        ObjectBuilder::new(self, name.into(), Role::Ink)
    }

    /// Declare a device.
    pub fn device(&mut self, name: impl Into<String>) -> DeviceBuilder<'_> {
        DeviceBuilder {
            builder: self,
            decl: DeviceDecl {
                name: name.into(),
                class: DeviceClass::Mobile,
                pixel_depth: 1,
                screen: (0, 0, 0),
            },
        }
    }

    fn name_taken(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o.name == name)
            || self.devices.iter().any(|d| d.name == name)
    }

    fn check_name(&self, name: &str) -> SceneResult<()> {
        if !valid_identifier(name) {
            return Err(SceneError::InvalidIdentifier(name.to_string()));
        }
        if self.name_taken(name) {
            return Err(SceneError::DuplicateObject(name.to_string()));
        }
        Ok(())
    }

    /// Validate the configuration and load it into a fresh store.
    pub fn build(self) -> SceneResult<Scene> {
        self.validate()?;

        let mut store = FactStore::new();
        let mut names = HashMap::new();
        let mut next_id = 1u64;

        let paper = store.rel(rel::PAPER);
        let ink = store.rel(rel::INK);
        let shape = store.rel(rel::SHAPE);
        let colour = store.rel(rel::COLOUR);
        let shape_def = store.rel(rel::SHAPE_DEF);
        let colour_def = store.rel(rel::COLOUR_DEF);
        let pos = store.rel(rel::PAPER_POS);
        let size = store.rel(rel::PAPER_SIZE);
        let contains = store.rel(rel::CONTAINS);
        let root = store.rel(rel::ROOT);
        let rest_elev = store.rel(rel::REST_ELEV);
        let at_rest = store.rel(rel::AT_REST);
        let raised = store.rel(rel::RAISED);
        let device = store.rel(rel::DEVICE);
        let pixel_depth = store.rel(rel::PIXEL_DEPTH);
        let screen = store.rel(rel::SCREEN);
        let raise_offset = store.rel(rel::RAISE_OFFSET);

        store.assert_fact(raise_offset, vec![Term::Int(self.constants.raise_offset)]);
        for (name, description) in &self.shapes {
            store.assert_fact(
                shape_def,
                vec![Term::Name(name.clone()), Term::Name(description.clone())],
            );
        }
        for (name, shade) in &self.colours {
            store.assert_fact(
                colour_def,
                vec![Term::Name(name.clone()), Term::Name(shade.clone())],
            );
        }

        for decl in &self.objects {
            let obj = ObjectId::new(next_id);
            next_id += 1;
            names.insert(decl.name.clone(), obj);

            let role_rel = match decl.role {
                Role::Paper => paper,
                Role::Ink => ink,
            };
            store.assert_fact(role_rel, vec![Term::Obj(obj)]);
            store.assert_fact(
                pos,
                vec![
                    Term::Obj(obj),
                    Term::Int(decl.position.0),
                    Term::Int(decl.position.1),
                    Term::Int(decl.position.2),
                ],
            );
            store.assert_fact(
                size,
                vec![Term::Obj(obj), Term::Int(decl.size.0), Term::Int(decl.size.1)],
            );
            store.assert_fact(
                rest_elev,
                vec![Term::Obj(obj), Term::Int(decl.rest_elevation)],
            );
            let state_rel = if decl.raised { raised } else { at_rest };
            store.assert_fact(state_rel, vec![Term::Obj(obj)]);
            if let Some(shape_name) = &decl.shape {
                store.assert_fact(
                    shape,
                    vec![Term::Obj(obj), Term::Name(shape_name.clone())],
                );
            }
            if let Some(colour_name) = &decl.colour {
                store.assert_fact(
                    colour,
                    vec![Term::Obj(obj), Term::Name(colour_name.clone())],
                );
            }
        }

        // Containment second pass: every container name is now resolvable.
        for decl in &self.objects {
            let obj = names[&decl.name];
            match &decl.container {
                Some(container) => {
                    store.assert_fact(
                        contains,
                        vec![Term::Obj(names[container.as_str()]), Term::Obj(obj)],
                    );
                }
                None => store.assert_fact(root, vec![Term::Obj(obj)]),
            }
        }

        for decl in &self.devices {
            let dev = ObjectId::new(next_id);
            next_id += 1;
            names.insert(decl.name.clone(), dev);

            store.assert_fact(
                device,
                vec![Term::Obj(dev), Term::Name(decl.class.name().to_string())],
            );
            store.assert_fact(
                pixel_depth,
                vec![Term::Obj(dev), Term::Int(decl.pixel_depth)],
            );
            store.assert_fact(
                screen,
                vec![
                    Term::Obj(dev),
                    Term::Int(decl.screen.0),
                    Term::Int(decl.screen.1),
                    Term::Int(decl.screen.2),
                ],
            );
        }

        Ok(Scene { store, names })
    }

    fn validate(&self) -> SceneResult<()> {
        let shape_names: HashSet<&str> = self.shapes.iter().map(|(n, _)| n.as_str()).collect();
        let colour_names: HashSet<&str> = self.colours.iter().map(|(n, _)| n.as_str()).collect();
        let object_names: HashSet<&str> = self.objects.iter().map(|o| o.name.as_str()).collect();

        for decl in &self.objects {
            if decl.size.0 < 0 || decl.size.1 < 0 {
                return Err(SceneError::NegativeSize(decl.name.clone()));
            }
            if decl.position.2 < 0 {
                return Err(SceneError::NegativeZ(decl.name.clone()));
            }
            if let Some(container) = &decl.container {
                if !object_names.contains(container.as_str()) {
                    return Err(SceneError::UnknownContainer {
                        object: decl.name.clone(),
                        container: container.clone(),
                    });
                }
            }
            if let Some(shape) = &decl.shape {
                if !shape_names.contains(shape.as_str()) {
                    return Err(SceneError::UnknownShape {
                        object: decl.name.clone(),
                        shape: shape.clone(),
                    });
                }
                if decl.role == Role::Paper && shape != PAPER_SHAPE {
                    return Err(SceneError::PaperShapeRestricted {
                        object: decl.name.clone(),
                        shape: shape.clone(),
                    });
                }
            }
            if let Some(colour) = &decl.colour {
                if !colour_names.contains(colour.as_str()) {
                    return Err(SceneError::UnknownColour {
                        object: decl.name.clone(),
                        colour: colour.clone(),
                    });
                }
                if decl.role == Role::Paper && colour != PAPER_COLOUR {
                    return Err(SceneError::PaperColourRestricted {
                        object: decl.name.clone(),
                        colour: colour.clone(),
                    });
                }
            }
        }

        // Containment must form a forest. Walks start in declaration order
        // so a cycle is always reported against the same member.
        let parents: HashMap<&str, &str> = self
            .objects
            .iter()
            .filter_map(|o| o.container.as_deref().map(|c| (o.name.as_str(), c)))
            .collect();
        for decl in &self.objects {
            let mut seen = HashSet::new();
            let mut cursor = decl.name.as_str();
            seen.insert(cursor);
            while let Some(&parent) = parents.get(cursor) {
                if !seen.insert(parent) {
                    return Err(SceneError::ContainmentCycle(parent.to_string()));
                }
                cursor = parent;
            }
        }

        Ok(())
    }
}

/// Builder for one paper or ink declaration.
pub struct ObjectBuilder<'a> {
    builder: &'a mut SceneBuilder,
    decl: ObjectDecl,
}

impl<'a> ObjectBuilder<'a> {
    fn new(builder: &'a mut SceneBuilder, name: String, role: Role) -> Self {
        let (shape, colour) = match role {
            // Papers carry their restricted shape and colour by default.
            Role::Paper => (
                Some(PAPER_SHAPE.to_string()),
                Some(PAPER_COLOUR.to_string()),
            ),
            Role::Ink => (None, None),
        };
        Self {
            builder,
            decl: ObjectDecl {
                name,
                role,
                position: (0, 0, 0),
                size: (0, 0),
                rest_elevation: 0,
                raised: false,
                container: None,
                shape,
                colour,
            },
        }
    }

    /// Stored (parent-relative) position.
    pub fn at(mut self, x: i64, y: i64, z: i64) -> Self {
        self.decl.position = (x, y, z);
        self
    }

    /// Width and height.
    pub fn size(mut self, w: i64, h: i64) -> Self {
        self.decl.size = (w, h);
        self
    }

    /// Rest-elevation offset relative to the container.
    pub fn rest_elevation(mut self, offset: i64) -> Self {
        self.decl.rest_elevation = offset;
        self
    }

    /// Mark raised instead of the default at-rest.
    pub fn raised(mut self) -> Self {
        self.decl.raised = true;
        self
    }

    /// Place inside a previously or later declared container.
    pub fn in_container(mut self, container: impl Into<String>) -> Self {
        self.decl.container = Some(container.into());
        self
    }

    /// Declared shape (ink only; papers are fixed to rounded-rect).
    pub fn shape(mut self, name: impl Into<String>) -> Self {
        self.decl.shape = Some(name.into());
        self
    }

    /// Declared colour (ink only; papers are fixed to white).
    pub fn colour(mut self, name: impl Into<String>) -> Self {
        self.decl.colour = Some(name.into());
        self
    }

    /// Finish this declaration.
    pub fn done(self) -> SceneResult<()> {
        self.builder.check_name(&self.decl.name)?;
        self.builder.objects.push(self.decl);
        Ok(())
    }
}

/// Builder for one device declaration.
pub struct DeviceBuilder<'a> {
    builder: &'a mut SceneBuilder,
    decl: DeviceDecl,
}

impl<'a> DeviceBuilder<'a> {
    /// Device class; defaults to mobile.
    pub fn class(mut self, class: DeviceClass) -> Self {
        self.decl.class = class;
        self
    }

    /// Pixels per design unit.
    pub fn pixel_depth(mut self, depth: i64) -> Self {
        self.decl.pixel_depth = depth;
        self
    }

    /// Viewport width, height, and z-extent.
    pub fn screen(mut self, w: i64, h: i64, z_extent: i64) -> Self {
        self.decl.screen = (w, h, z_extent);
        self
    }

    /// Finish this declaration.
    pub fn done(self) -> SceneResult<()> {
        self.builder.check_name(&self.decl.name)?;
        self.builder.devices.push(self.decl);
        Ok(())
    }
}
