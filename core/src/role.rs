//! Role and device-class enums.

use std::fmt;

/// The role of a material object. Paper and ink are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Opaque rectangular panel, rounded-rect shape, white colour.
    Paper,
    /// Mark painted atop paper; shape and colour are unrestricted.
    Ink,
}

impl Role {
    /// The unary role relation recording this role in the fact store.
    pub fn relation(&self) -> &'static str {
        match self {
            Role::Paper => crate::rel::PAPER,
            Role::Ink => crate::rel::INK,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Paper => write!(f, "paper"),
            Role::Ink => write!(f, "ink"),
        }
    }
}

/// Device class, determining toolbar heights and similar constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Symbolic name used in `device` facts.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }

    /// Parse a symbolic name back into a class.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "mobile" => Some(DeviceClass::Mobile),
            "tablet" => Some(DeviceClass::Tablet),
            "desktop" => Some(DeviceClass::Desktop),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
