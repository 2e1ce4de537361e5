//! Layout constants consumed as bounds and equalities by queries.
//!
//! The engine never computes these; they are configuration data a scene is
//! loaded with and the core consumes verbatim.

use quire_core::DeviceClass;

/// The design-constant table for a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConstants {
    /// Component baseline grid, in design units.
    pub baseline_grid: i64,
    /// Typography grid, in design units.
    pub type_grid: i64,
    /// Minimum touch-target side, in design units.
    pub touch_target: i64,
    /// Elevation added while an object is raised.
    pub raise_offset: i64,
    /// Fixed paper depth.
    pub paper_depth: i64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            baseline_grid: 8,
            type_grid: 4,
            touch_target: 48,
            raise_offset: 6,
            paper_depth: 1,
        }
    }
}

impl LayoutConstants {
    /// Toolbar height for a device class, in design units.
    pub fn toolbar_height(&self, class: DeviceClass) -> i64 {
        match class {
            DeviceClass::Mobile => 56,
            DeviceClass::Tablet | DeviceClass::Desktop => 64,
        }
    }

    /// Screen-edge margin for a device class, in design units.
    pub fn margin(&self, class: DeviceClass) -> i64 {
        match class {
            DeviceClass::Mobile => 16,
            DeviceClass::Tablet | DeviceClass::Desktop => 24,
        }
    }
}
