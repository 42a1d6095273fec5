//! Individual rigid parts of a rig.

use std::sync::Arc;

use crate::gfx::geometry::GeometryData;
use crate::gfx::transform::Transform;

/// Shared, read-only geometry. The loader produces it; parts only reference it.
pub type GeometryHandle = Arc<GeometryData>;

/// A named rigid part placed relative to its parent (or the world origin).
#[derive(Debug, Clone)]
pub struct Part {
    name: String,
    geometry: GeometryHandle,
    parent: Option<String>,
    relative: Transform,
}

impl Part {
    pub(crate) fn new(
        name: String,
        geometry: GeometryHandle,
        parent: Option<String>,
        relative: Transform,
    ) -> Self {
        Self {
            name,
            geometry,
            parent,
            relative,
        }
    }

    /// Unique name of the part
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local-frame geometry
    pub fn geometry(&self) -> &GeometryHandle {
        &self.geometry
    }

    /// Name of the parent part, `None` for a root
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Pose in the parent's frame (world frame for roots)
    pub fn relative_transform(&self) -> &Transform {
        &self.relative
    }

    pub(crate) fn set_relative_transform(&mut self, relative: Transform) {
        self.relative = relative;
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
