//! # Part Geometry
//!
//! Geometry is an opaque, transformable payload as far as pose resolution and
//! animation are concerned. This module holds the data type, a procedural
//! primitive, the loaders that produce geometry, and the applier that places
//! a copy of it in world space.
//!
//! ## Usage
//!
//! ```rust
//! use tipper::gfx::geometry::{apply_and_emit, generate_cube};
//! use tipper::gfx::transform::Transform;
//!
//! let cube = generate_cube();
//! let placed = apply_and_emit(&cube, &Transform::translation(0.0, 0.0, 2.0));
//!
//! assert_eq!(placed.centroid(), Some([0.0, 0.0, 2.0]));
//! assert_eq!(cube.centroid(), Some([0.0, 0.0, 0.0]));
//! ```

pub mod apply;
pub mod loader;
pub mod primitives;

pub use apply::apply_and_emit;
pub use loader::{GeometryLoader, ObjLoader, ProceduralLoader};
pub use primitives::*;

/// Triangle geometry of a single rigid part
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f64; 3]>,
    /// Normal vectors (x, y, z); empty when the source had none
    pub normals: Vec<[f64; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Mean of all vertex positions, `None` for empty geometry
    pub fn centroid(&self) -> Option<[f64; 3]> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let sum = self.vertices.iter().fold([0.0; 3], |acc, v| {
            [acc[0] + v[0], acc[1] + v[1], acc[2] + v[2]]
        });
        Some([sum[0] / n, sum[1] / n, sum[2] / n])
    }

    /// Axis-aligned `(min, max)` corners, `None` for empty geometry
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_geometry() {
        let geometry = GeometryData::new();
        assert_eq!(geometry.vertex_count(), 0);
        assert_eq!(geometry.triangle_count(), 0);
        assert!(geometry.centroid().is_none());
        assert!(geometry.bounds().is_none());
    }

    #[test]
    fn test_centroid() {
        let geometry = GeometryData {
            vertices: vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 3.0, 0.0]],
            normals: Vec::new(),
            indices: vec![0, 1, 2],
        };
        assert_eq!(geometry.centroid(), Some([1.0, 1.0, 0.0]));
        assert_eq!(geometry.triangle_count(), 1);
    }
}
