//! Copy-on-transform placement of part geometry.
//!
//! The stored geometry of a part stays in its local frame for the whole
//! session; every frame places a fresh copy.

use cgmath::{InnerSpace, Point3, Vector3};

use super::GeometryData;
use crate::gfx::transform::Transform;

/// Return a copy of `geometry` positioned by `transform`.
///
/// Positions go through the full homogeneous transform, normals through the
/// rotation block only. `geometry` itself is never touched.
pub fn apply_and_emit(geometry: &GeometryData, transform: &Transform) -> GeometryData {
    let vertices = geometry
        .vertices
        .iter()
        .map(|v| {
            let p = transform.apply(Point3::new(v[0], v[1], v[2]));
            [p.x, p.y, p.z]
        })
        .collect();

    let normals = geometry
        .normals
        .iter()
        .map(|n| {
            let rotated = transform.apply_vector(Vector3::new(n[0], n[1], n[2]));
            let len = rotated.magnitude();
            let rotated = if len > 0.0 { rotated / len } else { rotated };
            [rotated.x, rotated.y, rotated.z]
        })
        .collect();

    GeometryData {
        vertices,
        normals,
        indices: geometry.indices.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;
    use crate::gfx::transform::Axis;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_apply_leaves_original_untouched() {
        let original = generate_cube();
        let pristine = original.clone();

        let transform = Transform::translation(3.0, -1.0, 0.5).then(&Transform::rotation(Axis::Z, 0.7));
        let placed = apply_and_emit(&original, &transform);
        assert_ne!(placed, original);

        // re-applying identity to the stored geometry reproduces the pristine copy
        let again = apply_and_emit(&original, &Transform::identity());
        assert_eq!(again, pristine);
        assert_eq!(original, pristine);
    }

    #[test]
    fn test_apply_moves_vertices_and_rotates_normals() {
        let geometry = GeometryData {
            vertices: vec![[1.0, 0.0, 0.0]],
            normals: vec![[1.0, 0.0, 0.0]],
            indices: Vec::new(),
        };
        let transform = Transform::rotation(Axis::Z, FRAC_PI_2).then(&Transform::translation(0.0, 0.0, 1.0));
        let placed = apply_and_emit(&geometry, &transform);

        let v = placed.vertices[0];
        assert!(v[0].abs() < 1e-12 && (v[1] - 1.0).abs() < 1e-12 && (v[2] - 1.0).abs() < 1e-12);

        // translation must not leak into normals
        let n = placed.normals[0];
        assert!(n[0].abs() < 1e-12 && (n[1] - 1.0).abs() < 1e-12 && n[2].abs() < 1e-12);
    }

    #[test]
    fn test_apply_keeps_topology() {
        let cube = generate_cube();
        let placed = apply_and_emit(&cube, &Transform::translation(1.0, 1.0, 1.0));
        assert_eq!(placed.indices, cube.indices);
        assert_eq!(placed.vertex_count(), cube.vertex_count());
    }
}
