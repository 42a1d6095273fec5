//! # Primitive Shape Generation
//!
//! Procedural stand-ins for part geometry, used when no asset files are
//! available. All shapes are generated with outward normals.

use super::GeometryData;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
pub fn generate_cube() -> GeometryData {
    generate_cuboid(1.0, 1.0, 1.0)
}

/// Generate an axis-aligned box centered at the origin
///
/// # Arguments
/// * `size_x`, `size_y`, `size_z` - Full edge lengths along each axis
///
/// Each face gets its own four vertices so normals stay flat.
pub fn generate_cuboid(size_x: f64, size_y: f64, size_z: f64) -> GeometryData {
    let (hx, hy, hz) = (size_x * 0.5, size_y * 0.5, size_z * 0.5);
    let mut data = GeometryData::new();

    // (normal, four corners counter-clockwise seen from outside)
    #[rustfmt::skip]
    let faces: [([f64; 3], [[f64; 3]; 4]); 6] = [
        // +Z
        ([0.0, 0.0, 1.0], [[-hx, -hy,  hz], [ hx, -hy,  hz], [ hx,  hy,  hz], [-hx,  hy,  hz]]),
        // -Z
        ([0.0, 0.0, -1.0], [[-hx, -hy, -hz], [-hx,  hy, -hz], [ hx,  hy, -hz], [ hx, -hy, -hz]]),
        // -X
        ([-1.0, 0.0, 0.0], [[-hx, -hy, -hz], [-hx, -hy,  hz], [-hx,  hy,  hz], [-hx,  hy, -hz]]),
        // +X
        ([1.0, 0.0, 0.0], [[ hx, -hy,  hz], [ hx, -hy, -hz], [ hx,  hy, -hz], [ hx,  hy,  hz]]),
        // +Y
        ([0.0, 1.0, 0.0], [[-hx,  hy,  hz], [ hx,  hy,  hz], [ hx,  hy, -hz], [-hx,  hy, -hz]]),
        // -Y
        ([0.0, -1.0, 0.0], [[-hx, -hy, -hz], [ hx, -hy, -hz], [ hx, -hy,  hz], [-hx, -hy,  hz]]),
    ];

    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        for corner in corners {
            data.vertices.push(corner);
            data.normals.push(normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), cube.vertices.len());
    }

    #[test]
    fn test_cuboid_extents() {
        let cuboid = generate_cuboid(2.0, 4.0, 6.0);
        let (min, max) = cuboid.bounds().unwrap();
        assert_eq!(min, [-1.0, -2.0, -3.0]);
        assert_eq!(max, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_cube_indices_in_range() {
        let cube = generate_cube();
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertex_count()));
    }
}
