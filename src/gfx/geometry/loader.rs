//! Geometry loading collaborators.
//!
//! [`GeometryLoader`] is the seam between the pose engine and wherever part
//! meshes come from. [`ObjLoader`] reads Wavefront OBJ files through `tobj`;
//! [`ProceduralLoader`] hands out a box for any name so a rig can be posed and
//! animated without assets on disk.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::{generate_cuboid, GeometryData};
use crate::error::{SceneError, SceneResult};

/// Produces the local-frame geometry for a named asset
pub trait GeometryLoader {
    /// Load the asset called `name`.
    ///
    /// Fails with [`SceneError::GeometryNotFound`] if the asset is missing.
    fn load(&self, name: &str) -> SceneResult<GeometryData>;
}

/// Loads OBJ files relative to a base directory
#[derive(Debug, Clone)]
pub struct ObjLoader {
    base_dir: PathBuf,
}

impl ObjLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl GeometryLoader for ObjLoader {
    fn load(&self, name: &str) -> SceneResult<GeometryData> {
        let path = self.base_dir.join(name);
        if !path.is_file() {
            return Err(SceneError::GeometryNotFound {
                name: path.display().to_string(),
            });
        }

        let (models, _materials) = tobj::load_obj(
            &path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| SceneError::ObjLoad {
            name: name.to_string(),
            source,
        })?;

        // All models in the file belong to the same rigid part
        let mut data = GeometryData::new();
        for model in &models {
            let mesh = &model.mesh;
            let base = data.vertices.len() as u32;

            let positions: Vec<[f64; 3]> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| [f64::from(p[0]), f64::from(p[1]), f64::from(p[2])])
                .collect();

            let normals = if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| [f64::from(n[0]), f64::from(n[1]), f64::from(n[2])])
                    .collect()
            } else {
                warn!("'{}' has no usable normals, computing from faces", model.name);
                calculate_face_normals(&positions, &mesh.indices)
            };

            data.vertices.extend(positions);
            data.normals.extend(normals);
            data.indices.extend(mesh.indices.iter().map(|i| i + base));
        }

        debug!(
            "Loaded '{}': {} models, {} vertices, {} triangles",
            name,
            models.len(),
            data.vertex_count(),
            data.triangle_count()
        );

        Ok(data)
    }
}

/// Average the face normals touching each vertex
pub fn calculate_face_normals(positions: &[[f64; 3]], indices: &[u32]) -> Vec<[f64; 3]> {
    let mut normals = vec![[0.0; 3]; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
            continue;
        }
        let (v0, v1, v2) = (positions[i0], positions[i1], positions[i2]);

        let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let face_normal = [
            edge1[1] * edge2[2] - edge1[2] * edge2[1],
            edge1[2] * edge2[0] - edge1[0] * edge2[2],
            edge1[0] * edge2[1] - edge1[1] * edge2[0],
        ];

        for idx in [i0, i1, i2] {
            for axis in 0..3 {
                normals[idx][axis] += face_normal[axis];
            }
        }
    }

    for n in &mut normals {
        let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if length > 0.0 {
            n.iter_mut().for_each(|c| *c /= length);
        }
    }

    normals
}

/// Returns the same box for every asset name
#[derive(Debug, Clone)]
pub struct ProceduralLoader {
    size: [f64; 3],
}

impl ProceduralLoader {
    pub fn new() -> Self {
        Self {
            size: [0.25, 0.25, 0.25],
        }
    }

    /// Set the full edge lengths of the generated box (builder pattern)
    pub fn with_size(mut self, x: f64, y: f64, z: f64) -> Self {
        self.size = [x, y, z];
        self
    }
}

impl Default for ProceduralLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryLoader for ProceduralLoader {
    fn load(&self, name: &str) -> SceneResult<GeometryData> {
        debug!("Generating procedural box for '{}'", name);
        Ok(generate_cuboid(self.size[0], self.size[1], self.size[2]))
    }
}
