use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use super::part::Part;
use super::registry::PartRegistry;
use super::resolver::PoseMap;
use crate::error::SceneResult;
use crate::gfx::geometry::{apply_and_emit, GeometryLoader};
use crate::gfx::rendering::{Color, RenderItem};
use crate::gfx::transform::Transform;

/// Authoring record for one part of a rig
#[derive(Debug, Clone)]
pub struct PartSpec {
    pub name: String,
    /// Asset name handed to the geometry loader
    pub asset: String,
    pub parent: Option<String>,
    pub relative: Transform,
    pub color: Color,
}

impl PartSpec {
    /// A root part at the world origin
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
            parent: None,
            relative: Transform::identity(),
            color: Color::default(),
        }
    }

    /// Set the parent part (builder pattern)
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set translation relative to the parent (builder pattern)
    pub fn with_translation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.relative = Transform::translation(x, y, z);
        self
    }

    /// Set the full relative transform (builder pattern)
    pub fn with_transform(mut self, relative: Transform) -> Self {
        self.relative = relative;
        self
    }

    /// Set display colour (builder pattern)
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A registered rig together with its resolved initial poses and display colours
pub struct Scene {
    registry: PartRegistry,
    poses: PoseMap,
    colors: HashMap<String, Color>,
}

impl Scene {
    /// Load every part's geometry, register the parts in order and resolve
    /// their absolute poses.
    ///
    /// Specs must list parents before children.
    pub fn build(specs: &[PartSpec], loader: &dyn GeometryLoader) -> SceneResult<Self> {
        let mut registry = PartRegistry::new();
        let mut colors = HashMap::new();

        for spec in specs {
            let geometry = Arc::new(loader.load(&spec.asset)?);
            registry.add_part(
                spec.name.clone(),
                geometry,
                spec.parent.as_deref(),
                spec.relative,
            )?;
            colors.insert(spec.name.clone(), spec.color);
        }

        let poses = registry.resolve_all();
        info!("Scene built with {} parts", registry.len());

        Ok(Self {
            registry,
            poses,
            colors,
        })
    }

    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    /// Absolute poses resolved at build time (or on the last [`Scene::refresh`])
    pub fn poses(&self) -> &PoseMap {
        &self.poses
    }

    pub fn get_part(&self, name: &str) -> SceneResult<&Part> {
        self.registry.get_part(name)
    }

    /// Display colour of a part, default grey if none was authored
    pub fn color_of(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or_default()
    }

    /// Change a part's relative transform and re-resolve every pose
    pub fn set_relative_transform(&mut self, name: &str, relative: Transform) -> SceneResult<()> {
        self.registry.set_relative_transform(name, relative)?;
        self.refresh();
        Ok(())
    }

    pub fn refresh(&mut self) {
        self.poses = self.registry.resolve_all();
    }

    /// Transformed copies of the named parts under the given poses.
    ///
    /// Parts missing from `poses` are skipped so callers can pass a partial
    /// frame.
    pub fn render_items<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
        poses: &PoseMap,
    ) -> SceneResult<Vec<RenderItem>> {
        let mut items = Vec::new();
        for name in names {
            let Some(pose) = poses.get(name) else {
                continue;
            };
            let part = self.registry.get_part(name)?;
            items.push(RenderItem {
                name: name.to_string(),
                geometry: apply_and_emit(part.geometry(), pose),
                color: self.color_of(name),
            });
        }
        Ok(items)
    }

    /// Every part placed at its initial absolute pose
    pub fn initial_render_items(&self) -> SceneResult<Vec<RenderItem>> {
        self.render_items(self.registry.parts().map(Part::name), &self.poses)
    }
}

/// One-shot resolution of a rig description into absolute poses
pub fn build_scene(specs: &[PartSpec], loader: &dyn GeometryLoader) -> SceneResult<PoseMap> {
    Ok(Scene::build(specs, loader)?.poses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use crate::gfx::geometry::ProceduralLoader;
    use cgmath::Vector3;

    fn specs() -> Vec<PartSpec> {
        vec![
            PartSpec::new("base", "base.obj").with_translation(1.0, 0.0, 0.0),
            PartSpec::new("top", "top.obj")
                .with_parent("base")
                .with_translation(0.0, 0.0, 2.0)
                .with_color(Color::new(1.0, 0.0, 0.0)),
        ]
    }

    #[test]
    fn test_build_scene_resolves_chain() {
        let poses = build_scene(&specs(), &ProceduralLoader::new()).unwrap();
        assert_eq!(poses["top"].translation_vector(), Vector3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_build_scene_rejects_child_before_parent() {
        let mut out_of_order = specs();
        out_of_order.reverse();
        let err = Scene::build(&out_of_order, &ProceduralLoader::new())
            .err()
            .unwrap();
        assert!(matches!(err, SceneError::UnknownParent { .. }));
    }

    #[test]
    fn test_colors_and_render_items() {
        let scene = Scene::build(&specs(), &ProceduralLoader::new()).unwrap();
        assert_eq!(scene.color_of("top"), Color::new(1.0, 0.0, 0.0));
        assert_eq!(scene.color_of("base"), Color::default());

        let items = scene.initial_render_items().unwrap();
        assert_eq!(items.len(), 2);
        let centroid = items[1].geometry.centroid().unwrap();
        assert!((centroid[2] - 2.0).abs() < 1e-12);

        // the stored geometry is still centred on its local origin
        let local = scene.get_part("top").unwrap().geometry().centroid().unwrap();
        assert!(local[2].abs() < 1e-12);
    }

    #[test]
    fn test_set_relative_transform_refreshes_poses() {
        let mut scene = Scene::build(&specs(), &ProceduralLoader::new()).unwrap();
        scene
            .set_relative_transform("base", Transform::translation(0.0, 3.0, 0.0))
            .unwrap();
        assert_eq!(
            scene.poses()["top"].translation_vector(),
            Vector3::new(0.0, 3.0, 2.0)
        );
    }
}
