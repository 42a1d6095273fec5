//! Relative-to-absolute pose resolution.
//!
//! A part's world pose is the product of the relative transforms along its
//! parent chain, root applied first and the part's own relative transform
//! applied last:
//!
//! ```text
//! world(arm2) = chassis · slider · arm1 · arm2
//! ```
//!
//! Within one pass every part is resolved at most once; a part reuses its
//! parent's cached world pose instead of walking the whole chain again.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::registry::PartRegistry;
use crate::error::SceneResult;
use crate::gfx::transform::Transform;

/// Part name to world-frame transform. Each resolution builds a fresh map.
pub type PoseMap = BTreeMap<String, Transform>;

/// One resolution pass over a registry, with a per-part cache.
pub struct PoseResolver<'a> {
    registry: &'a PartRegistry,
    cache: Vec<Option<Transform>>,
}

impl<'a> PoseResolver<'a> {
    pub fn new(registry: &'a PartRegistry) -> Self {
        Self {
            registry,
            cache: vec![None; registry.len()],
        }
    }

    /// World pose of the part at `idx`, resolving unresolved ancestors first.
    fn world_at(&mut self, idx: usize) -> Transform {
        if let Some(cached) = self.cache[idx] {
            return cached;
        }

        // Climb until a resolved ancestor (or past the root), then compose downward
        let mut pending = Vec::new();
        let mut current = Some(idx);
        let mut base = Transform::identity();
        while let Some(i) = current {
            if let Some(cached) = self.cache[i] {
                base = cached;
                break;
            }
            pending.push(i);
            current = self.registry.parent_of(i);
        }

        for &i in pending.iter().rev() {
            let part = self.registry.part_at(i);
            base = part.relative_transform().then(&base);
            trace!("Resolved '{}' -> {:?}", part.name(), base.translation_vector());
            self.cache[i] = Some(base);
        }

        base
    }

    /// World pose of a single named part.
    pub fn resolve(&mut self, name: &str) -> SceneResult<Transform> {
        let idx = self.registry.position(name)?;
        Ok(self.world_at(idx))
    }

    /// World poses of every registered part.
    pub fn resolve_all(mut self) -> PoseMap {
        let poses: PoseMap = (0..self.registry.len())
            .map(|idx| {
                let world = self.world_at(idx);
                (self.registry.part_at(idx).name().to_string(), world)
            })
            .collect();
        debug!("Resolved {} absolute poses", poses.len());
        poses
    }
}

impl PartRegistry {
    /// Absolute world pose of every part. Pure: unchanged registry state
    /// yields an identical map.
    pub fn resolve_all(&self) -> PoseMap {
        PoseResolver::new(self).resolve_all()
    }

    /// Absolute world pose of one part.
    pub fn resolve(&self, name: &str) -> SceneResult<Transform> {
        PoseResolver::new(self).resolve(name)
    }
}
