//! Registration of parts and their parent relations.
//!
//! Parents must be registered before their children. That ordering rule is
//! what keeps the parent relation a forest: a part can only point at
//! something that already existed when it was added, so no cycle can form.

use std::collections::HashMap;

use log::debug;

use super::part::{GeometryHandle, Part};
use crate::error::{SceneError, SceneResult};
use crate::gfx::transform::Transform;

/// Owns every [`Part`] of a session, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PartRegistry {
    parts: Vec<Part>,
    index: HashMap<String, usize>,
    parent_index: Vec<Option<usize>>,
}

impl PartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part.
    ///
    /// # Errors
    ///
    /// - [`SceneError::DuplicateName`] if `name` is already registered
    /// - [`SceneError::UnknownParent`] if `parent` is given but not registered
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        geometry: GeometryHandle,
        parent: Option<&str>,
        relative: Transform,
    ) -> SceneResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(SceneError::DuplicateName { name });
        }

        let parent_idx = match parent {
            Some(parent_name) => Some(*self.index.get(parent_name).ok_or_else(|| {
                SceneError::UnknownParent {
                    child: name.clone(),
                    parent: parent_name.to_string(),
                }
            })?),
            None => None,
        };

        debug!(
            "Registered part '{}' (parent: {})",
            name,
            parent.unwrap_or("<world>")
        );

        self.index.insert(name.clone(), self.parts.len());
        self.parent_index.push(parent_idx);
        self.parts.push(Part::new(
            name,
            geometry,
            parent.map(str::to_string),
            relative,
        ));
        Ok(())
    }

    /// Look up a part by name.
    ///
    /// # Errors
    ///
    /// [`SceneError::NotFound`] if no such part is registered.
    pub fn get_part(&self, name: &str) -> SceneResult<&Part> {
        self.position(name).map(|idx| &self.parts[idx])
    }

    /// Replace a part's relative transform. Absolute poses must be resolved
    /// again afterwards.
    pub fn set_relative_transform(&mut self, name: &str, relative: Transform) -> SceneResult<()> {
        let idx = self.position(name)?;
        self.parts[idx].set_relative_transform(relative);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Parts in registration order (parents always precede children)
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Direct children of `name`, in registration order
    pub fn children(&self, name: &str) -> SceneResult<Vec<&Part>> {
        let idx = self.position(name)?;
        Ok(self
            .parts
            .iter()
            .zip(&self.parent_index)
            .filter(|(_, parent)| **parent == Some(idx))
            .map(|(part, _)| part)
            .collect())
    }

    /// Parts without a parent
    pub fn roots(&self) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.is_root()).collect()
    }

    /// Names along the parent chain, root first and `name` last
    pub fn chain(&self, name: &str) -> SceneResult<Vec<&str>> {
        let mut chain: Vec<&str> = self
            .ancestry(self.position(name)?)
            .map(|idx| self.parts[idx].name())
            .collect();
        chain.reverse();
        Ok(chain)
    }

    pub(crate) fn position(&self, name: &str) -> SceneResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::NotFound {
                name: name.to_string(),
            })
    }

    pub(crate) fn part_at(&self, idx: usize) -> &Part {
        &self.parts[idx]
    }

    pub(crate) fn parent_of(&self, idx: usize) -> Option<usize> {
        self.parent_index[idx]
    }

    /// Indices from `idx` up to its root, `idx` first
    pub(crate) fn ancestry(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(idx), move |&current| self.parent_index[current])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::GeometryData;
    use std::sync::Arc;

    fn geometry() -> GeometryHandle {
        Arc::new(GeometryData::new())
    }

    fn sample_registry() -> PartRegistry {
        let mut registry = PartRegistry::new();
        registry
            .add_part("root", geometry(), None, Transform::identity())
            .unwrap();
        registry
            .add_part("mid", geometry(), Some("root"), Transform::identity())
            .unwrap();
        registry
            .add_part("leaf", geometry(), Some("mid"), Transform::identity())
            .unwrap();
        registry
            .add_part("sibling", geometry(), Some("root"), Transform::identity())
            .unwrap();
        registry
    }

    #[test]
    fn test_add_and_get() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());

        let leaf = registry.get_part("leaf").unwrap();
        assert_eq!(leaf.name(), "leaf");
        assert_eq!(leaf.parent(), Some("mid"));
        assert!(!leaf.is_root());
    }

    #[test]
    fn test_duplicate_name_fails() {
        let mut registry = sample_registry();
        let err = registry
            .add_part("mid", geometry(), None, Transform::identity())
            .unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName { name } if name == "mid"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_unknown_parent_fails() {
        let mut registry = PartRegistry::new();
        let err = registry
            .add_part("child", geometry(), Some("parent"), Transform::identity())
            .unwrap_err();
        assert!(matches!(
            err,
            SceneError::UnknownParent { ref child, ref parent } if child == "child" && parent == "parent"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_missing_part_fails() {
        let registry = sample_registry();
        assert!(matches!(
            registry.get_part("ghost"),
            Err(SceneError::NotFound { .. })
        ));
    }

    #[test]
    fn test_hierarchy_queries() {
        let registry = sample_registry();

        let roots: Vec<&str> = registry.roots().iter().map(|p| p.name()).collect();
        assert_eq!(roots, vec!["root"]);

        let children: Vec<&str> = registry
            .children("root")
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(children, vec!["mid", "sibling"]);

        assert_eq!(registry.chain("leaf").unwrap(), vec!["root", "mid", "leaf"]);
        assert_eq!(registry.chain("root").unwrap(), vec!["root"]);
    }

    #[test]
    fn test_set_relative_transform() {
        let mut registry = sample_registry();
        let moved = Transform::translation(1.0, 2.0, 3.0);
        registry.set_relative_transform("mid", moved).unwrap();
        assert_eq!(*registry.get_part("mid").unwrap().relative_transform(), moved);
        assert!(registry
            .set_relative_transform("ghost", moved)
            .is_err());
    }
}
