//! # Graphics Module
//!
//! Everything that positions geometry in space: rigid transforms, part
//! geometry and its loaders, the part registry with pose resolution, and the
//! rendering boundary.
//!
//! ## Architecture Overview
//!
//! - **Transforms** ([`transform`]) - 4x4 rigid transforms and composition
//! - **Geometry** ([`geometry`]) - Part meshes, loaders, copy-on-transform placement
//! - **Scene Management** ([`scene`]) - Part registry, pose resolver, scene assembly
//! - **Rendering** ([`rendering`]) - Renderer trait and non-graphical renderers
//!
//! [`Scene`]: scene::Scene

pub mod geometry;
pub mod rendering;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use scene::Scene;
pub use transform::{compose, Axis, Transform};
