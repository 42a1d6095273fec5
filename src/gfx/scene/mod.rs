//! # Scene Management Module
//!
//! This module assembles a rig of rigid parts: registration with parent
//! relations, resolution of relative placements into absolute world poses,
//! and the [`Scene`] container that ties parts to their geometry and colours.
//!
//! ## Key Components
//!
//! - [`PartRegistry`] - Owns named parts in registration order
//! - [`Part`] - Geometry handle, optional parent and relative transform
//! - [`PoseResolver`] - Memoised relative-to-absolute composition
//! - [`Scene`] / [`build_scene`] - One-shot assembly from [`PartSpec`]s
//!
//! ## Usage
//!
//! ```rust
//! use tipper::gfx::geometry::ProceduralLoader;
//! use tipper::gfx::scene::{build_scene, PartSpec};
//!
//! let specs = vec![
//!     PartSpec::new("root", "root.obj").with_translation(1.0, 0.0, 0.0),
//!     PartSpec::new("mid", "mid.obj").with_parent("root").with_translation(0.0, 1.0, 0.0),
//!     PartSpec::new("leaf", "leaf.obj").with_parent("mid").with_translation(0.0, 0.0, 1.0),
//! ];
//!
//! let poses = build_scene(&specs, &ProceduralLoader::new()).unwrap();
//! let t = poses["leaf"].translation_vector();
//! assert_eq!((t.x, t.y, t.z), (1.0, 1.0, 1.0));
//! ```

pub mod part;
pub mod registry;
pub mod resolver;
pub mod scene;

// Re-export main types
pub use part::{GeometryHandle, Part};
pub use registry::PartRegistry;
pub use resolver::{PoseMap, PoseResolver};
pub use scene::{build_scene, PartSpec, Scene};
