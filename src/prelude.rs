//! # Tipper Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use tipper::prelude::*;
//!
//! let poses = build_scene(&dump_truck_parts(), &ProceduralLoader::new()).unwrap();
//! let plan = lift_plan(&poses, &LiftMotion::default()).unwrap();
//! let frames = animate(&plan, &poses).unwrap();
//!
//! assert_eq!(frames.len(), 100);
//! ```

// Re-export core application types
pub use crate::app::{AppConfig, TipperApp};
pub use crate::default;
pub use crate::error::{SceneError, SceneResult};

// Re-export graphics and scene types
pub use crate::gfx::geometry::{
    apply_and_emit, generate_cube, GeometryData, GeometryLoader, ObjLoader, ProceduralLoader,
};
pub use crate::gfx::rendering::{Color, Decoration, LogRenderer, RenderItem, Renderer};
pub use crate::gfx::scene::{build_scene, Part, PartRegistry, PartSpec, PoseMap, Scene};
pub use crate::gfx::transform::{compose, Axis, Transform};

// Re-export animation types
pub use crate::simulation::dump_truck::{dump_truck_parts, lift_plan, LiftMotion};
pub use crate::simulation::{animate, Animation, AnimationPlan, Animator, Frame};

// Re-export common external dependencies
pub use cgmath::{Deg, Point3, Rad, Vector3};
