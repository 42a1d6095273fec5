// src/simulation/mod.rs
//! Animation system
//!
//! Turns an [`AnimationPlan`] and a set of resolved base poses into a finite,
//! ordered sequence of [`Frame`]s. Generation is pure; pacing and drawing are
//! left to whoever consumes the frames (see [`crate::app::TipperApp`]).

pub mod animator;
pub mod dump_truck;
pub mod plan;

pub use animator::{Animation, Animator, Frame};
pub use plan::AnimationPlan;

use crate::error::SceneResult;
use crate::gfx::scene::PoseMap;

/// Every frame of `plan` driven from `base_poses`, in step order
pub fn animate(plan: &AnimationPlan, base_poses: &PoseMap) -> SceneResult<Vec<Frame>> {
    Animator::generate(plan, base_poses)
}
