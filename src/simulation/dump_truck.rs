// src/simulation/dump_truck.rs
//! The dump-truck rig
//!
//! Seven rigid parts, positioned relative to each other from the assembly
//! drawing:
//!
//! ```text
//! chassis ─┬─ pusher
//!          └─ slider ── arm1 ── arm2
//! container ── lid
//! ```
//!
//! The container is placed directly in the world frame; the lid rides on it.
//! The lift motion raises the container and turns it a quarter turn about the
//! world z-axis while the lid keeps its authored offset.

use std::f64::consts::FRAC_PI_2;

use cgmath::Vector3;

use crate::error::SceneResult;
use crate::gfx::rendering::Color;
use crate::gfx::scene::{PartSpec, PoseMap};
use crate::gfx::transform::Axis;
use crate::simulation::plan::AnimationPlan;

pub const CHASSIS: &str = "chassis";
pub const PUSHER: &str = "pusher";
pub const SLIDER: &str = "slider";
pub const ARM1: &str = "arm1";
pub const ARM2: &str = "arm2";
pub const CONTAINER: &str = "container";
pub const LID: &str = "lid";

/// Parts driven by the lift animation, primary first
pub const LIFTED_PARTS: [&str; 2] = [CONTAINER, LID];

/// Part specs in registration order (parents before children)
pub fn dump_truck_parts() -> Vec<PartSpec> {
    vec![
        PartSpec::new(CHASSIS, "dump_truck.obj").with_color(Color::GREY),
        PartSpec::new(PUSHER, "pusher.obj")
            .with_parent(CHASSIS)
            .with_translation(-0.075283, 0.73129, -0.19924)
            .with_color(Color::RED),
        PartSpec::new(SLIDER, "ramp.obj")
            .with_parent(CHASSIS)
            .with_translation(-0.2416, 2.2309, 0.19993)
            .with_color(Color::GREEN),
        PartSpec::new(ARM1, "arm1.obj")
            .with_parent(SLIDER)
            .with_translation(0.0, -0.8463, 0.07907)
            .with_color(Color::BLUE),
        PartSpec::new(ARM2, "arm2.obj")
            .with_parent(ARM1)
            .with_translation(0.0, -0.81879, 0.0)
            .with_color(Color::YELLOW),
        PartSpec::new(CONTAINER, "container.obj")
            .with_translation(-0.17888, 0.83539, 0.98371086)
            .with_color(Color::MAGENTA),
        PartSpec::new(LID, "lid.obj")
            .with_parent(CONTAINER)
            .with_translation(-0.03811, 0.0, 0.0)
            .with_color(Color::CYAN),
    ]
}

/// Parameters of the container lift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftMotion {
    pub lift: Vector3<f64>,
    pub axis: Axis,
    /// Radians
    pub angle: f64,
    pub steps: usize,
}

impl Default for LiftMotion {
    /// One metre up and a quarter turn about z over 100 steps
    fn default() -> Self {
        Self {
            lift: Vector3::new(0.0, 0.0, 1.0),
            axis: Axis::Z,
            angle: FRAC_PI_2,
            steps: 100,
        }
    }
}

/// Plan raising the container from its resolved base pose, lid riding along
pub fn lift_plan(base_poses: &PoseMap, motion: &LiftMotion) -> SceneResult<AnimationPlan> {
    AnimationPlan::lift_from(
        base_poses,
        LIFTED_PARTS,
        motion.lift,
        motion.axis,
        motion.angle,
        motion.steps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::ProceduralLoader;
    use crate::gfx::scene::build_scene;
    use crate::gfx::transform::Transform;

    #[test]
    fn test_rig_has_seven_parts_in_order() {
        let parts = dump_truck_parts();
        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![CHASSIS, PUSHER, SLIDER, ARM1, ARM2, CONTAINER, LID]);
    }

    #[test]
    fn test_arm2_pose_composes_whole_chain() {
        let poses = build_scene(&dump_truck_parts(), &ProceduralLoader::new()).unwrap();

        let expected = Transform::translation(0.0, -0.81879, 0.0)
            .then(&Transform::translation(0.0, -0.8463, 0.07907))
            .then(&Transform::translation(-0.2416, 2.2309, 0.19993))
            .then(&Transform::identity());
        assert!(poses[ARM2].approx_eq(&expected, 1e-12));

        let t = poses[ARM2].translation_vector();
        assert!((t.x - -0.2416).abs() < 1e-12);
        assert!((t.y - (2.2309 - 0.8463 - 0.81879)).abs() < 1e-12);
        assert!((t.z - (0.19993 + 0.07907)).abs() < 1e-12);
    }

    #[test]
    fn test_lift_plan_from_container_pose() {
        let poses = build_scene(&dump_truck_parts(), &ProceduralLoader::new()).unwrap();
        let plan = lift_plan(&poses, &LiftMotion::default()).unwrap();

        assert_eq!(plan.target_parts, vec![CONTAINER, LID]);
        assert_eq!(
            plan.start_translation,
            Vector3::new(-0.17888, 0.83539, 0.98371086)
        );
        assert!((plan.end_translation.z - 1.98371086).abs() < 1e-12);
        assert_eq!(plan.step_count, 100);
        assert_eq!(plan.rotation_axis, Axis::Z);
    }
}
