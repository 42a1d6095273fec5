//! Frame generation for animation plans
//!
//! Every frame is a pure function of the plan, the base poses and the step
//! index. [`Animation`] precomputes what is shared between frames (the
//! attachment offsets of the riding parts) and can then produce any frame on
//! demand, or all of them in order.
//!
//! For step `i` of `n`:
//!
//! ```text
//! t      = i / (n - 1)
//! step   = T(lerp(start, end, t)) · R(axis, t · angle)
//! primary pose = step
//! rider pose   = step · inverse(base[primary]) · base[rider]
//! ```
//!
//! The rotation is about the world axis through the origin; the translation
//! then carries the rotated part to its interpolated position.

use cgmath::Vector3;
use log::{debug, info};

use crate::error::{SceneError, SceneResult};
use crate::gfx::scene::PoseMap;
use crate::gfx::transform::{compose, Transform};

use super::plan::AnimationPlan;

/// Absolute poses of the driven parts at one step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step: usize,
    /// Interpolation parameter in `[0, 1]`
    pub t: f64,
    pub poses: PoseMap,
}

/// Stateless frame generator
pub struct Animator;

impl Animator {
    /// Validate `plan` against `base_poses` and precompute rider offsets.
    ///
    /// # Errors
    ///
    /// - [`SceneError::InvalidPlan`] if the plan fails [`AnimationPlan::validate`]
    /// - [`SceneError::UnknownPart`] if a target part has no base pose
    pub fn prepare(plan: &AnimationPlan, base_poses: &PoseMap) -> SceneResult<Animation> {
        plan.validate()?;

        let base_of = |name: &str| -> SceneResult<Transform> {
            base_poses
                .get(name)
                .copied()
                .ok_or_else(|| SceneError::UnknownPart {
                    name: name.to_string(),
                })
        };

        let primary = plan.primary()?.to_string();
        let primary_inverse = base_of(&primary)?.rigid_inverse();

        let riders = plan.target_parts[1..]
            .iter()
            .map(|name| -> SceneResult<(String, Transform)> {
                // rider's authored pose expressed in the primary part's base frame
                let offset = compose(&base_of(name)?, &primary_inverse);
                Ok((name.clone(), offset))
            })
            .collect::<SceneResult<Vec<_>>>()?;

        debug!(
            "Prepared animation of '{}' with {} riders over {} steps",
            primary,
            riders.len(),
            plan.step_count
        );

        Ok(Animation {
            plan: plan.clone(),
            primary,
            riders,
        })
    }

    /// Every frame of `plan`, in step order.
    pub fn generate(plan: &AnimationPlan, base_poses: &PoseMap) -> SceneResult<Vec<Frame>> {
        let frames: Vec<Frame> = Self::prepare(plan, base_poses)?.iter().collect();
        info!("Generated {} animation frames", frames.len());
        Ok(frames)
    }
}

/// A validated plan ready to produce frames
#[derive(Debug, Clone)]
pub struct Animation {
    plan: AnimationPlan,
    primary: String,
    riders: Vec<(String, Transform)>,
}

impl Animation {
    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.plan.step_count
    }

    pub fn is_empty(&self) -> bool {
        self.plan.step_count == 0
    }

    /// Rigid offset of a riding part relative to the primary part's base pose
    pub fn offset_of(&self, name: &str) -> Option<&Transform> {
        self.riders
            .iter()
            .find(|(rider, _)| rider == name)
            .map(|(_, offset)| offset)
    }

    /// The transform that becomes the primary part's world pose at step `i`
    pub fn step_transform(&self, i: usize) -> Transform {
        let t = self.plan.parameter(i);
        let position = lerp(self.plan.start_translation, self.plan.end_translation, t);
        let angle = t * self.plan.rotation_angle_total;

        compose(
            &Transform::rotation(self.plan.rotation_axis, angle),
            &Transform::from_translation(position),
        )
    }

    /// Frame at step `i`, `None` past the last step
    pub fn frame(&self, i: usize) -> Option<Frame> {
        if i >= self.len() {
            return None;
        }

        let step = self.step_transform(i);
        let mut poses = PoseMap::new();
        poses.insert(self.primary.clone(), step);
        for (name, offset) in &self.riders {
            poses.insert(name.clone(), compose(offset, &step));
        }

        Some(Frame {
            step: i,
            t: self.plan.parameter(i),
            poses,
        })
    }

    /// Frames in step order; restartable by calling again
    pub fn iter(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.len()).filter_map(move |i| self.frame(i))
    }
}

/// Componentwise linear interpolation, exact at both ends
fn lerp(start: Vector3<f64>, end: Vector3<f64>, t: f64) -> Vector3<f64> {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::transform::Axis;
    use cgmath::{Matrix3, Point3, SquareMatrix};
    use std::f64::consts::FRAC_PI_2;

    fn base_poses() -> PoseMap {
        let mut poses = PoseMap::new();
        let body = Transform::translation(2.0, 0.0, 1.0);
        poses.insert("body".to_string(), body);
        poses.insert(
            "cap".to_string(),
            Transform::translation(0.5, 0.0, 0.0).then(&body),
        );
        poses.insert("other".to_string(), Transform::translation(9.0, 9.0, 9.0));
        poses
    }

    fn plan(steps: usize) -> AnimationPlan {
        AnimationPlan::new(["body", "cap"])
            .with_translation(Vector3::new(2.0, 0.0, 1.0), Vector3::new(2.0, 0.0, 3.0))
            .with_rotation(Axis::Z, FRAC_PI_2)
            .with_steps(steps)
    }

    #[test]
    fn test_frame_count_and_order() {
        let frames = Animator::generate(&plan(7), &base_poses()).unwrap();
        assert_eq!(frames.len(), 7);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.step, i);
            assert_eq!(frame.poses.len(), 2);
        }
    }

    #[test]
    fn test_endpoints() {
        let frames = Animator::generate(&plan(10), &base_poses()).unwrap();

        let first = &frames[0].poses["body"];
        assert_eq!(first.translation_vector(), Vector3::new(2.0, 0.0, 1.0));
        assert_eq!(first.rotation_block(), Matrix3::identity());

        let last = &frames[9].poses["body"];
        assert_eq!(last.translation_vector(), Vector3::new(2.0, 0.0, 3.0));
        let expected = Transform::rotation(Axis::Z, FRAC_PI_2).rotation_block();
        assert_eq!(last.rotation_block(), expected);
    }

    #[test]
    fn test_parameter_strictly_increasing() {
        let frames = Animator::generate(&plan(25), &base_poses()).unwrap();
        assert_eq!(frames.first().unwrap().t, 0.0);
        assert_eq!(frames.last().unwrap().t, 1.0);
        for pair in frames.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn test_rider_keeps_offset() {
        let animation = Animator::prepare(&plan(5), &base_poses()).unwrap();
        let offset = animation.offset_of("cap").unwrap();
        assert!(offset.approx_eq(&Transform::translation(0.5, 0.0, 0.0), 1e-12));

        for frame in animation.iter() {
            let body = frame.poses["body"];
            let cap = frame.poses["cap"];
            let expected = compose(offset, &body);
            assert!(cap.approx_eq(&expected, 1e-12));
        }

        // at the end the 0.5 x-offset has been swung onto +y
        let last = animation.frame(4).unwrap();
        let p = last.poses["cap"].apply(Point3::new(0.0, 0.0, 0.0));
        assert!((p.x - 2.0).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
        assert!((p.z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_frames_independent_of_consumption_order() {
        let animation = Animator::prepare(&plan(6), &base_poses()).unwrap();
        let forward: Vec<Frame> = animation.iter().collect();
        let backward: Vec<Frame> = (0..6).rev().filter_map(|i| animation.frame(i)).collect();
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a, b);
        }
        assert!(animation.frame(6).is_none());
        assert_eq!(animation.iter().count(), animation.len());
    }

    #[test]
    fn test_untargeted_parts_are_not_driven() {
        let frames = Animator::generate(&plan(3), &base_poses()).unwrap();
        assert!(frames.iter().all(|f| !f.poses.contains_key("other")));
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let err = Animator::generate(&plan(1), &base_poses()).unwrap_err();
        assert!(matches!(err, SceneError::InvalidPlan { .. }));
    }

    #[test]
    fn test_unknown_part_rejected() {
        let bad = AnimationPlan::new(["body", "ghost"]).with_steps(3);
        let err = Animator::generate(&bad, &base_poses()).unwrap_err();
        assert!(matches!(err, SceneError::UnknownPart { name } if name == "ghost"));

        let bad_primary = AnimationPlan::new(["ghost"]).with_steps(3);
        assert!(matches!(
            Animator::prepare(&bad_primary, &base_poses()),
            Err(SceneError::UnknownPart { .. })
        ));
    }
}
