//! Animation plans
//!
//! An [`AnimationPlan`] describes one timed motion of a group of parts: a
//! straight-line translation of the primary part combined with a rotation
//! about a principal axis, sampled at a fixed number of steps.

use cgmath::Vector3;

use crate::error::{SceneError, SceneResult};
use crate::gfx::scene::PoseMap;
use crate::gfx::transform::Axis;

/// Immutable description of a lift-and-turn motion.
///
/// The first entry of `target_parts` is the primary driven part; every other
/// entry rides along with it, keeping its authored offset.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan {
    pub target_parts: Vec<String>,
    pub start_translation: Vector3<f64>,
    pub end_translation: Vector3<f64>,
    pub rotation_axis: Axis,
    /// Total rotation in radians, reached at the last step
    pub rotation_angle_total: f64,
    pub step_count: usize,
}

impl AnimationPlan {
    /// A plan driving `target_parts` with no motion over 100 steps
    pub fn new<I, S>(target_parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_parts: target_parts.into_iter().map(Into::into).collect(),
            start_translation: Vector3::new(0.0, 0.0, 0.0),
            end_translation: Vector3::new(0.0, 0.0, 0.0),
            rotation_axis: Axis::Z,
            rotation_angle_total: 0.0,
            step_count: 100,
        }
    }

    /// Set start and end translation of the primary part (builder pattern)
    pub fn with_translation(mut self, start: Vector3<f64>, end: Vector3<f64>) -> Self {
        self.start_translation = start;
        self.end_translation = end;
        self
    }

    /// Set rotation axis and total angle in radians (builder pattern)
    pub fn with_rotation(mut self, axis: Axis, angle: f64) -> Self {
        self.rotation_axis = axis;
        self.rotation_angle_total = angle;
        self
    }

    /// Set the number of steps (builder pattern)
    pub fn with_steps(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// Start from the primary part's resolved translation and move it by
    /// `lift`.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidPlan`] for an empty target list,
    /// [`SceneError::UnknownPart`] if the primary part has no base pose.
    pub fn lift_from<I, S>(
        base_poses: &PoseMap,
        target_parts: I,
        lift: Vector3<f64>,
        axis: Axis,
        angle: f64,
        step_count: usize,
    ) -> SceneResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let plan = Self::new(target_parts);
        let primary = plan.primary()?;
        let start = base_poses
            .get(primary)
            .ok_or_else(|| SceneError::UnknownPart {
                name: primary.to_string(),
            })?
            .translation_vector();

        Ok(plan
            .with_translation(start, start + lift)
            .with_rotation(axis, angle)
            .with_steps(step_count))
    }

    /// The part whose pose the step transform replaces
    pub fn primary(&self) -> SceneResult<&str> {
        self.target_parts
            .first()
            .map(String::as_str)
            .ok_or_else(|| SceneError::invalid_plan("no target parts"))
    }

    /// Interpolation parameter of step `i`, clamped to `[0, 1]`
    pub fn parameter(&self, i: usize) -> f64 {
        if self.step_count < 2 {
            return 0.0;
        }
        (i as f64 / (self.step_count - 1) as f64).clamp(0.0, 1.0)
    }

    /// Reject plans that cannot produce a frame sequence.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidPlan`] for fewer than two steps, no targets, a
    /// repeated target or non-finite motion parameters.
    pub fn validate(&self) -> SceneResult<()> {
        if self.step_count < 2 {
            return Err(SceneError::invalid_plan(format!(
                "step count must be at least 2, got {}",
                self.step_count
            )));
        }
        self.primary()?;

        for (i, name) in self.target_parts.iter().enumerate() {
            if self.target_parts[..i].contains(name) {
                return Err(SceneError::invalid_plan(format!(
                    "part '{}' listed twice",
                    name
                )));
            }
        }

        let numbers = [
            self.start_translation.x,
            self.start_translation.y,
            self.start_translation.z,
            self.end_translation.x,
            self.end_translation.y,
            self.end_translation.z,
            self.rotation_angle_total,
        ];
        if numbers.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::invalid_plan("non-finite translation or angle"));
        }
        Ok(())
    }
}
