//! # Rigid Transforms
//!
//! [`Transform`] wraps a cgmath `Matrix4<f64>` holding a rotation block and a
//! translation column. Every constructor in this module produces a pure
//! rotation (orthonormal, determinant +1) or identity in the rotation block,
//! so no shear or scale ever enters a composed chain.
//!
//! ## Composition order
//!
//! `a.then(&b)` (and [`compose`]) applies `a` first, in the child's local
//! frame, then `b` in the parent's frame. The resulting matrix is `b · a`.

use std::fmt;
use std::str::FromStr;

use cgmath::{Matrix, Matrix3, Matrix4, Point3, Rad, SquareMatrix, Vector3, Vector4};

use crate::error::SceneError;

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

impl FromStr for Axis {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(SceneError::InvalidAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A 4x4 homogeneous transform with bottom row `[0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f64>,
}

impl Transform {
    /// The neutral element of composition
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Pure translation (`R = I`)
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::from_translation(Vector3::new(tx, ty, tz)),
        }
    }

    /// Pure translation from a vector
    pub fn from_translation(t: Vector3<f64>) -> Self {
        Self::translation(t.x, t.y, t.z)
    }

    /// Right-handed rotation of `angle` radians about a principal axis.
    ///
    /// Built directly from `cos`/`sin` of the angle; no re-orthonormalisation
    /// happens anywhere, so long chains of composed rotations drift slowly.
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        let angle = Rad(angle);
        let matrix = match axis {
            Axis::X => Matrix4::from_angle_x(angle),
            Axis::Y => Matrix4::from_angle_y(angle),
            Axis::Z => Matrix4::from_angle_z(angle),
        };
        Self { matrix }
    }

    /// Apply `self` first, then `outer`. Returns `outer · self`.
    pub fn then(&self, outer: &Transform) -> Transform {
        Transform {
            matrix: outer.matrix * self.matrix,
        }
    }

    /// Transform a point: `T · [p; 1]` with the homogeneous coordinate dropped.
    pub fn apply(&self, point: Point3<f64>) -> Point3<f64> {
        let v = self.matrix * point.to_homogeneous();
        Point3::new(v.x, v.y, v.z)
    }

    /// Rotate a direction vector; translation does not affect directions.
    pub fn apply_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.rotation_block() * v
    }

    /// The translation column `t`
    pub fn translation_vector(&self) -> Vector3<f64> {
        self.matrix.w.truncate()
    }

    /// The upper-left 3x3 rotation block `R`
    pub fn rotation_block(&self) -> Matrix3<f64> {
        Matrix3::from_cols(
            self.matrix.x.truncate(),
            self.matrix.y.truncate(),
            self.matrix.z.truncate(),
        )
    }

    /// Raw column-major matrix
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Inverse of a rigid transform: `[Rᵀ | -Rᵀ t]`.
    ///
    /// Only valid while the rotation block is orthonormal, which holds for
    /// every transform built by this module.
    pub fn rigid_inverse(&self) -> Transform {
        let r_t = self.rotation_block().transpose();
        let t = -(r_t * self.translation_vector());
        let mut matrix = Matrix4::from(r_t);
        matrix.w = Vector4::new(t.x, t.y, t.z, 1.0);
        Transform { matrix }
    }

    /// Whether the rotation block is orthonormal with determinant +1 and the
    /// bottom row is `[0, 0, 0, 1]`, all within `eps`.
    pub fn is_rigid(&self, eps: f64) -> bool {
        let r = self.rotation_block();
        let should_be_identity = r.transpose() * r;
        let identity = Matrix3::<f64>::identity();
        let orthonormal = (0..3).all(|c| {
            (0..3).all(|row| (should_be_identity[c][row] - identity[c][row]).abs() <= eps)
        });
        let bottom = [self.matrix.x.w, self.matrix.y.w, self.matrix.z.w];

        orthonormal
            && (r.determinant() - 1.0).abs() <= eps
            && bottom.iter().all(|v| v.abs() <= eps)
            && (self.matrix.w.w - 1.0).abs() <= eps
    }

    /// Element-wise comparison within `eps`
    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        let a: &[f64; 16] = self.matrix.as_ref();
        let b: &[f64; 16] = other.matrix.as_ref();
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// `compose(a, b)` applies `a` first (local frame) and `b` second; the result
/// is the matrix product `b · a`. Associative, not commutative.
pub fn compose(a: &Transform, b: &Transform) -> Transform {
    a.then(b)
}
