//! Rigid transforms and quaternion helpers
//!
//! Quaternions are stored as `[x, y, z, w]` everywhere in sceneviz, matching the
//! layout the viewers expect in the manifest.

use crate::error::{Error, Result};
use crate::point::{Point3f, Vector3f};
use log::warn;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion};

/// A rotation quaternion in `[x, y, z, w]` order
pub type QuaternionXyzw = [f32; 4];

/// A 3x3 rotation matrix in row-major order
pub type RotationRows = [[f32; 3]; 3];

/// The identity rotation
pub const IDENTITY_QUATERNION: QuaternionXyzw = [0.0, 0.0, 0.0, 1.0];

/// Normalize a quaternion, failing for zero or non-finite input
pub fn try_normalize_quaternion(q: QuaternionXyzw) -> Result<QuaternionXyzw> {
    let quat = Quaternion::new(q[3], q[0], q[1], q[2]);
    let norm = quat.norm();
    if !norm.is_finite() || norm < 1e-12 {
        return Err(Error::DegenerateGeometry(format!(
            "quaternion {:?} cannot be normalized",
            q
        )));
    }
    let c = quat.normalize().coords;
    Ok([c.x, c.y, c.z, c.w])
}

/// Normalize a quaternion, falling back to the identity rotation when it is degenerate
pub fn normalize_quaternion(q: QuaternionXyzw) -> QuaternionXyzw {
    match try_normalize_quaternion(q) {
        Ok(normalized) => normalized,
        Err(e) => {
            warn!("{}; using identity rotation", e);
            IDENTITY_QUATERNION
        }
    }
}

/// Rotation matrix of an `[x, y, z, w]` quaternion
pub fn quaternion_to_matrix(q: QuaternionXyzw) -> Matrix3<f32> {
    let [x, y, z, w] = normalize_quaternion(q);
    UnitQuaternion::new_unchecked(Quaternion::new(w, x, y, z))
        .to_rotation_matrix()
        .into_inner()
}

/// Quaternion of the rotation `roll` about x, then `pitch` about y, then `yaw` about z (radians)
pub fn euler_to_quaternion(roll: f32, pitch: f32, yaw: f32) -> QuaternionXyzw {
    let c = UnitQuaternion::from_euler_angles(roll, pitch, yaw).into_inner().coords;
    [c.x, c.y, c.z, c.w]
}

/// Matrix from row-major rows
pub fn matrix_from_rows(rows: &RotationRows) -> Matrix3<f32> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2],
        rows[1][0], rows[1][1], rows[1][2],
        rows[2][0], rows[2][1], rows[2][2],
    )
}

/// A rotation followed by a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    pub rotation: Matrix3<f32>,
    pub translation: Vector3f,
}

impl RigidTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3f::zeros(),
        }
    }

    /// Create a transformation from a translation and an `[x, y, z, w]` quaternion
    pub fn from_quaternion(translation: Vector3f, rotation: QuaternionXyzw) -> Self {
        Self {
            rotation: quaternion_to_matrix(rotation),
            translation,
        }
    }

    /// Create a transformation from a translation and a row-major rotation matrix
    pub fn from_rotation_rows(translation: Vector3f, rows: &RotationRows) -> Self {
        Self {
            rotation: matrix_from_rows(rows),
            translation,
        }
    }

    /// Rotate then translate a point
    pub fn transform_point(&self, point: &Point3f) -> Point3f {
        Point3f::from(self.rotation * point.coords + self.translation)
    }

    /// Rotate a vector, ignoring the translation
    pub fn transform_vector(&self, vector: &Vector3f) -> Vector3f {
        self.rotation * vector
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn norm(q: QuaternionXyzw) -> f32 {
        q.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    #[test]
    fn test_normalized_quaternion_has_unit_norm() {
        let inputs = [
            [0.0, 0.0, 0.0, 2.0],
            [1.0, 2.0, 3.0, 4.0],
            [-0.3, 0.0, 7.5, -1.0],
            [1e-3, 0.0, 0.0, 0.0],
        ];
        for q in inputs {
            let n = try_normalize_quaternion(q).unwrap();
            assert!((norm(n) - 1.0).abs() < 1e-6, "{:?} -> {:?}", q, n);
        }
    }

    #[test]
    fn test_zero_quaternion_is_degenerate() {
        assert!(matches!(
            try_normalize_quaternion([0.0; 4]),
            Err(Error::DegenerateGeometry(_))
        ));
        assert_eq!(normalize_quaternion([0.0; 4]), IDENTITY_QUATERNION);
    }

    #[test]
    fn test_quaternion_matrix_rotates_about_z() {
        // 90 degrees about z
        let half = std::f32::consts::FRAC_PI_4;
        let transform = RigidTransform::from_quaternion(
            Vector3f::new(1.0, 0.0, 0.0),
            [0.0, 0.0, half.sin(), half.cos()],
        );
        let p = transform.transform_point(&Point3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_euler_yaw_matches_axis_angle() {
        let q = euler_to_quaternion(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        let half = std::f32::consts::FRAC_PI_4;
        assert_relative_eq!(q[2], half.sin(), epsilon = 1e-6);
        assert_relative_eq!(q[3], half.cos(), epsilon = 1e-6);
        assert_eq!(euler_to_quaternion(0.0, 0.0, 0.0), IDENTITY_QUATERNION);
    }

    #[test]
    fn test_rotation_rows_are_row_major() {
        let rows = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let transform = RigidTransform::from_rotation_rows(Vector3f::zeros(), &rows);
        let v = transform.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3f::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }
}
