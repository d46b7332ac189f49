//! Point, vector and color types shared by all scene elements

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// An 8-bit RGB color, always 0-255 per channel
pub type Rgb = [u8; 3];

/// Gray used when no colors are supplied
pub const DEFAULT_GRAY: Rgb = [50, 50, 50];

/// Clamp an alpha value into `[0, 1]`.
///
/// NaN maps to fully transparent so the result is always a valid alpha.
pub fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        return 0.0;
    }
    alpha.clamp(0.0, 1.0)
}

/// Point as a plain `[x, y, z]` array for JSON records
pub(crate) fn point_array(p: &Point3f) -> [f32; 3] {
    [p.x, p.y, p.z]
}

/// Vector as a plain `[x, y, z]` array for JSON records
pub(crate) fn vector_array(v: &Vector3f) -> [f32; 3] {
    [v.x, v.y, v.z]
}
