//! Parametric superquadric surface with deformations applied on evaluation

use super::deform::Deformation;
use nalgebra::Vector3;
use sceneviz_core::Superquadric;

/// `sign(base) * |base|^exponent`
pub fn signed_pow(base: f64, exponent: f64) -> f64 {
    base.signum() * base.abs().powf(exponent)
}

/// Superquadric in its local frame, u in [-pi, pi] around z, v in [-pi/2, pi/2] from pole to pole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperquadricSurface {
    pub scalings: Vector3<f64>,
    pub exponents: Vector3<f64>,
    pub deformation: Deformation,
}

impl SuperquadricSurface {
    pub fn new(scalings: Vector3<f64>, exponents: Vector3<f64>, deformation: Deformation) -> Self {
        Self {
            scalings,
            exponents,
            deformation,
        }
    }

    /// Local-frame surface of a scene element (placement is not applied here)
    pub fn from_element(superquadric: &Superquadric) -> Self {
        Self::new(
            superquadric.scalings().cast::<f64>(),
            superquadric.exponents().cast::<f64>(),
            Deformation::from_parameters(superquadric.tapering(), superquadric.bending()),
        )
    }

    /// Point on the undeformed surface
    pub fn undeformed_point(&self, u: f64, v: f64) -> Vector3<f64> {
        let [a, b, c] = [self.scalings.x, self.scalings.y, self.scalings.z];
        let [ex, ey, ez] = [
            2.0 / self.exponents.x,
            2.0 / self.exponents.y,
            2.0 / self.exponents.z,
        ];
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();
        Vector3::new(
            a * signed_pow(cos_v, ex) * signed_pow(cos_u, ex),
            b * signed_pow(cos_v, ey) * signed_pow(sin_u, ey),
            c * signed_pow(sin_v, ez),
        )
    }

    /// Point on the deformed surface; every tessellation stage evaluates through this
    pub fn point(&self, u: f64, v: f64) -> Vector3<f64> {
        self.deformation.apply(self.undeformed_point(u, v), self.scalings.z)
    }

    /// Unit normal from central differences of the deformed parametrization.
    ///
    /// Where the tangents vanish (the poles) the unnormalized, near-zero cross
    /// product is returned.
    pub fn normal(&self, u: f64, v: f64, eps: f64) -> Vector3<f64> {
        let tangent_u = self.point(u + eps, v) - self.point(u - eps, v);
        let tangent_v = self.point(u, v + eps) - self.point(u, v - eps);
        let n = tangent_u.cross(&tangent_v);
        let length = n.norm();
        if length > 1e-12 {
            n / length
        } else {
            n
        }
    }
}
