//! Nonlinear deformations applied to superquadric surface points

use nalgebra::Vector3;

/// Taper factors at or below this magnitude are treated as zero
pub const TAPER_EPSILON: f64 = 1e-6;

/// Bend curvatures below this magnitude leave points unchanged
pub const BEND_EPSILON: f64 = 1e-3;

/// Axis a bend is applied around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendAxis {
    X,
    Y,
    Z,
}

/// Constant-curvature bend: `curvature` is 1 / bend radius, `angle` picks the bend plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bend {
    pub curvature: f64,
    pub angle: f64,
}

/// Tapering followed by bends about z, x and y
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Deformation {
    /// `[k_x, k_y]`
    pub tapering: [f64; 2],
    /// Bends about z, x and y, applied in that order
    pub bends: [Bend; 3],
}

const BEND_ORDER: [BendAxis; 3] = [BendAxis::Z, BendAxis::X, BendAxis::Y];

impl Deformation {
    /// Build from the element layout: tapering `[k_x, k_y]`, bending
    /// `[k_z, alpha_z, k_x, alpha_x, k_y, alpha_y]`
    pub fn from_parameters(tapering: [f32; 2], bending: [f32; 6]) -> Self {
        let bend = |i: usize| Bend {
            curvature: bending[2 * i] as f64,
            angle: bending[2 * i + 1] as f64,
        };
        Self {
            tapering: [tapering[0] as f64, tapering[1] as f64],
            bends: [bend(0), bend(1), bend(2)],
        }
    }

    /// True when applying the deformation would change nothing
    pub fn is_identity(&self) -> bool {
        self.tapering.iter().all(|k| k.abs() <= TAPER_EPSILON)
            && self.bends.iter().all(|b| b.curvature.abs() < BEND_EPSILON)
    }

    /// Deform a point of a superquadric whose z scale factor is `scale_z`
    pub fn apply(&self, point: Vector3<f64>, scale_z: f64) -> Vector3<f64> {
        let mut p = taper(point, self.tapering, scale_z);
        for (bend_params, axis) in self.bends.iter().zip(BEND_ORDER) {
            p = bend(p, *bend_params, axis);
        }
        p
    }
}

/// Scale x and y linearly with the normalized height `z / scale_z`
pub fn taper(point: Vector3<f64>, factors: [f64; 2], scale_z: f64) -> Vector3<f64> {
    if factors.iter().all(|k| k.abs() <= TAPER_EPSILON) {
        return point;
    }
    let z_norm = point.z / scale_z;
    Vector3::new(
        point.x * (factors[0] * z_norm + 1.0),
        point.y * (factors[1] * z_norm + 1.0),
        point.z,
    )
}

/// Bend the given axis into a circular arc of radius `1 / curvature`
pub fn bend(point: Vector3<f64>, params: Bend, axis: BendAxis) -> Vector3<f64> {
    let kappa = params.curvature;
    if kappa.abs() < BEND_EPSILON {
        return point;
    }

    // (u, v) span the cross-section, w runs along the bent axis
    let (u, v, w) = match axis {
        BendAxis::Z => (point.x, point.y, point.z),
        BendAxis::X => (point.y, point.z, point.x),
        BendAxis::Y => (point.z, point.x, point.y),
    };

    let (sin_a, cos_a) = params.angle.sin_cos();
    let r = u * cos_a + v * sin_a;
    let inv_kappa = 1.0 / kappa;
    let gamma = w * kappa;
    let rho = inv_kappa - r;
    let shift = inv_kappa - rho * gamma.cos() - r;

    let u = u + shift * cos_a;
    let v = v + shift * sin_a;
    let w = rho * gamma.sin();

    match axis {
        BendAxis::Z => Vector3::new(u, v, w),
        BendAxis::X => Vector3::new(w, u, v),
        BendAxis::Y => Vector3::new(v, w, u),
    }
}
