//! Superquadric primitives with tapering and bending deformations
//!
//! The element only stores parameters. Turning them into triangles is the job of
//! `sceneviz-geometry`, which reads them through the accessors below.

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{Error, Result};
use crate::point::{clamp_alpha, vector_array, Rgb, Vector3f};
use crate::transform::{normalize_quaternion, QuaternionXyzw, RigidTransform, RotationRows, IDENTITY_QUATERNION};
use serde::Serialize;

/// Placement, deformation and styling for [`Superquadric`]
#[derive(Debug, Clone)]
pub struct SuperquadricOptions {
    pub translation: Vector3f,
    /// `[x, y, z, w]`, normalized on construction
    pub rotation: QuaternionXyzw,
    /// Row-major rotation that overrides `rotation` when set
    pub rotation_matrix: Option<RotationRows>,
    /// `[k_x, k_y]`: linear taper of x and y along z
    pub tapering: [f32; 2],
    /// `[k_z, alpha_z, k_x, alpha_x, k_y, alpha_y]`: curvature and bend-plane angle per axis
    pub bending: [f32; 6],
    pub color: Rgb,
    pub alpha: f32,
    pub resolution: u32,
    pub wireframe: bool,
    pub visible: bool,
}

impl Default for SuperquadricOptions {
    fn default() -> Self {
        Self {
            translation: Vector3f::zeros(),
            rotation: IDENTITY_QUATERNION,
            rotation_matrix: None,
            tapering: [0.0; 2],
            bending: [0.0; 6],
            color: [255, 0, 0],
            alpha: 1.0,
            resolution: 30,
            wireframe: false,
            visible: true,
        }
    }
}

/// A superquadric surface with scale factors `A, B, C` and shape exponents `r, s, t`
#[derive(Debug, Clone)]
pub struct Superquadric {
    scalings: Vector3f,
    exponents: Vector3f,
    translation: Vector3f,
    rotation: QuaternionXyzw,
    rotation_matrix: Option<RotationRows>,
    tapering: [f32; 2],
    bending: [f32; 6],
    color: Rgb,
    alpha: f32,
    resolution: u32,
    wireframe: bool,
    visible: bool,
}

#[derive(Serialize)]
struct SuperquadricRecord {
    visible: bool,
    alpha: f32,
    scalings: [f32; 3],
    exponents: [f32; 3],
    resolution: u32,
    translation: [f32; 3],
    rotation: QuaternionXyzw,
    color: Rgb,
    tapering: [f32; 2],
    bending: [f32; 6],
    wireframe: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation_matrix: Option<RotationRows>,
}

impl Superquadric {
    /// Create a superquadric; every scale factor and exponent must be finite and positive
    pub fn new(scalings: Vector3f, exponents: Vector3f, options: SuperquadricOptions) -> Result<Self> {
        if !scalings.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(Error::InvalidData(format!(
                "Superquadric scalings must be positive, got {:?}",
                vector_array(&scalings)
            )));
        }
        if !exponents.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(Error::InvalidData(format!(
                "Superquadric exponents must be positive, got {:?}",
                vector_array(&exponents)
            )));
        }

        Ok(Self {
            scalings,
            exponents,
            translation: options.translation,
            rotation: normalize_quaternion(options.rotation),
            rotation_matrix: options.rotation_matrix,
            tapering: options.tapering,
            bending: options.bending,
            color: options.color,
            alpha: clamp_alpha(options.alpha),
            resolution: options.resolution,
            wireframe: options.wireframe,
            visible: options.visible,
        })
    }

    /// Sphere of the given radius
    pub fn sphere(radius: f32, options: SuperquadricOptions) -> Result<Self> {
        Self::new(Vector3f::new(radius, radius, radius), Vector3f::new(2.0, 2.0, 2.0), options)
    }

    /// Scale factors `A, B, C`
    pub fn scalings(&self) -> Vector3f {
        self.scalings
    }

    /// Shape exponents `r, s, t`
    pub fn exponents(&self) -> Vector3f {
        self.exponents
    }

    pub fn tapering(&self) -> [f32; 2] {
        self.tapering
    }

    pub fn bending(&self) -> [f32; 6] {
        self.bending
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Rotation (explicit matrix first, quaternion otherwise) followed by the translation
    pub fn placement(&self) -> RigidTransform {
        match &self.rotation_matrix {
            Some(rows) => RigidTransform::from_rotation_rows(self.translation, rows),
            None => RigidTransform::from_quaternion(self.translation, self.rotation),
        }
    }
}

impl ElementCodec for Superquadric {
    fn kind(&self) -> ElementKind {
        ElementKind::Superquadric
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &SuperquadricRecord {
                visible: self.visible,
                alpha: self.alpha,
                scalings: vector_array(&self.scalings),
                exponents: vector_array(&self.exponents),
                resolution: self.resolution,
                translation: vector_array(&self.translation),
                rotation: self.rotation,
                color: self.color,
                tapering: self.tapering,
                bending: self.bending,
                wireframe: self.wireframe,
                rotation_matrix: self.rotation_matrix,
            },
        )
    }
}
