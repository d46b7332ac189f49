//! Oriented boxes, e.g. detection bounding boxes

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use crate::point::{clamp_alpha, point_array, vector_array, Point3f, Rgb, Vector3f};
use crate::transform::{normalize_quaternion, QuaternionXyzw, IDENTITY_QUATERNION};
use serde::Serialize;

/// Styling and orientation for [`Cuboid`]
#[derive(Debug, Clone)]
pub struct CuboidOptions {
    /// `[x, y, z, w]`, normalized on construction
    pub orientation: QuaternionXyzw,
    pub color: Rgb,
    pub alpha: f32,
    pub edge_width: f32,
    pub visible: bool,
}

impl Default for CuboidOptions {
    fn default() -> Self {
        Self {
            orientation: IDENTITY_QUATERNION,
            color: [255, 0, 0],
            alpha: 1.0,
            edge_width: 0.01,
            visible: true,
        }
    }
}

/// A box given by its center, full extents and orientation
#[derive(Debug, Clone)]
pub struct Cuboid {
    position: Point3f,
    size: Vector3f,
    orientation: QuaternionXyzw,
    color: Rgb,
    alpha: f32,
    edge_width: f32,
    visible: bool,
}

#[derive(Serialize)]
struct CuboidRecord {
    position: [f32; 3],
    size: [f32; 3],
    orientation: QuaternionXyzw,
    color: Rgb,
    alpha: f32,
    edge_width: f32,
    visible: bool,
}

impl Cuboid {
    /// Create a box; `size` is the full extent along each axis, not the half extent
    pub fn new(position: Point3f, size: Vector3f, options: CuboidOptions) -> Self {
        Self {
            position,
            size,
            orientation: normalize_quaternion(options.orientation),
            color: options.color,
            alpha: clamp_alpha(options.alpha),
            edge_width: options.edge_width,
            visible: options.visible,
        }
    }

    pub fn position(&self) -> Point3f {
        self.position
    }

    pub fn size(&self) -> Vector3f {
        self.size
    }

    pub fn orientation(&self) -> QuaternionXyzw {
        self.orientation
    }
}

impl ElementCodec for Cuboid {
    fn kind(&self) -> ElementKind {
        ElementKind::Cuboid
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &CuboidRecord {
                position: point_array(&self.position),
                size: vector_array(&self.size),
                orientation: self.orientation,
                color: self.color,
                alpha: self.alpha,
                edge_width: self.edge_width,
                visible: self.visible,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_orientation_is_normalized() {
        let options = CuboidOptions {
            orientation: [0.0, 0.0, 3.0, 4.0],
            ..CuboidOptions::default()
        };
        let cuboid = Cuboid::new(Point3f::origin(), Vector3f::new(1.0, 2.0, 3.0), options);
        let q = cuboid.orientation();
        let norm = q.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((q[2] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_record_inlines_everything() {
        let cuboid = Cuboid::new(
            Point3f::new(1.0, 0.0, 0.0),
            Vector3f::new(2.0, 2.0, 2.0),
            CuboidOptions {
                color: [0, 255, 0],
                alpha: -0.5,
                ..CuboidOptions::default()
            },
        );
        let record = cuboid.describe("box.bin").unwrap();
        assert_eq!(record["type"], "cuboid");
        assert_eq!(record["position"], json!([1.0, 0.0, 0.0]));
        assert_eq!(record["size"], json!([2.0, 2.0, 2.0]));
        assert_eq!(record["orientation"], json!([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(record["color"], json!([0, 255, 0]));
        assert_eq!(record["alpha"], 0.0);
        assert!(cuboid.binary_payload().is_none());
    }
}
