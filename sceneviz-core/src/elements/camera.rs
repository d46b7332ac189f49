//! Scene camera

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use crate::point::{point_array, vector_array, Point3f, Vector3f};
use serde::Serialize;

/// Camera looking at the scene. Always present in a scene under a reserved name.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3f,
    pub look_at: Point3f,
    pub up: Vector3f,
    pub focal_length: f32,
}

#[derive(Serialize)]
struct CameraRecord {
    visible: bool,
    position: [f32; 3],
    look_at: [f32; 3],
    up: [f32; 3],
    focal_length: f32,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`, z up
    pub fn new(position: Point3f, look_at: Point3f) -> Self {
        Self {
            position,
            look_at,
            ..Self::default()
        }
    }

    /// Replace the up vector
    pub fn with_up(mut self, up: Vector3f) -> Self {
        self.up = up;
        self
    }

    /// Replace the focal length
    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3f::new(3.0, 3.0, 3.0),
            look_at: Point3f::origin(),
            up: Vector3f::new(0.0, 0.0, 1.0),
            focal_length: 28.0,
        }
    }
}

impl ElementCodec for Camera {
    fn kind(&self) -> ElementKind {
        ElementKind::Camera
    }

    fn visible(&self) -> bool {
        true
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &CameraRecord {
                visible: true,
                position: point_array(&self.position),
                look_at: point_array(&self.look_at),
                up: vector_array(&self.up),
                focal_length: self.focal_length,
            },
        )
    }
}
