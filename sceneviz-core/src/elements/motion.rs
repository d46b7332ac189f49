//! Articulation hints: translational or rotational motion of a part

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use crate::point::{point_array, vector_array, Point3f, Rgb, Vector3f};
use serde::{Deserialize, Serialize};

/// Kind of motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionType {
    #[serde(rename = "trans")]
    Translation,
    #[serde(rename = "rot")]
    Rotation,
}

/// Which way the motion glyph points relative to the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionOrientation {
    Outwards,
    Inwards,
}

/// Styling for [`Motion`]
#[derive(Debug, Clone)]
pub struct MotionOptions {
    pub orientation: MotionOrientation,
    pub direction_color: Rgb,
    pub origin_color: Rgb,
    pub visible: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            orientation: MotionOrientation::Outwards,
            direction_color: [0, 0, 255],
            origin_color: [255, 0, 0],
            visible: true,
        }
    }
}

/// A motion axis with its origin
#[derive(Debug, Clone)]
pub struct Motion {
    motion_type: MotionType,
    direction: Vector3f,
    origin: Point3f,
    orientation: MotionOrientation,
    direction_color: Rgb,
    origin_color: Rgb,
    visible: bool,
}

#[derive(Serialize)]
struct MotionRecord {
    motion_type: MotionType,
    motion_direction: [f32; 3],
    motion_origin_pos: [f32; 3],
    motion_viz_orient: MotionOrientation,
    motion_dir_color: Rgb,
    motion_origin_color: Rgb,
    visible: bool,
}

impl Motion {
    pub fn new(motion_type: MotionType, direction: Vector3f, origin: Point3f, options: MotionOptions) -> Self {
        Self {
            motion_type,
            direction,
            origin,
            orientation: options.orientation,
            direction_color: options.direction_color,
            origin_color: options.origin_color,
            visible: options.visible,
        }
    }

    pub fn motion_type(&self) -> MotionType {
        self.motion_type
    }
}

impl ElementCodec for Motion {
    fn kind(&self) -> ElementKind {
        ElementKind::Motion
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &MotionRecord {
                motion_type: self.motion_type,
                motion_direction: vector_array(&self.direction),
                motion_origin_pos: point_array(&self.origin),
                motion_viz_orient: self.orientation,
                motion_dir_color: self.direction_color,
                motion_origin_color: self.origin_color,
                visible: self.visible,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_record_uses_short_tags() {
        let motion = Motion::new(
            MotionType::Rotation,
            Vector3f::z(),
            Point3f::origin(),
            MotionOptions {
                orientation: MotionOrientation::Inwards,
                ..MotionOptions::default()
            },
        );
        let record = motion.describe("m.bin").unwrap();
        assert_eq!(record["type"], "motion");
        assert_eq!(record["motion_type"], "rot");
        assert_eq!(record["motion_viz_orient"], "inwards");
        assert_eq!(record["motion_direction"], serde_json::json!([0.0, 0.0, 1.0]));
    }
}
