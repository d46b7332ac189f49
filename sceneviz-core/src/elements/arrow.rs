//! Arrows between two points

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use crate::point::{clamp_alpha, point_array, Point3f, Rgb};
use log::warn;
use serde::Serialize;

/// Styling for [`Arrow`]
#[derive(Debug, Clone)]
pub struct ArrowOptions {
    pub color: Rgb,
    pub alpha: f32,
    pub stroke_width: f32,
    pub head_width: f32,
    pub visible: bool,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            alpha: 1.0,
            stroke_width: 0.01,
            head_width: 0.05,
            visible: true,
        }
    }
}

/// An arrow pointing from `start` to `end`
#[derive(Debug, Clone)]
pub struct Arrow {
    start: Point3f,
    end: Point3f,
    color: Rgb,
    alpha: f32,
    stroke_width: f32,
    head_width: f32,
    visible: bool,
}

#[derive(Serialize)]
struct ArrowRecord {
    start: [f32; 3],
    end: [f32; 3],
    color: Rgb,
    alpha: f32,
    stroke_width: f32,
    head_width: f32,
    visible: bool,
}

impl Arrow {
    /// Create an arrow. A zero-length arrow is kept but has no visible direction.
    pub fn new(start: Point3f, end: Point3f, options: ArrowOptions) -> Self {
        let arrow = Self {
            start,
            end,
            color: options.color,
            alpha: clamp_alpha(options.alpha),
            stroke_width: options.stroke_width,
            head_width: options.head_width,
            visible: options.visible,
        };
        if arrow.is_degenerate() {
            warn!("arrow at {:?} has zero length", start);
        }
        arrow
    }

    /// True when start and end coincide
    pub fn is_degenerate(&self) -> bool {
        (self.end - self.start).norm() < 1e-9
    }

    pub fn start(&self) -> Point3f {
        self.start
    }

    pub fn end(&self) -> Point3f {
        self.end
    }
}

impl ElementCodec for Arrow {
    fn kind(&self) -> ElementKind {
        ElementKind::Arrow
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &ArrowRecord {
                start: point_array(&self.start),
                end: point_array(&self.end),
                color: self.color,
                alpha: self.alpha,
                stroke_width: self.stroke_width,
                head_width: self.head_width,
                visible: self.visible,
            },
        )
    }
}
