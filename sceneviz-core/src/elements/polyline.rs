//! Connected line strips

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use crate::point::{clamp_alpha, point_array, Point3f, Rgb};
use serde::Serialize;

/// Styling for [`Polyline`]
#[derive(Debug, Clone)]
pub struct PolylineOptions {
    pub color: Rgb,
    pub alpha: f32,
    pub edge_width: f32,
    pub visible: bool,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            alpha: 1.0,
            edge_width: 0.01,
            visible: true,
        }
    }
}

/// A connected series of segments through `positions`
#[derive(Debug, Clone)]
pub struct Polyline {
    positions: Vec<Point3f>,
    color: Rgb,
    alpha: f32,
    edge_width: f32,
    visible: bool,
}

#[derive(Serialize)]
struct PolylineRecord {
    positions: Vec<[f32; 3]>,
    color: Rgb,
    alpha: f32,
    edge_width: f32,
    visible: bool,
}

impl Polyline {
    pub fn new(positions: Vec<Point3f>, options: PolylineOptions) -> Self {
        Self {
            positions,
            color: options.color,
            alpha: clamp_alpha(options.alpha),
            edge_width: options.edge_width,
            visible: options.visible,
        }
    }

    pub fn positions(&self) -> &[Point3f] {
        &self.positions
    }
}

impl ElementCodec for Polyline {
    fn kind(&self) -> ElementKind {
        ElementKind::Polyline
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &PolylineRecord {
                positions: self.positions.iter().map(point_array).collect(),
                color: self.color,
                alpha: self.alpha,
                edge_width: self.edge_width,
                visible: self.visible,
            },
        )
    }
}
