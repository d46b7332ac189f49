//! Screen-space circle annotations anchored in 3D

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{ensure_rows, Result};
use crate::point::{point_array, Point3f, Rgb};
use serde::Serialize;

/// Labelled 2D circles drawn over projected 3D positions
#[derive(Debug, Clone)]
pub struct Circles2D {
    labels: Vec<String>,
    positions: Vec<Point3f>,
    border_colors: Vec<Rgb>,
    fill_colors: Vec<Rgb>,
    visible: bool,
}

#[derive(Serialize)]
struct Circles2DRecord<'a> {
    labels: &'a [String],
    positions: Vec<[f32; 3]>,
    border_colors: &'a [Rgb],
    fill_colors: &'a [Rgb],
    visible: bool,
}

impl Circles2D {
    pub fn new(
        labels: Vec<String>,
        positions: Vec<Point3f>,
        border_colors: Vec<Rgb>,
        fill_colors: Vec<Rgb>,
        visible: bool,
    ) -> Result<Self> {
        let n = labels.len();
        ensure_rows("circle positions", n, positions.len())?;
        ensure_rows("circle border colors", n, border_colors.len())?;
        ensure_rows("circle fill colors", n, fill_colors.len())?;
        Ok(Self {
            labels,
            positions,
            border_colors,
            fill_colors,
            visible,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl ElementCodec for Circles2D {
    fn kind(&self) -> ElementKind {
        ElementKind::Circles2D
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &Circles2DRecord {
                labels: &self.labels,
                positions: self.positions.iter().map(point_array).collect(),
                border_colors: &self.border_colors,
                fill_colors: &self.fill_colors,
                visible: self.visible,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_circles_record_type() {
        let circles = Circles2D::new(
            vec!["1".to_string()],
            vec![Point3f::origin()],
            vec![[0, 0, 0]],
            vec![[255, 255, 255]],
            true,
        )
        .unwrap();
        let record = circles.describe("c.bin").unwrap();
        assert_eq!(record["type"], "circles_2d");
        assert_eq!(record["fill_colors"], serde_json::json!([[255, 255, 255]]));
    }

    #[test]
    fn test_fill_color_mismatch_fails() {
        let result = Circles2D::new(
            vec!["1".to_string()],
            vec![Point3f::origin()],
            vec![[0, 0, 0]],
            vec![],
            true,
        );
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
