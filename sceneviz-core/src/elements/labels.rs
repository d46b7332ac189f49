//! Text labels anchored at 3D positions

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{ensure_rows, Result};
use crate::point::{point_array, Point3f, Rgb};
use serde::Serialize;

/// One text label per position, each with its own color
#[derive(Debug, Clone)]
pub struct Labels {
    labels: Vec<String>,
    positions: Vec<Point3f>,
    colors: Vec<Rgb>,
    visible: bool,
}

#[derive(Serialize)]
struct LabelsRecord<'a> {
    labels: &'a [String],
    positions: Vec<[f32; 3]>,
    colors: &'a [Rgb],
    visible: bool,
}

impl Labels {
    pub fn new(labels: Vec<String>, positions: Vec<Point3f>, colors: Vec<Rgb>, visible: bool) -> Result<Self> {
        ensure_rows("label positions", labels.len(), positions.len())?;
        ensure_rows("label colors", labels.len(), colors.len())?;
        Ok(Self {
            labels,
            positions,
            colors,
            visible,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl ElementCodec for Labels {
    fn kind(&self) -> ElementKind {
        ElementKind::Labels
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &LabelsRecord {
                labels: &self.labels,
                positions: self.positions.iter().map(point_array).collect(),
                colors: &self.colors,
                visible: self.visible,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_labels_record() {
        let labels = Labels::new(
            vec!["chair".to_string(), "table".to_string()],
            vec![Point3f::origin(), Point3f::new(1.0, 0.0, 0.0)],
            vec![[255, 0, 0], [0, 0, 255]],
            true,
        )
        .unwrap();
        let record = labels.describe("labels.bin").unwrap();
        assert_eq!(record["type"], "labels");
        assert_eq!(record["labels"], json!(["chair", "table"]));
        assert_eq!(record["colors"], json!([[255, 0, 0], [0, 0, 255]]));
    }

    #[test]
    fn test_count_mismatch_fails() {
        let result = Labels::new(vec!["a".to_string()], vec![], vec![[0, 0, 0]], true);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
