//! Line segment sets, e.g. for normals or correspondences

use crate::codec::{build_record, write_colors, write_points, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{ensure_rows, Result};
use crate::point::{Point3f, Rgb, DEFAULT_GRAY};
use serde::Serialize;

/// N line segments stored interleaved: even rows are starts, odd rows are ends
#[derive(Debug, Clone)]
pub struct Lines {
    positions: Vec<Point3f>,
    colors: Vec<Rgb>,
    visible: bool,
}

#[derive(Serialize)]
struct LinesRecord<'a> {
    visible: bool,
    num_lines: usize,
    binary_filename: &'a str,
}

impl Lines {
    /// Create segments with one color per segment (gray when absent)
    pub fn new(starts: &[Point3f], ends: &[Point3f], colors: Option<&[Rgb]>, visible: bool) -> Result<Self> {
        let n = starts.len();
        let colors = match colors {
            Some(colors) => colors.to_vec(),
            None => vec![DEFAULT_GRAY; n],
        };
        Self::with_end_colors(starts, ends, &colors, &colors, visible)
    }

    /// Create segments with separate colors at the start and end of each segment
    pub fn with_end_colors(
        starts: &[Point3f],
        ends: &[Point3f],
        start_colors: &[Rgb],
        end_colors: &[Rgb],
        visible: bool,
    ) -> Result<Self> {
        let n = starts.len();
        ensure_rows("line ends", n, ends.len())?;
        ensure_rows("line start colors", n, start_colors.len())?;
        ensure_rows("line end colors", n, end_colors.len())?;

        let positions = starts
            .iter()
            .zip(ends)
            .flat_map(|(s, e)| [*s, *e])
            .collect();
        let colors = start_colors
            .iter()
            .zip(end_colors)
            .flat_map(|(s, e)| [*s, *e])
            .collect();

        Ok(Self {
            positions,
            colors,
            visible,
        })
    }

    /// Number of segments
    pub fn num_lines(&self) -> usize {
        self.positions.len() / 2
    }

    /// Interleaved positions (2N rows)
    pub fn positions(&self) -> &[Point3f] {
        &self.positions
    }

    /// Interleaved colors (2N rows)
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl ElementCodec for Lines {
    fn kind(&self) -> ElementKind {
        ElementKind::Lines
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &LinesRecord {
                visible: self.visible,
                num_lines: self.num_lines(),
                binary_filename,
            },
        )
    }

    fn binary_payload(&self) -> Option<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.positions.len() * 15);
        write_points(&mut buffer, &self.positions);
        write_colors(&mut buffer, &self.colors);
        Some(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_interleaving() {
        let starts = vec![Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0)];
        let ends = vec![Point3f::new(0.0, 0.0, 1.0), Point3f::new(2.0, 2.0, 2.0)];
        let lines = Lines::with_end_colors(&starts, &ends, &[[1, 1, 1], [2, 2, 2]], &[[9, 9, 9], [8, 8, 8]], true).unwrap();

        assert_eq!(lines.num_lines(), 2);
        assert_eq!(lines.positions(), [starts[0], ends[0], starts[1], ends[1]].as_slice());
        let expected: Vec<Rgb> = vec![[1, 1, 1], [9, 9, 9], [2, 2, 2], [8, 8, 8]];
        assert_eq!(lines.colors(), expected.as_slice());
    }

    #[test]
    fn test_mismatched_ends_fail() {
        let starts = vec![Point3f::origin(); 3];
        let ends = vec![Point3f::origin(); 2];
        assert!(matches!(Lines::new(&starts, &ends, None, true), Err(Error::ShapeMismatch { .. })));
        let colors = vec![[0, 0, 0]; 1];
        assert!(matches!(
            Lines::new(&starts, &starts, Some(&colors), true),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_record_and_payload_size() {
        let starts = vec![Point3f::origin(); 4];
        let lines = Lines::new(&starts, &starts, None, false).unwrap();
        let record = lines.describe("normals.bin").unwrap();
        assert_eq!(record["type"], "lines");
        assert_eq!(record["num_lines"], 4);
        assert_eq!(record["visible"], false);
        assert_eq!(lines.binary_payload().unwrap().len(), 8 * 12 + 8 * 3);
    }
}
