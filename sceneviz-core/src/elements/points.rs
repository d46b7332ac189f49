//! Point clouds rendered as colored points or small spheres

use crate::codec::{build_record, write_colors, write_points, write_vectors, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{ensure_rows, Result};
use crate::mesh::TriangleMesh;
use crate::point::{clamp_alpha, Point3f, Rgb, Vector3f, DEFAULT_GRAY};
use serde::{Serialize, Serializer};

/// How the viewer shades the points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Flat color, used when no normals are known
    Uniform,
    /// Lit with the supplied normals
    Phong,
}

impl ShadingMode {
    /// Integer code stored in the `shading_type` field
    pub const fn code(self) -> u8 {
        match self {
            ShadingMode::Uniform => 0,
            ShadingMode::Phong => 1,
        }
    }
}

impl Serialize for ShadingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Styling for [`Points`]
#[derive(Debug, Clone)]
pub struct PointsOptions {
    pub point_size: f32,
    /// Sphere tessellation used by offline renderers only
    pub resolution: u32,
    pub visible: bool,
    pub alpha: f32,
}

impl Default for PointsOptions {
    fn default() -> Self {
        Self {
            point_size: 25.0,
            resolution: 5,
            visible: true,
            alpha: 1.0,
        }
    }
}

/// A point cloud with per-point colors and normals
#[derive(Debug, Clone)]
pub struct Points {
    positions: Vec<Point3f>,
    colors: Vec<Rgb>,
    normals: Vec<Vector3f>,
    point_size: f32,
    resolution: u32,
    visible: bool,
    alpha: f32,
    shading: ShadingMode,
}

#[derive(Serialize)]
struct PointsRecord<'a> {
    visible: bool,
    alpha: f32,
    shading_type: ShadingMode,
    point_size: f32,
    resolution: u32,
    num_points: usize,
    binary_filename: &'a str,
}

impl Points {
    /// Create a point cloud.
    ///
    /// Missing colors default to gray. Missing normals default to `+z` and switch
    /// the shading mode to [`ShadingMode::Uniform`].
    pub fn new(
        positions: Vec<Point3f>,
        colors: Option<Vec<Rgb>>,
        normals: Option<Vec<Vector3f>>,
        options: PointsOptions,
    ) -> Result<Self> {
        let n = positions.len();
        let colors = colors.unwrap_or_else(|| vec![DEFAULT_GRAY; n]);
        ensure_rows("points colors", n, colors.len())?;

        let (normals, shading) = match normals {
            Some(normals) => (normals, ShadingMode::Phong),
            None => (vec![Vector3f::new(0.0, 0.0, 1.0); n], ShadingMode::Uniform),
        };
        ensure_rows("points normals", n, normals.len())?;

        Ok(Self {
            positions,
            colors,
            normals,
            point_size: options.point_size,
            resolution: options.resolution,
            visible: options.visible,
            alpha: clamp_alpha(options.alpha),
            shading,
        })
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the cloud has no points
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3f] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn normals(&self) -> &[Vector3f] {
        &self.normals
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// One sphere per point, for renderers without a point primitive.
    ///
    /// Sphere radius is `point_size / 1000` and every sphere carries its
    /// point's color.
    pub fn sphere_mesh(&self) -> TriangleMesh {
        let template = TriangleMesh::uv_sphere(self.point_size / 1000.0, self.resolution as usize);
        let mut cloud = TriangleMesh::new();
        for (position, color) in self.positions.iter().zip(&self.colors) {
            let mut sphere = template.clone();
            for vertex in &mut sphere.vertices {
                *vertex += position.coords;
            }
            sphere.paint_uniform_color(*color);
            cloud.append(&sphere);
        }
        cloud
    }

    pub fn shading(&self) -> ShadingMode {
        self.shading
    }
}

impl ElementCodec for Points {
    fn kind(&self) -> ElementKind {
        ElementKind::Points
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &PointsRecord {
                visible: self.visible,
                alpha: self.alpha,
                shading_type: self.shading,
                point_size: self.point_size,
                resolution: self.resolution,
                num_points: self.len(),
                binary_filename,
            },
        )
    }

    /// Positions, then normals, then colors
    fn binary_payload(&self) -> Option<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.len() * (12 + 12 + 3));
        write_points(&mut buffer, &self.positions);
        write_vectors(&mut buffer, &self.normals);
        write_colors(&mut buffer, &self.colors);
        Some(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn three_points() -> Vec<Point3f> {
        vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_defaults_fill_colors_and_normals() {
        let points = Points::new(three_points(), None, None, PointsOptions::default()).unwrap();
        assert_eq!(points.colors().len(), 3);
        assert_eq!(points.normals().len(), 3);
        assert_eq!(points.colors()[0], DEFAULT_GRAY);
        assert_eq!(points.shading(), ShadingMode::Uniform);
        assert!(points.normals().iter().all(|n| (n.norm() - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_supplied_normals_enable_phong() {
        let normals = vec![Vector3f::x(); 3];
        let points = Points::new(three_points(), None, Some(normals), PointsOptions::default()).unwrap();
        assert_eq!(points.shading(), ShadingMode::Phong);
        let record = points.describe("cloud.bin").unwrap();
        assert_eq!(record["shading_type"], 1);
    }

    #[test]
    fn test_mismatched_rows_fail() {
        let colors = vec![[255, 0, 0]; 2];
        let result = Points::new(three_points(), Some(colors), None, PointsOptions::default());
        assert!(matches!(result, Err(Error::ShapeMismatch { expected: 3, found: 2, .. })));

        let normals = vec![Vector3f::z(); 4];
        let result = Points::new(three_points(), None, Some(normals), PointsOptions::default());
        assert!(matches!(result, Err(Error::ShapeMismatch { expected: 3, found: 4, .. })));
    }

    #[test]
    fn test_alpha_is_clamped_on_input() {
        let options = PointsOptions {
            alpha: 1.7,
            ..PointsOptions::default()
        };
        let points = Points::new(three_points(), None, None, options).unwrap();
        assert_eq!(points.alpha(), 1.0);
    }

    #[test]
    fn test_record_and_payload_layout() {
        let colors = vec![[10, 20, 30], [40, 50, 60], [70, 80, 90]];
        let points = Points::new(three_points(), Some(colors), None, PointsOptions::default()).unwrap();
        let record = points.describe("cloud.bin").unwrap();
        assert_eq!(record["type"], "points");
        assert_eq!(record["num_points"], 3);
        assert_eq!(record["binary_filename"], "cloud.bin");
        assert_eq!(record["visible"], true);

        let payload = points.binary_payload().unwrap();
        assert_eq!(payload.len(), 3 * 12 + 3 * 12 + 3 * 3);
        // second point x coordinate
        assert_eq!(&payload[12..16], &1.0f32.to_le_bytes());
        // colors follow positions and normals
        assert_eq!(&payload[72..75], &[10, 20, 30]);
        assert_eq!(&payload[78..81], &[70, 80, 90]);
    }

    #[test]
    fn test_sphere_mesh_per_point() {
        let colors = vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]];
        let options = PointsOptions {
            point_size: 50.0,
            resolution: 4,
            ..PointsOptions::default()
        };
        let points = Points::new(three_points(), Some(colors), None, options).unwrap();
        let mesh = points.sphere_mesh();

        let per_sphere = 2 + 3 * 8;
        assert_eq!(mesh.vertex_count(), 3 * per_sphere);
        assert_eq!(mesh.face_count(), 3 * 4 * 4 * 3);
        let mesh_colors = mesh.colors.as_ref().unwrap();
        assert_eq!(mesh_colors[per_sphere], [0, 255, 0]);
        assert_eq!(mesh_colors[3 * per_sphere - 1], [0, 0, 255]);
        for vertex in &mesh.vertices[per_sphere..2 * per_sphere] {
            let r = (vertex.coords - Vector3f::new(1.0, 0.0, 0.0)).norm();
            assert!((r - 0.05).abs() < 1e-6);
        }
        assert!(Points::new(vec![], None, None, PointsOptions::default())
            .unwrap()
            .sphere_mesh()
            .is_empty());
    }
}
