//! Triangle mesh assembly from a relaxed parameter grid

use super::surface::SuperquadricSurface;
use super::ParameterGrid;
use sceneviz_core::{Point3f, TriangleMesh};

/// Build the local-frame mesh of `surface` sampled on `grid`.
///
/// The grid is periodic in u and open in v. Since u covers the closed range
/// `[-pi, pi]` the last u column repeats the first, so it is dropped and the
/// seam quads wrap around to column zero. Vertex `(i, j)` lives at index
/// `j * (nu - 1) + i`.
pub fn build_mesh(surface: &SuperquadricSurface, grid: &ParameterGrid) -> TriangleMesh {
    let (nu, nv) = (grid.nu(), grid.nv());
    if nu < 3 || nv < 2 {
        return TriangleMesh::new();
    }
    let columns = nu - 1;

    let mut vertices = Vec::with_capacity(columns * nv);
    for &v in &grid.v {
        for &u in &grid.u[..columns] {
            let p = surface.point(u, v);
            vertices.push(Point3f::new(p.x as f32, p.y as f32, p.z as f32));
        }
    }

    let mut faces = Vec::with_capacity(2 * columns * (nv - 1));
    for j in 0..nv - 1 {
        for i in 0..columns {
            let next = (i + 1) % columns;
            let i00 = j * columns + i;
            let i10 = j * columns + next;
            let i11 = (j + 1) * columns + next;
            let i01 = (j + 1) * columns + i;
            faces.push([i00, i10, i11]);
            faces.push([i00, i11, i01]);
        }
    }

    TriangleMesh::from_vertices_and_faces(vertices, faces)
}
