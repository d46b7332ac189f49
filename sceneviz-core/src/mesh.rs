//! Triangle mesh container produced by the tessellator and consumed by mesh writers

use crate::point::*;
use crate::transform::RigidTransform;

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3f>>,
    /// Per-vertex colors
    pub colors: Option<Vec<Rgb>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
            colors: None,
        }
    }

    /// UV sphere of `radius` around the origin with outward unit normals.
    ///
    /// Two pole vertices plus `resolution - 1` rings of `2 * resolution`
    /// vertices each; `resolution` is raised to at least 2.
    pub fn uv_sphere(radius: f32, resolution: usize) -> Self {
        let resolution = resolution.max(2);
        let ring = 2 * resolution;
        let mut normals = vec![Vector3f::z(), -Vector3f::z()];
        for i in 1..resolution {
            let phi = std::f32::consts::PI * i as f32 / resolution as f32;
            for j in 0..ring {
                let theta = std::f32::consts::TAU * j as f32 / ring as f32;
                normals.push(Vector3f::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos()));
            }
        }

        let ring_start = |i: usize| 2 + (i - 1) * ring;
        let last = ring_start(resolution - 1);
        let mut faces = Vec::with_capacity(4 * resolution * (resolution - 1));
        for j in 0..ring {
            let next = (j + 1) % ring;
            faces.push([0, 2 + j, 2 + next]);
            faces.push([1, last + next, last + j]);
        }
        for i in 1..resolution - 1 {
            let upper = ring_start(i);
            let lower = ring_start(i + 1);
            for j in 0..ring {
                let next = (j + 1) % ring;
                faces.push([upper + j, lower + j, lower + next]);
                faces.push([upper + j, lower + next, upper + next]);
            }
        }

        let vertices = normals.iter().map(|n| Point3f::from(n * radius)).collect();
        Self {
            vertices,
            faces,
            normals: Some(normals),
            colors: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Apply a rigid transform to every vertex (and normal, when present)
    pub fn transform(&mut self, transform: &RigidTransform) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
        if let Some(normals) = &mut self.normals {
            for normal in normals.iter_mut() {
                *normal = transform.transform_vector(normal);
            }
        }
    }

    /// Set every vertex to `color`
    pub fn paint_uniform_color(&mut self, color: Rgb) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    /// Append `other`, offsetting its face indices.
    ///
    /// Normals and colors survive only when both sides carry them (an empty
    /// mesh takes whatever `other` has).
    pub fn append(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len();
        let was_empty = offset == 0;
        self.normals = merge_attribute(self.normals.take(), other.normals.as_deref(), was_empty);
        self.colors = merge_attribute(self.colors.take(), other.colors.as_deref(), was_empty);
        self.vertices.extend_from_slice(&other.vertices);
        self.faces
            .extend(other.faces.iter().map(|face| face.map(|index| index + offset)));
    }

    /// Compute area-weighted vertex normals and store them on the mesh.
    ///
    /// Degenerate faces contribute nothing; vertices touched only by degenerate
    /// faces keep a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];
        for face in &self.faces {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];
            // unnormalized: length is twice the face area
            let weighted = (v1 - v0).cross(&(v2 - v0));
            for &index in face {
                normals[index] += weighted;
            }
        }
        for normal in &mut normals {
            if let Some(unit) = normal.try_normalize(1e-12) {
                *normal = unit;
            }
        }
        self.normals = Some(normals);
    }
}

fn merge_attribute<T: Clone>(own: Option<Vec<T>>, other: Option<&[T]>, own_is_empty: bool) -> Option<Vec<T>> {
    match (own, other) {
        (Some(mut own), Some(other)) => {
            own.extend_from_slice(other);
            Some(own)
        }
        (None, Some(other)) if own_is_empty => Some(other.to_vec()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_normals_of_flat_quad() {
        let vertices = vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ];
        let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, vec![[0, 1, 2], [0, 2, 3]]);
        mesh.compute_vertex_normals();

        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert_relative_eq!(*n, Vector3f::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_degenerate_face_leaves_zero_normal() {
        let vertices = vec![Point3f::origin(); 3];
        let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, vec![[0, 1, 2]]);
        mesh.compute_vertex_normals();
        assert!(mesh.normals.unwrap().iter().all(|n| n.norm() == 0.0));
    }

    #[test]
    fn test_transform_moves_vertices() {
        let mut mesh = TriangleMesh::from_vertices_and_faces(vec![Point3f::new(1.0, 2.0, 3.0)], vec![]);
        let transform = RigidTransform {
            translation: Vector3f::new(1.0, 1.0, 1.0),
            ..RigidTransform::identity()
        };
        mesh.transform(&transform);
        assert_eq!(mesh.vertices[0], Point3f::new(2.0, 3.0, 4.0));
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_uv_sphere_layout() {
        let sphere = TriangleMesh::uv_sphere(0.5, 5);
        assert_eq!(sphere.vertex_count(), 2 + 4 * 10);
        assert_eq!(sphere.face_count(), 4 * 5 * 4);
        let normals = sphere.normals.as_ref().unwrap();
        for (vertex, normal) in sphere.vertices.iter().zip(normals) {
            assert_relative_eq!(vertex.coords.norm(), 0.5, epsilon = 1e-6);
            assert_relative_eq!(vertex.coords * 2.0, *normal, epsilon = 1e-6);
        }
        assert!(sphere.faces.iter().flatten().all(|&i| i < sphere.vertex_count()));
    }

    #[test]
    fn test_uv_sphere_faces_point_outward() {
        let sphere = TriangleMesh::uv_sphere(1.0, 3);
        for face in &sphere.faces {
            let [a, b, c] = face.map(|i| sphere.vertices[i]);
            let face_normal = (b - a).cross(&(c - a));
            let centroid = (a.coords + b.coords + c.coords) / 3.0;
            assert!(face_normal.dot(&centroid) > 0.0);
        }
        assert_eq!(TriangleMesh::uv_sphere(1.0, 0).vertex_count(), 6);
    }

    #[test]
    fn test_append_offsets_faces_and_keeps_colors() {
        let mut first = TriangleMesh::uv_sphere(1.0, 2);
        first.paint_uniform_color([255, 0, 0]);
        let mut second = first.clone();
        second.paint_uniform_color([0, 0, 255]);

        let mut combined = TriangleMesh::new();
        combined.append(&first);
        combined.append(&second);

        assert_eq!(combined.vertex_count(), 12);
        assert_eq!(combined.face_count(), 16);
        assert_eq!(combined.faces[8], first.faces[0].map(|i| i + 6));
        let colors = combined.colors.as_ref().unwrap();
        assert_eq!(colors[5], [255, 0, 0]);
        assert_eq!(colors[6], [0, 0, 255]);
        assert_eq!(combined.normals.as_ref().map(Vec::len), Some(12));

        combined.append(&TriangleMesh::from_vertices_and_faces(vec![Point3f::origin()], vec![]));
        assert!(combined.colors.is_none());
    }
}
