//! Superquadric tessellation
//!
//! Turns a [`Superquadric`] element into a triangle mesh whose edges have
//! roughly equal length on the surface. The pipeline is:
//!
//! 1. seed u along the equator and v along the meridian by arc length
//! 2. relax the grid so averaged chord lengths are equal
//! 3. split grid edges where the surface normal turns sharply, then relax again
//! 4. assemble a quad grid (periodic in u) into triangles
//! 5. place the mesh with the element's rotation and translation
//!
//! Tapering and bending are part of the surface evaluation, so every stage sees
//! the deformed shape.

pub mod assemble;
pub mod deform;
pub mod refine;
pub mod relax;
pub mod sampling;
pub mod surface;

pub use assemble::build_mesh;
pub use deform::{Bend, BendAxis, Deformation};
pub use refine::subdivide_high_curvature;
pub use relax::{relax_grid, relax_iterations, spacing_deviation};
pub use sampling::{arc_length_sample, linspace};
pub use surface::SuperquadricSurface;

use log::debug;
use sceneviz_core::{Superquadric, TriangleMesh};
use std::f64::consts::{FRAC_PI_2, PI};

/// Grids never get coarser than this many samples per direction
pub const MIN_GRID_RESOLUTION: usize = 10;

/// Tuning knobs of the tessellation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct TessellationOptions {
    /// Samples in the lookup table used for the initial arc-length seeding
    pub dense_samples: usize,
    /// Relaxation passes before refinement
    pub initial_relaxations: usize,
    /// Relaxation passes after refinement
    pub refinement_relaxations: usize,
    /// Whether to run curvature refinement at all
    pub refine: bool,
    /// Edges whose endpoint normals have a smaller dot product get split
    pub normal_dot_threshold: f64,
    /// Step of the central differences used for normals
    pub normal_epsilon: f64,
    /// Grid size is `round(resolution * resolution_scale)`
    pub resolution_scale: f64,
    pub max_resolution: usize,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            dense_samples: 500,
            initial_relaxations: 5,
            refinement_relaxations: 3,
            refine: true,
            normal_dot_threshold: 0.95,
            normal_epsilon: 1e-4,
            resolution_scale: 0.8,
            max_resolution: 50,
        }
    }
}

impl TessellationOptions {
    /// Cheaper settings for interactive previews: no refinement, fewer passes
    pub fn preview() -> Self {
        Self {
            dense_samples: 200,
            initial_relaxations: 2,
            refinement_relaxations: 0,
            refine: false,
            max_resolution: 20,
            ..Self::default()
        }
    }

    /// Seed grid size for an element resolution, clamped to `[MIN_GRID_RESOLUTION, max_resolution]`
    pub fn grid_resolution(&self, resolution: u32) -> usize {
        let scaled = (resolution as f64 * self.resolution_scale).round().max(0.0) as usize;
        scaled.min(self.max_resolution).max(MIN_GRID_RESOLUTION)
    }
}

/// Sorted parameter values of a tessellation grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterGrid {
    /// Longitude samples in `[-pi, pi]`
    pub u: Vec<f64>,
    /// Latitude samples in `[-pi/2, pi/2]`
    pub v: Vec<f64>,
}

impl ParameterGrid {
    pub fn nu(&self) -> usize {
        self.u.len()
    }

    pub fn nv(&self) -> usize {
        self.v.len()
    }
}

/// Result of tessellating a superquadric
#[derive(Debug, Clone)]
pub struct Tessellation {
    pub mesh: TriangleMesh,
    /// The final grid the mesh was built from
    pub grid: ParameterGrid,
}

/// Tessellate with the default options and apply the element's placement
pub fn tessellate(superquadric: &Superquadric) -> Tessellation {
    tessellate_with(superquadric, &TessellationOptions::default())
}

/// Tessellate with custom options and apply the element's placement
pub fn tessellate_with(superquadric: &Superquadric, options: &TessellationOptions) -> Tessellation {
    let surface = SuperquadricSurface::from_element(superquadric);
    let n = options.grid_resolution(superquadric.resolution());
    let mut tessellation = tessellate_surface(&surface, n, options);
    tessellation.mesh.transform(&superquadric.placement());
    tessellation
}

/// Run the pipeline on a local-frame surface with an `n` by `n` seed grid
pub fn tessellate_surface(surface: &SuperquadricSurface, n: usize, options: &TessellationOptions) -> Tessellation {
    let seed = ParameterGrid {
        u: arc_length_sample(-PI, PI, n, options.dense_samples, |u| surface.point(u, 0.0)),
        v: arc_length_sample(-FRAC_PI_2, FRAC_PI_2, n, options.dense_samples, |v| surface.point(0.0, v)),
    };

    let mut grid = relax_iterations(surface, seed, options.initial_relaxations);
    if options.refine {
        let refined = subdivide_high_curvature(surface, &grid, options.normal_dot_threshold, options.normal_epsilon);
        debug!(
            "curvature refinement: {}x{} -> {}x{} grid",
            grid.nu(),
            grid.nv(),
            refined.nu(),
            refined.nv()
        );
        grid = relax_iterations(surface, refined, options.refinement_relaxations);
    }

    let mesh = build_mesh(surface, &grid);
    debug!(
        "tessellated superquadric: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Tessellation { mesh, grid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sceneviz_core::{Point3f, SuperquadricOptions, Vector3f};

    #[test]
    fn test_grid_resolution_is_clamped() {
        let options = TessellationOptions::default();
        assert_eq!(options.grid_resolution(30), 24);
        assert_eq!(options.grid_resolution(1), MIN_GRID_RESOLUTION);
        assert_eq!(options.grid_resolution(1000), 50);
        assert_eq!(TessellationOptions::preview().grid_resolution(1000), 20);
    }

    #[test]
    fn test_unit_sphere() {
        let sphere = Superquadric::sphere(1.0, SuperquadricOptions::default()).unwrap();
        let Tessellation { mesh, grid } = tessellate(&sphere);

        assert_eq!(mesh.face_count(), 2 * (grid.nu() - 1) * (grid.nv() - 1));
        assert_eq!(mesh.vertex_count(), (grid.nu() - 1) * grid.nv());
        for vertex in &mesh.vertices {
            let r = vertex.coords.norm();
            assert!((0.95..=1.05).contains(&r), "vertex {:?} off the sphere", vertex);
        }
    }

    #[test]
    fn test_preview_skips_refinement() {
        let sphere = Superquadric::sphere(1.0, SuperquadricOptions::default()).unwrap();
        let Tessellation { grid, .. } = tessellate_with(&sphere, &TessellationOptions::preview());
        assert_eq!(grid.nu(), 20);
        assert_eq!(grid.nv(), 20);
    }

    #[test]
    fn test_placement_uses_rotation_matrix_then_translation() {
        // 90 degrees about x: local +z ends up on world -y
        let options = SuperquadricOptions {
            translation: Vector3f::new(0.0, 0.0, 5.0),
            rotation_matrix: Some([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]),
            ..SuperquadricOptions::default()
        };
        let tall = Superquadric::new(Vector3f::new(1.0, 1.0, 3.0), Vector3f::new(2.0, 2.0, 2.0), options).unwrap();
        let Tessellation { mesh, .. } = tessellate_with(&tall, &TessellationOptions::preview());

        let lowest_y = mesh.vertices.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let highest_z = mesh.vertices.iter().map(|p| p.z).fold(f32::NEG_INFINITY, f32::max);
        assert_relative_eq!(lowest_y, -3.0, epsilon = 1e-4);
        // the grid need not hit local y = 1 exactly
        assert!(highest_z > 5.9 && highest_z <= 6.0 + 1e-4, "highest z {}", highest_z);

        let centroid = mesh.vertices.iter().fold(Vector3f::zeros(), |acc, p| acc + p.coords) / mesh.vertex_count() as f32;
        assert_relative_eq!(Point3f::from(centroid).z, 5.0, epsilon = 0.2);
    }

    #[test]
    fn test_bent_superquadric_stays_finite() {
        let options = SuperquadricOptions {
            tapering: [0.3, -0.2],
            bending: [0.0, 0.0, 0.4, 0.5, 0.0, 0.0],
            ..SuperquadricOptions::default()
        };
        let sq = Superquadric::new(Vector3f::new(0.5, 0.5, 2.0), Vector3f::new(3.0, 3.0, 3.0), options).unwrap();
        let Tessellation { mesh, grid } = tessellate(&sq);
        assert_eq!(mesh.face_count(), 2 * (grid.nu() - 1) * (grid.nv() - 1));
        assert!(mesh.vertices.iter().all(|p| p.coords.iter().all(|c| c.is_finite())));
    }
}
