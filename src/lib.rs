//! # sceneviz
//!
//! Assemble 3D scenes in memory and export them for a browser viewer or an
//! offline Blender renderer.
//!
//! This is the umbrella crate that provides convenient access to all sceneviz functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Scene registry, element types and their manifest/binary codecs
//! - **Geometry**: Superquadric tessellation (arc-length seeding, relaxation, curvature refinement)
//! - **I/O**: Manifest export, PLY meshes and Blender bundles
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sceneviz::prelude::*;
//!
//! # fn main() -> sceneviz::Result<()> {
//! let mut scene = Scene::new();
//! scene.add_points(
//!     "Points",
//!     vec![Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 0.0, 0.0)],
//!     None,
//!     None,
//!     PointsOptions::default(),
//! )?;
//! scene.add_bounding_box(
//!     "Box",
//!     Point3f::new(0.5, 0.0, 0.0),
//!     Vector3f::new(1.0, 0.2, 0.2),
//!     CuboidOptions::default(),
//! )?;
//!
//! ManifestExporter::export(&scene, &ExportContext::new("scene_out"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables geometry and io
//! - `geometry`: Superquadric tessellation
//! - `io`: Exporters (pulls in `geometry` for the Blender bundle)

// Re-export core functionality
pub use sceneviz_core::*;

// Re-export sub-crates
#[cfg(feature = "geometry")]
pub use sceneviz_geometry as geometry;

#[cfg(feature = "io")]
pub use sceneviz_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use sceneviz_core::*;

    #[cfg(feature = "geometry")]
    pub use sceneviz_geometry::{tessellate, tessellate_with, Tessellation, TessellationOptions};

    #[cfg(feature = "io")]
    pub use sceneviz_io::{
        BlenderConfig, BlenderExporter, ExportContext, ExportSummary, ManifestExporter, MeshReader, MeshWriter,
        PlyReader, PlyWriter,
    };
}
