//! Export of sceneviz scenes to disk
//!
//! - [`ManifestExporter`] writes the JSON manifest and side-car payloads read by the web viewer
//! - [`BlenderExporter`] adds tessellated superquadric meshes and render settings for Blender
//! - [`ply`] reads and writes triangle meshes in PLY format

pub mod blender;
pub mod context;
pub mod manifest;
pub mod ply;

pub use blender::{BlenderConfig, BlenderExportSummary, BlenderExporter, BLENDER_CONFIG_NAME};
pub use context::{ExportContext, DEFAULT_BINARY_EXTENSION, DEFAULT_MANIFEST_NAME};
pub use manifest::{ExportSummary, ManifestExporter};
pub use ply::{PlyReader, PlyWriter};

use sceneviz_core::{Result, TriangleMesh};
use std::path::Path;

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh>;
}

/// Trait for writing meshes to files
pub trait MeshWriter {
    fn write_mesh<P: AsRef<Path>>(&self, mesh: &TriangleMesh, path: P) -> Result<()>;
}
