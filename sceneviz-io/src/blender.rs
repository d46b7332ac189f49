//! Export bundle for the offline Blender renderer
//!
//! The bundle is the regular manifest export plus one PLY mesh per
//! superquadric and per point cloud (Blender has neither primitive; clouds
//! become colored sphere meshes) and the render settings as
//! `blender_config.json`. Launching Blender is left to the caller.

use crate::context::ExportContext;
use crate::manifest::{write_json, ExportSummary, ManifestExporter};
use crate::ply::PlyWriter;
use crate::MeshWriter;
use log::info;
use sceneviz_core::{Result, Scene, SceneElement};
use sceneviz_geometry::{tessellate_with, TessellationOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the render settings inside the export directory
pub const BLENDER_CONFIG_NAME: &str = "blender_config.json";

/// Render settings consumed by the Blender import script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlenderConfig {
    /// Path to the Blender executable
    pub blender_path: PathBuf,
    #[serde(default = "default_true")]
    pub render: bool,
    #[serde(default = "default_render_resolution")]
    pub render_resolution: [u32; 2],
    #[serde(default = "default_true")]
    pub render_film_transparent: bool,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Render a camera fly-around instead of a single frame
    #[serde(default)]
    pub animation: bool,
    /// Number of frames
    #[serde(default = "default_animation_length")]
    pub animation_length: u32,
    /// Radius of the circle the camera travels on
    #[serde(default = "default_animation_circle_radius")]
    pub animation_circle_radius: f32,
    #[serde(default)]
    pub animation_circle_center: [f32; 3],
    #[serde(default)]
    pub animation_circle_rotation: [f32; 3],
    /// Camera target during the animation; the circle center when unset
    #[serde(default)]
    pub animation_look_at_target: Option<[f32; 3]>,
    /// Spline through these points replaces the circle when set
    #[serde(default)]
    pub animation_spline_control_points: Option<Vec<[f32; 3]>>,
    #[serde(default = "default_cycles_samples")]
    pub cycles_samples: u32,
    #[serde(default = "default_file_format")]
    pub file_format: String,
}

fn default_true() -> bool {
    true
}

fn default_render_resolution() -> [u32; 2] {
    [800, 600]
}

fn default_output_prefix() -> String {
    "out".to_string()
}

fn default_animation_length() -> u32 {
    60
}

fn default_animation_circle_radius() -> f32 {
    5.0
}

fn default_cycles_samples() -> u32 {
    10
}

fn default_file_format() -> String {
    "PNG".to_string()
}

impl BlenderConfig {
    /// Default settings for the Blender executable at `blender_path`
    pub fn new(blender_path: impl Into<PathBuf>) -> Self {
        Self {
            blender_path: blender_path.into(),
            render: true,
            render_resolution: default_render_resolution(),
            render_film_transparent: true,
            output_prefix: default_output_prefix(),
            animation: false,
            animation_length: default_animation_length(),
            animation_circle_radius: default_animation_circle_radius(),
            animation_circle_center: [0.0; 3],
            animation_circle_rotation: [0.0; 3],
            animation_look_at_target: None,
            animation_spline_control_points: None,
            cycles_samples: default_cycles_samples(),
            file_format: default_file_format(),
        }
    }
}

/// What a Blender export left on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlenderExportSummary {
    pub manifest: ExportSummary,
    /// One PLY per superquadric or point cloud, in registry order
    pub meshes: Vec<PathBuf>,
    pub config_path: PathBuf,
}

/// Writes the manifest, PLY meshes and render settings
pub struct BlenderExporter {
    pub tessellation: TessellationOptions,
    pub writer: PlyWriter,
}

impl Default for BlenderExporter {
    fn default() -> Self {
        Self {
            tessellation: TessellationOptions::default(),
            writer: PlyWriter::binary(),
        }
    }
}

impl BlenderExporter {
    pub fn new(tessellation: TessellationOptions) -> Self {
        Self {
            tessellation,
            ..Self::default()
        }
    }

    /// Export with the default exporter settings
    pub fn export(scene: &Scene, ctx: &ExportContext, config: &BlenderConfig) -> Result<BlenderExportSummary> {
        Self::default().export_bundle(scene, ctx, config)
    }

    pub fn export_bundle(
        &self,
        scene: &Scene,
        ctx: &ExportContext,
        config: &BlenderConfig,
    ) -> Result<BlenderExportSummary> {
        let manifest = ManifestExporter::export(scene, ctx)?;

        let mut meshes = Vec::new();
        for (name, element) in scene.elements() {
            let mesh = match element {
                SceneElement::Superquadric(superquadric) => {
                    let mut mesh = tessellate_with(superquadric, &self.tessellation).mesh;
                    mesh.compute_vertex_normals();
                    mesh
                }
                SceneElement::Points(points) => points.sphere_mesh(),
                _ => continue,
            };
            let path = ctx.destination().join(format!("{}.ply", name));
            self.writer.write_mesh(&mesh, &path)?;
            meshes.push(path);
        }

        let config_path = ctx.destination().join(BLENDER_CONFIG_NAME);
        write_json(&config_path, config)?;
        info!(
            "wrote Blender bundle to {:?} ({} meshes)",
            ctx.destination(),
            meshes.len()
        );

        Ok(BlenderExportSummary {
            manifest,
            meshes,
            config_path,
        })
    }
}
