//! References to polygon mesh files placed in the scene

use crate::codec::{build_record, ElementCodec, ElementKind, PropertyRecord};
use crate::error::{Error, Result};
use crate::point::{vector_array, Rgb, Vector3f};
use crate::transform::{normalize_quaternion, QuaternionXyzw, IDENTITY_QUATERNION};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Placement and color for [`MeshAsset`]
#[derive(Debug, Clone)]
pub struct MeshOptions {
    pub translation: Vector3f,
    /// `[x, y, z, w]`, normalized on construction
    pub rotation: QuaternionXyzw,
    pub scale: Vector3f,
    pub color: Rgb,
    pub visible: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            translation: Vector3f::zeros(),
            rotation: IDENTITY_QUATERNION,
            scale: Vector3f::new(1.0, 1.0, 1.0),
            color: [255, 255, 255],
            visible: true,
        }
    }
}

/// An external mesh file plus its placement; owns no vertex data
#[derive(Debug, Clone)]
pub struct MeshAsset {
    source: PathBuf,
    destination_name: String,
    translation: Vector3f,
    rotation: QuaternionXyzw,
    scale: Vector3f,
    color: Rgb,
    visible: bool,
}

#[derive(Serialize)]
struct MeshRecord<'a> {
    filename: &'a str,
    translation: [f32; 3],
    rotation: QuaternionXyzw,
    scale: [f32; 3],
    visible: bool,
    color: Rgb,
}

impl MeshAsset {
    /// Reference `source`, which must exist now.
    ///
    /// The exported copy is named `<stem>_<size in bytes>.<ext>` so different
    /// files with the same name do not collide in the export directory.
    pub fn new(source: impl Into<PathBuf>, options: MeshOptions) -> Result<Self> {
        let source = source.into();
        let metadata = match fs::metadata(&source) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Err(Error::MissingAsset { path: source }),
        };
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::InvalidData(format!("Mesh path has no usable file name: {:?}", source)))?;
        let destination_name = match source.extension().and_then(|s| s.to_str()) {
            Some(ext) => format!("{}_{}.{}", stem, metadata.len(), ext),
            None => format!("{}_{}", stem, metadata.len()),
        };

        Ok(Self {
            destination_name,
            source,
            translation: options.translation,
            rotation: normalize_quaternion(options.rotation),
            scale: options.scale,
            color: options.color,
            visible: options.visible,
        })
    }

    /// Path of the referenced mesh file
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name of the copy inside the export directory
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }
}

impl ElementCodec for MeshAsset {
    fn kind(&self) -> ElementKind {
        ElementKind::Mesh
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn describe(&self, _binary_filename: &str) -> Result<PropertyRecord> {
        build_record(
            self.kind(),
            &MeshRecord {
                filename: &self.destination_name,
                translation: vector_array(&self.translation),
                rotation: self.rotation,
                scale: vector_array(&self.scale),
                visible: self.visible,
                color: self.color,
            },
        )
    }

    /// Copies the mesh file next to `path` instead of writing a `.bin` payload.
    ///
    /// Elements sharing one source file share one copy.
    fn write_binary(&self, path: &Path) -> Result<Option<PathBuf>> {
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let destination = directory.join(&self.destination_name);
        if destination.exists() {
            debug!("mesh asset {:?} already exported", destination);
        } else {
            fs::copy(&self.source, &destination)?;
        }
        Ok(Some(destination))
    }
}
