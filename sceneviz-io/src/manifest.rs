//! Manifest exporter: one JSON index plus side-car payloads per element

use crate::context::ExportContext;
use log::{debug, info};
use sceneviz_core::{ElementCodec, Error, PropertyRecord, Result, Scene};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What an export pass left on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub manifest_path: PathBuf,
    /// Side-car files in the order they were written
    pub binary_files: Vec<PathBuf>,
}

/// Writes a [`Scene`] as `manifest.json` plus one payload per element that has bulk data
pub struct ManifestExporter;

impl ManifestExporter {
    /// Export `scene` into the context's destination.
    ///
    /// Any existing destination directory is removed first. Elements are written
    /// in registry order and the manifest keys follow the same order.
    pub fn export(scene: &Scene, ctx: &ExportContext) -> Result<ExportSummary> {
        prepare_destination(ctx.destination())?;

        let mut manifest = PropertyRecord::new();
        let mut binary_files = Vec::new();
        for (name, element) in scene.elements() {
            let record = element.describe(&ctx.binary_filename(name))?;
            if let Some(written) = element.write_binary(&ctx.binary_path(name))? {
                debug!("wrote payload for '{}' to {:?}", name, written);
                binary_files.push(written);
            }
            manifest.insert(name.to_string(), Value::Object(record));
        }

        let manifest_path = ctx.manifest_path();
        write_json(&manifest_path, &manifest)?;
        info!(
            "exported {} elements ({} payloads) to {:?}",
            manifest.len(),
            binary_files.len(),
            ctx.destination()
        );

        Ok(ExportSummary {
            manifest_path,
            binary_files,
        })
    }
}

/// Remove and recreate the export directory
pub(crate) fn prepare_destination(destination: &Path) -> Result<()> {
    let conflict = |source| Error::DestinationConflict {
        path: destination.to_path_buf(),
        source,
    };
    if destination.exists() {
        debug!("removing previous export at {:?}", destination);
        fs::remove_dir_all(destination).map_err(conflict)?;
    }
    fs::create_dir_all(destination).map_err(conflict)
}

/// Pretty-print a serializable value to `path`
pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
