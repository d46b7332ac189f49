//! Where and how an export is written

use std::path::{Path, PathBuf};

/// Default manifest file name inside the export directory
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.json";

/// Default extension appended to element names for side-car payloads
pub const DEFAULT_BINARY_EXTENSION: &str = ".bin";

/// Destination and naming of one export pass
///
/// The destination directory is owned by the export: it is deleted and
/// recreated every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    destination: PathBuf,
    manifest_name: String,
    binary_extension: String,
}

impl ExportContext {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            binary_extension: DEFAULT_BINARY_EXTENSION.to_string(),
        }
    }

    /// Use a different manifest file name
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Use a different payload extension (include the leading dot)
    pub fn with_binary_extension(mut self, extension: impl Into<String>) -> Self {
        self.binary_extension = extension.into();
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.destination.join(&self.manifest_name)
    }

    /// File name (relative to the destination) of the payload for element `name`
    pub fn binary_filename(&self, name: &str) -> String {
        format!("{}{}", name, self.binary_extension)
    }

    /// Absolute location of the payload for element `name`
    pub fn binary_path(&self, name: &str) -> PathBuf {
        self.destination.join(self.binary_filename(name))
    }
}
