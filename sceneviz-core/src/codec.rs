//! Element discriminants and the codec contract shared by every scene element
//!
//! A codec turns one scene element into a JSON property record (the manifest
//! entry) and, for bulk data, a headerless little-endian binary payload.

use crate::error::{Error, Result};
use crate::point::{Point3f, Rgb, Vector3f};
use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// JSON object describing one element in the manifest
pub type PropertyRecord = serde_json::Map<String, Value>;

/// Discriminant of a scene element, emitted as the `type` field of its record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Camera,
    Points,
    Lines,
    Cuboid,
    Polyline,
    Arrow,
    Labels,
    Circles2D,
    Motion,
    Mesh,
    Superquadric,
}

impl ElementKind {
    /// Every kind, in declaration order
    pub const ALL: [ElementKind; 11] = [
        ElementKind::Camera,
        ElementKind::Points,
        ElementKind::Lines,
        ElementKind::Cuboid,
        ElementKind::Polyline,
        ElementKind::Arrow,
        ElementKind::Labels,
        ElementKind::Circles2D,
        ElementKind::Motion,
        ElementKind::Mesh,
        ElementKind::Superquadric,
    ];

    /// The `type` string understood by the viewers
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Camera => "camera",
            ElementKind::Points => "points",
            ElementKind::Lines => "lines",
            ElementKind::Cuboid => "cuboid",
            ElementKind::Polyline => "polyline",
            ElementKind::Arrow => "arrow",
            ElementKind::Labels => "labels",
            ElementKind::Circles2D => "circles_2d",
            ElementKind::Motion => "motion",
            ElementKind::Mesh => "mesh",
            ElementKind::Superquadric => "superquadric",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidData(format!("Unknown element type: {}", s)))
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Capabilities every scene element provides to the exporter
pub trait ElementCodec {
    /// The element discriminant
    fn kind(&self) -> ElementKind;

    /// Whether the viewer should show the element initially
    fn visible(&self) -> bool;

    /// JSON record for the manifest; always contains `type` and `visible`.
    ///
    /// Must not touch the filesystem. `binary_filename` is the name the
    /// payload will have inside the export directory.
    fn describe(&self, binary_filename: &str) -> Result<PropertyRecord>;

    /// Bulk data written next to the manifest, if the element has any
    fn binary_payload(&self) -> Option<Vec<u8>> {
        None
    }

    /// Write the element's side-car file, overwriting any existing file.
    ///
    /// Returns the path that was written, or `None` for elements without a payload.
    fn write_binary(&self, path: &Path) -> Result<Option<PathBuf>> {
        match self.binary_payload() {
            Some(bytes) => {
                fs::write(path, bytes)?;
                Ok(Some(path.to_path_buf()))
            }
            None => Ok(None),
        }
    }
}

/// Assemble a record from the kind tag and a serializable body struct
pub(crate) fn build_record<T: Serialize>(kind: ElementKind, body: &T) -> Result<PropertyRecord> {
    let mut record = PropertyRecord::new();
    record.insert("type".to_string(), Value::String(kind.as_str().to_string()));
    match serde_json::to_value(body)? {
        Value::Object(fields) => record.extend(fields),
        other => {
            return Err(Error::InvalidData(format!(
                "{} record must be a JSON object, got {}",
                kind, other
            )))
        }
    }
    Ok(record)
}

/// Append points as consecutive little-endian `f32` triples
pub(crate) fn write_points(buffer: &mut Vec<u8>, points: &[Point3f]) {
    for p in points {
        write_triple(buffer, [p.x, p.y, p.z]);
    }
}

/// Append vectors as consecutive little-endian `f32` triples
pub(crate) fn write_vectors(buffer: &mut Vec<u8>, vectors: &[Vector3f]) {
    for v in vectors {
        write_triple(buffer, [v.x, v.y, v.z]);
    }
}

/// Append colors as raw `u8` triples
pub(crate) fn write_colors(buffer: &mut Vec<u8>, colors: &[Rgb]) {
    for c in colors {
        buffer.extend_from_slice(c);
    }
}

fn write_triple(buffer: &mut Vec<u8>, values: [f32; 3]) {
    for value in values {
        // writing into a Vec cannot fail
        let _ = buffer.write_f32::<LittleEndian>(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ElementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
        assert_eq!(ElementKind::Circles2D.as_str(), "circles_2d");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("teapot".parse::<ElementKind>().is_err());
        assert!(serde_json::from_str::<ElementKind>("\"teapot\"").is_err());
    }

    #[test]
    fn test_build_record_puts_type_first() {
        #[derive(Serialize)]
        struct Body {
            visible: bool,
        }
        let record = build_record(ElementKind::Arrow, &Body { visible: true }).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "visible"]);
        assert_eq!(record["type"], "arrow");
    }

    #[test]
    fn test_payload_is_little_endian() {
        let mut buffer = Vec::new();
        write_points(&mut buffer, &[Point3f::new(1.0, -2.0, 0.5)]);
        write_colors(&mut buffer, &[[1, 2, 3]]);
        assert_eq!(buffer.len(), 15);
        assert_eq!(&buffer[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&buffer[4..8], &(-2.0f32).to_le_bytes());
        assert_eq!(&buffer[12..15], &[1, 2, 3]);
    }
}
