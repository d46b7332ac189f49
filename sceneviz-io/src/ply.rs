//! PLY mesh support

use crate::{MeshReader, MeshWriter};
use log::debug;
use sceneviz_core::{Error, Point3f, Result, Rgb, TriangleMesh, Vector3f};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use ply_rs::{
    parser::Parser,
    writer::Writer,
    ply::{Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType, ScalarType},
};

pub struct PlyReader;

const COLOR_PROPERTIES: [&str; 3] = ["red", "green", "blue"];

/// Writes triangle meshes (with optional vertex normals and colors) as PLY
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlyWriter {
    pub binary: bool,
}

impl PlyWriter {
    /// Little-endian binary output instead of ASCII
    pub fn binary() -> Self {
        Self { binary: true }
    }

    /// Write `mesh` to any writer
    pub fn write_to<W: Write>(&self, mesh: &TriangleMesh, out: &mut W) -> Result<()> {
        let mut ply = self.build(mesh)?;
        Writer::new().write_ply(out, &mut ply)?;
        Ok(())
    }

    fn build(&self, mesh: &TriangleMesh) -> Result<Ply<DefaultElement>> {
        let normals = match &mesh.normals {
            Some(normals) if normals.len() != mesh.vertices.len() => {
                return Err(Error::shape_mismatch("mesh normals", mesh.vertices.len(), normals.len()))
            }
            other => other.as_ref(),
        };
        let colors = match &mesh.colors {
            Some(colors) if colors.len() != mesh.vertices.len() => {
                return Err(Error::shape_mismatch("mesh colors", mesh.vertices.len(), colors.len()))
            }
            other => other.as_ref(),
        };

        let mut ply = Ply::<DefaultElement>::new();
        if self.binary {
            ply.header.encoding = Encoding::BinaryLittleEndian;
        }

        let mut vertex_element = ElementDef::new("vertex".to_string());
        vertex_element.count = mesh.vertices.len();
        let mut vertex_properties = vec!["x", "y", "z"];
        if normals.is_some() {
            vertex_properties.extend(["nx", "ny", "nz"]);
        }
        for name in vertex_properties {
            vertex_element
                .properties
                .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::Float)));
        }
        if colors.is_some() {
            for name in COLOR_PROPERTIES {
                vertex_element
                    .properties
                    .add(PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::UChar)));
            }
        }
        ply.header.elements.add(vertex_element);

        let mut face_element = ElementDef::new("face".to_string());
        face_element.count = mesh.faces.len();
        face_element.properties.add(PropertyDef::new(
            "vertex_indices".to_string(),
            PropertyType::List(ScalarType::UChar, ScalarType::Int),
        ));
        ply.header.elements.add(face_element);

        let mut vertices = Vec::with_capacity(mesh.vertices.len());
        for (i, vertex) in mesh.vertices.iter().enumerate() {
            let mut element = DefaultElement::new();
            element.insert("x".to_string(), Property::Float(vertex.x));
            element.insert("y".to_string(), Property::Float(vertex.y));
            element.insert("z".to_string(), Property::Float(vertex.z));
            if let Some(normals) = normals {
                element.insert("nx".to_string(), Property::Float(normals[i].x));
                element.insert("ny".to_string(), Property::Float(normals[i].y));
                element.insert("nz".to_string(), Property::Float(normals[i].z));
            }
            if let Some(colors) = colors {
                for (name, &channel) in COLOR_PROPERTIES.iter().zip(&colors[i]) {
                    element.insert(name.to_string(), Property::UChar(channel));
                }
            }
            vertices.push(element);
        }
        ply.payload.insert("vertex".to_string(), vertices);

        let mut faces = Vec::with_capacity(mesh.faces.len());
        for face in &mesh.faces {
            let indices = face
                .iter()
                .map(|&index| {
                    i32::try_from(index)
                        .map_err(|_| Error::InvalidData(format!("Vertex index {} does not fit a PLY int", index)))
                })
                .collect::<Result<Vec<i32>>>()?;
            let mut element = DefaultElement::new();
            element.insert("vertex_indices".to_string(), Property::ListInt(indices));
            faces.push(element);
        }
        ply.payload.insert("face".to_string(), faces);

        Ok(ply)
    }
}

impl MeshWriter for PlyWriter {
    fn write_mesh<P: AsRef<Path>>(&self, mesh: &TriangleMesh, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(mesh, &mut writer)?;
        writer.flush()?;
        debug!(
            "wrote PLY mesh {:?}: {} vertices, {} faces",
            path,
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(())
    }
}

impl MeshReader for PlyReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
        let mut reader = BufReader::new(File::open(path)?);
        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let empty = Vec::new();
        let vertex_elements = ply.payload.get("vertex").unwrap_or(&empty);

        let mut vertices = Vec::with_capacity(vertex_elements.len());
        for vertex in vertex_elements {
            vertices.push(Point3f::new(
                extract_property_value(vertex, "x")?,
                extract_property_value(vertex, "y")?,
                extract_property_value(vertex, "z")?,
            ));
        }

        let mut faces = Vec::new();
        if let Some(face_elements) = ply.payload.get("face") {
            for face in face_elements {
                let indices = extract_face_indices(face)?;
                if indices.len() >= 3 {
                    faces.push([indices[0], indices[1], indices[2]]);
                }
            }
        }

        let normals = vertex_elements
            .iter()
            .map(|vertex| {
                Some(Vector3f::new(
                    extract_property_value(vertex, "nx").ok()?,
                    extract_property_value(vertex, "ny").ok()?,
                    extract_property_value(vertex, "nz").ok()?,
                ))
            })
            .collect::<Option<Vec<_>>>()
            .filter(|normals| !normals.is_empty());

        let colors = vertex_elements
            .iter()
            .map(extract_color)
            .collect::<Option<Vec<_>>>()
            .filter(|colors| !colors.is_empty());

        let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, faces);
        mesh.normals = normals;
        mesh.colors = colors;
        Ok(mesh)
    }
}

/// Extract a property value as f32 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract an 8-bit RGB color, if the element carries one
fn extract_color(element: &DefaultElement) -> Option<Rgb> {
    let mut color = [0u8; 3];
    for (channel, name) in color.iter_mut().zip(COLOR_PROPERTIES) {
        *channel = match element.get(name)? {
            Property::UChar(value) => *value,
            _ => return None,
        };
    }
    Some(color)
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> Result<Vec<usize>> {
    let list = element
        .get("vertex_indices")
        .or_else(|| element.get("vertex_index"));
    match list {
        Some(Property::ListInt(indices)) => indices
            .iter()
            .map(|&i| usize::try_from(i).map_err(|_| Error::InvalidData(format!("Negative vertex index {}", i))))
            .collect(),
        Some(Property::ListUInt(indices)) => Ok(indices.iter().map(|&i| i as usize).collect()),
        Some(Property::ListUChar(indices)) => Ok(indices.iter().map(|&i| i as usize).collect()),
        _ => Err(Error::InvalidData("Face element has no vertex index list".to_string())),
    }
}
