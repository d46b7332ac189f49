//! Scene registry: an insertion-ordered map from element name to element
//!
//! The registry is always seeded with a camera under [`CAMERA_NAME`]. Names are
//! sanitized before insertion so they are safe to use as file names and URL
//! fragments in the export directory.

use crate::codec::ElementCodec;
use crate::elements::*;
use crate::error::{Error, Result};
use crate::point::{Point3f, Rgb, Vector3f};
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

/// Reserved name of the scene camera
pub const CAMERA_NAME: &str = "Camera_0";

/// Separator the viewers use to group elements into sub-layers
pub const LAYER_SEPARATOR: char = ';';

/// Character that is not allowed in element names and is rewritten to [`LAYER_SEPARATOR`]
pub const RESERVED_SEPARATOR: char = ':';

/// Path separators are rewritten to this so names never leave the export directory
pub const PATH_SEPARATOR_REPLACEMENT: char = '_';

/// Make a user-supplied name safe for use as an element key
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            RESERVED_SEPARATOR => LAYER_SEPARATOR,
            '/' | '\\' => PATH_SEPARATOR_REPLACEMENT,
            other => other,
        })
        .collect()
}

/// Ordered collection of named scene elements
#[derive(Debug, Clone)]
pub struct Scene {
    entries: Vec<(String, SceneElement)>,
    index: HashMap<String, usize>,
}

impl Scene {
    /// Create a scene containing only the default camera
    pub fn new() -> Self {
        Self::with_camera(Camera::default())
    }

    /// Create a scene containing only `camera`
    pub fn with_camera(camera: Camera) -> Self {
        let mut index = HashMap::new();
        index.insert(CAMERA_NAME.to_string(), 0);
        Self {
            entries: vec![(CAMERA_NAME.to_string(), SceneElement::Camera(camera))],
            index,
        }
    }

    /// The scene camera
    pub fn camera(&self) -> &Camera {
        match &self.entries[0].1 {
            SceneElement::Camera(camera) => camera,
            // the first slot is only ever written by `with_camera` and `set_camera`
            _ => unreachable!("scene camera slot holds a non-camera element"),
        }
    }

    /// Replace the scene camera
    pub fn set_camera(&mut self, camera: Camera) {
        self.entries[0].1 = SceneElement::Camera(camera);
    }

    /// Insert `element` under the sanitized `name`, replacing any element already
    /// registered there (the replacement keeps the original position).
    ///
    /// Returns the sanitized name.
    pub fn add(&mut self, name: &str, element: impl Into<SceneElement>) -> Result<String> {
        let name = sanitize_name(name);
        let element = element.into();
        if name == CAMERA_NAME {
            return Err(Error::ReservedName(name));
        }
        if matches!(name.as_str(), "" | "." | "..") {
            return Err(Error::InvalidData(format!("'{}' is not a valid element name", name)));
        }
        if let SceneElement::Camera(_) = element {
            return Err(Error::InvalidData(
                "The scene has exactly one camera; use set_camera to change it".to_string(),
            ));
        }

        match self.index.get(&name) {
            Some(&slot) => {
                debug!("replacing scene element '{}' ({} -> {})", name, self.entries[slot].1.kind(), element.kind());
                self.entries[slot].1 = element;
            }
            None => {
                debug!("adding scene element '{}' ({})", name, element.kind());
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name.clone(), element));
            }
        }
        Ok(name)
    }

    /// Iterate `(name, element)` pairs in insertion order, camera first
    pub fn elements(&self) -> impl Iterator<Item = (&str, &SceneElement)> + '_ {
        self.entries.iter().map(|(name, element)| (name.as_str(), element))
    }

    /// Element names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Look up an element by (unsanitized or sanitized) name
    pub fn get(&self, name: &str) -> Option<&SceneElement> {
        self.index
            .get(&sanitize_name(name))
            .map(|&slot| &self.entries[slot].1)
    }

    /// Check whether an element is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&sanitize_name(name))
    }

    /// Number of elements, camera included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the camera is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a point cloud
    pub fn add_points(
        &mut self,
        name: &str,
        positions: Vec<Point3f>,
        colors: Option<Vec<Rgb>>,
        normals: Option<Vec<Vector3f>>,
        options: PointsOptions,
    ) -> Result<String> {
        let points = Points::new(positions, colors, normals, options)?;
        self.add(name, points)
    }

    /// Add line segments from `starts[i]` to `ends[i]`
    pub fn add_lines(
        &mut self,
        name: &str,
        starts: &[Point3f],
        ends: &[Point3f],
        colors: Option<&[Rgb]>,
        visible: bool,
    ) -> Result<String> {
        let lines = Lines::new(starts, ends, colors, visible)?;
        self.add(name, lines)
    }

    /// Add an oriented bounding box
    pub fn add_bounding_box(
        &mut self,
        name: &str,
        position: Point3f,
        size: Vector3f,
        options: CuboidOptions,
    ) -> Result<String> {
        self.add(name, Cuboid::new(position, size, options))
    }

    /// Add a polyline through `positions`
    pub fn add_polyline(&mut self, name: &str, positions: Vec<Point3f>, options: PolylineOptions) -> Result<String> {
        self.add(name, Polyline::new(positions, options))
    }

    /// Add an arrow from `start` to `end`
    pub fn add_arrow(&mut self, name: &str, start: Point3f, end: Point3f, options: ArrowOptions) -> Result<String> {
        self.add(name, Arrow::new(start, end, options))
    }

    /// Add text labels
    pub fn add_labels(
        &mut self,
        name: &str,
        labels: Vec<String>,
        positions: Vec<Point3f>,
        colors: Vec<Rgb>,
        visible: bool,
    ) -> Result<String> {
        let labels = Labels::new(labels, positions, colors, visible)?;
        self.add(name, labels)
    }

    /// Add labelled 2D circles
    pub fn add_circles_2d(
        &mut self,
        name: &str,
        labels: Vec<String>,
        positions: Vec<Point3f>,
        border_colors: Vec<Rgb>,
        fill_colors: Vec<Rgb>,
        visible: bool,
    ) -> Result<String> {
        let circles = Circles2D::new(labels, positions, border_colors, fill_colors, visible)?;
        self.add(name, circles)
    }

    /// Add a motion hint
    pub fn add_motion(
        &mut self,
        name: &str,
        motion_type: MotionType,
        direction: Vector3f,
        origin: Point3f,
        options: MotionOptions,
    ) -> Result<String> {
        self.add(name, Motion::new(motion_type, direction, origin, options))
    }

    /// Add a reference to a mesh file; fails if the file does not exist
    pub fn add_mesh(&mut self, name: &str, path: impl Into<PathBuf>, options: MeshOptions) -> Result<String> {
        let mesh = MeshAsset::new(path, options)?;
        self.add(name, mesh)
    }

    /// Add a superquadric
    pub fn add_superquadric(
        &mut self,
        name: &str,
        scalings: Vector3f,
        exponents: Vector3f,
        options: SuperquadricOptions,
    ) -> Result<String> {
        let superquadric = Superquadric::new(scalings, exponents, options)?;
        self.add(name, superquadric)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
