//! Scene element variants and the closed [`SceneElement`] enum over them

mod arrow;
mod camera;
mod circles;
mod cuboid;
mod labels;
mod lines;
mod mesh_asset;
mod motion;
mod points;
mod polyline;
mod superquadric;

pub use arrow::{Arrow, ArrowOptions};
pub use camera::Camera;
pub use circles::Circles2D;
pub use cuboid::{Cuboid, CuboidOptions};
pub use labels::Labels;
pub use lines::Lines;
pub use mesh_asset::{MeshAsset, MeshOptions};
pub use motion::{Motion, MotionOptions, MotionOrientation, MotionType};
pub use points::{Points, PointsOptions, ShadingMode};
pub use polyline::{Polyline, PolylineOptions};
pub use superquadric::{Superquadric, SuperquadricOptions};

use crate::codec::{ElementCodec, ElementKind, PropertyRecord};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Any element that can live in a scene
#[derive(Debug, Clone)]
pub enum SceneElement {
    Camera(Camera),
    Points(Points),
    Lines(Lines),
    Cuboid(Cuboid),
    Polyline(Polyline),
    Arrow(Arrow),
    Labels(Labels),
    Circles2D(Circles2D),
    Motion(Motion),
    Mesh(MeshAsset),
    Superquadric(Superquadric),
}

macro_rules! for_each_variant {
    ($element:expr, $inner:ident => $body:expr) => {
        match $element {
            SceneElement::Camera($inner) => $body,
            SceneElement::Points($inner) => $body,
            SceneElement::Lines($inner) => $body,
            SceneElement::Cuboid($inner) => $body,
            SceneElement::Polyline($inner) => $body,
            SceneElement::Arrow($inner) => $body,
            SceneElement::Labels($inner) => $body,
            SceneElement::Circles2D($inner) => $body,
            SceneElement::Motion($inner) => $body,
            SceneElement::Mesh($inner) => $body,
            SceneElement::Superquadric($inner) => $body,
        }
    };
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for SceneElement {
                fn from(element: $ty) -> Self {
                    SceneElement::$variant(element)
                }
            }
        )*
    };
}

impl_from_variant!(
    Camera(Camera),
    Points(Points),
    Lines(Lines),
    Cuboid(Cuboid),
    Polyline(Polyline),
    Arrow(Arrow),
    Labels(Labels),
    Circles2D(Circles2D),
    Motion(Motion),
    Mesh(MeshAsset),
    Superquadric(Superquadric),
);

impl ElementCodec for SceneElement {
    fn kind(&self) -> ElementKind {
        for_each_variant!(self, e => e.kind())
    }

    fn visible(&self) -> bool {
        for_each_variant!(self, e => e.visible())
    }

    fn describe(&self, binary_filename: &str) -> Result<PropertyRecord> {
        for_each_variant!(self, e => e.describe(binary_filename))
    }

    fn binary_payload(&self) -> Option<Vec<u8>> {
        for_each_variant!(self, e => e.binary_payload())
    }

    fn write_binary(&self, path: &Path) -> Result<Option<PathBuf>> {
        for_each_variant!(self, e => e.write_binary(path))
    }
}

impl SceneElement {
    /// The superquadric inside this element, if it is one
    pub fn as_superquadric(&self) -> Option<&Superquadric> {
        match self {
            SceneElement::Superquadric(sq) => Some(sq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Point3f, Vector3f};

    #[test]
    fn test_enum_kind_matches_record_type() {
        let elements: Vec<SceneElement> = vec![
            Camera::default().into(),
            Points::new(vec![Point3f::origin()], None, None, PointsOptions::default()).unwrap().into(),
            Lines::new(&[Point3f::origin()], &[Point3f::new(1.0, 0.0, 0.0)], None, true).unwrap().into(),
            Cuboid::new(Point3f::origin(), Vector3f::new(1.0, 1.0, 1.0), CuboidOptions::default()).into(),
            Polyline::new(vec![], PolylineOptions::default()).into(),
            Arrow::new(Point3f::origin(), Point3f::new(0.0, 1.0, 0.0), ArrowOptions::default()).into(),
            Labels::new(vec![], vec![], vec![], true).unwrap().into(),
            Circles2D::new(vec![], vec![], vec![], vec![], true).unwrap().into(),
            Motion::new(MotionType::Translation, Vector3f::x(), Point3f::origin(), MotionOptions::default()).into(),
            Superquadric::sphere(1.0, SuperquadricOptions::default()).unwrap().into(),
        ];
        for element in &elements {
            let record = element.describe("x.bin").unwrap();
            assert_eq!(record["type"], element.kind().as_str());
            assert!(record["visible"].is_boolean());
        }
        let with_payload: Vec<ElementKind> = elements
            .iter()
            .filter(|e| e.binary_payload().is_some())
            .map(|e| e.kind())
            .collect();
        assert_eq!(with_payload, vec![ElementKind::Points, ElementKind::Lines]);
    }
}
