//! Core data structures for sceneviz
//!
//! This crate provides the scene data model: the element variants (points,
//! lines, boxes, superquadrics, ...), the codec contract that turns each of
//! them into a manifest record and an optional binary payload, and the scene
//! registry that keeps them in order under unique names.

pub mod point;
pub mod transform;
pub mod mesh;
pub mod codec;
pub mod elements;
pub mod scene;
pub mod error;

pub use point::*;
pub use transform::*;
pub use mesh::*;
pub use codec::{ElementCodec, ElementKind, PropertyRecord};
pub use elements::*;
pub use scene::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Point3, Vector3};
