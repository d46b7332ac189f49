//! # sceneviz geometry
//!
//! Mesh generation for the parametric scene elements.
//!
//! The main entry point is [`tessellate`], which turns a superquadric (with its
//! tapering, bending and placement) into a [`TriangleMesh`](sceneviz_core::TriangleMesh)
//! suitable for export to mesh-based renderers.

pub mod superquadric;

// Re-export commonly used items
pub use superquadric::*;
