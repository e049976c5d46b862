//! Core data structures and traits for vantage
//!
//! This crate provides the fundamental types for viewpoint selection and
//! camera framing: mesh and point types, axis-aligned bounds, the seams
//! to the external rendering collaborator, and the shared error type.

pub mod point;
pub mod bounds;
pub mod mesh;
pub mod traits;
pub mod error;

pub use point::*;
pub use bounds::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3};

// Type aliases for easier imports
pub type Mesh = TriangleMesh;
