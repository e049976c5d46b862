//! # Vantage Camera
//!
//! Camera placement and framing for 3D surface meshes.
//!
//! Given a view direction - picked by the scorer, named as a preset, or
//! supplied directly - this crate computes the full static camera: a
//! position, orientation, clipping range and a corrective zoom factor
//! that frames the mesh at a consistent viewport fill ratio. The actual
//! rasterization is the host renderer's job, reached through the traits
//! in [`render`].

pub mod preset;
pub mod framing;
pub mod render;

pub use preset::*;
pub use framing::*;
pub use render::*;
