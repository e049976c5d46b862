//! # Vantage Algorithms
//!
//! Viewpoint selection ("front detection") for 3D surface meshes.
//!
//! This crate ranks candidate viewing directions for a mesh by combining
//! principal-axis alignment with a back-face visibility ratio, so callers
//! can render the handful of views that best reveal the object's shape.

pub mod pca;
pub mod views;

// Re-export commonly used items
pub use pca::*;
pub use views::*;
