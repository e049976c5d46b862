//! # Vantage
//!
//! Viewpoint selection and camera framing for 3D surface meshes.
//!
//! Vantage picks the camera viewpoints that best reveal an object's
//! shape and computes a camera that frames it at a consistent viewport
//! fill ratio, independent of the mesh's size or orientation. Loading,
//! rasterization and image output stay with the host renderer, reached
//! through the collaborator traits in `vantage-camera` and
//! `vantage-core`.
//!
//! ## Quick Start
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! fn main() -> vantage::Result<()> {
//!     let mut mesh = TriangleMesh::from_vertices_and_faces(
//!         vec![
//!             Point3f::new(0.0, 0.0, 0.0),
//!             Point3f::new(1.0, 0.0, 0.0),
//!             Point3f::new(0.0, 1.0, 0.5),
//!         ],
//!         vec![[0, 1, 2]],
//!     );
//!     mesh.center_at_origin();
//!
//!     // Rank the most informative viewing directions...
//!     let views = find_best_views(&mesh, 3)?;
//!
//!     // ...and place a camera for the best one.
//!     let camera = place_camera(&mesh, CameraView::Direction(views[0].0))?;
//!     println!("camera at {:?}", camera.position);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms and camera
//! - `algorithms`: Viewpoint selection (scoring and ranking)
//! - `camera`: Camera placement, presets and auto-zoom framing

// Re-export core functionality
pub use vantage_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use vantage_algorithms as algorithms;

#[cfg(feature = "camera")]
pub use vantage_camera as camera;

/// Convenient imports for common use cases
pub mod prelude {
    pub use vantage_core::*;

    #[cfg(feature = "algorithms")]
    pub use vantage_algorithms::*;

    #[cfg(feature = "camera")]
    pub use vantage_camera::*;
}
