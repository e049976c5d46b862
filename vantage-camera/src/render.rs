//! Seams to the external rendering collaborator
//!
//! The framing core never rasterizes anything itself. The host renderer
//! implements these traits; the framer only needs the bounds fit, and
//! callers use the capture primitive after a frame has been computed.

use vantage_core::{Aabb, Result, TriangleMesh};

use crate::framing::CameraFrame;

/// Bounds-fitting primitive of the host renderer
///
/// Mirrors a renderer's "reset camera to the visible geometry" call:
/// the implementation applies `frame` to its own camera, fits it, and
/// reports the world-space bounds of what ended up visible. `None`
/// means no valid visible geometry, in which case the framer keeps the
/// auto-fit result without a zoom correction.
pub trait ViewportBounds {
    fn fit_visible_bounds(&mut self, frame: &CameraFrame, mesh: &TriangleMesh) -> Option<Aabb>;
}

/// Frame capture primitive of the host renderer
pub trait FrameCapture {
    /// Render `mesh` through `frame` at `resolution` and return the
    /// encoded image bytes
    ///
    /// # Errors
    /// Render failures surface as [`vantage_core::Error::Render`],
    /// propagated unchanged to the caller.
    fn capture(
        &mut self,
        frame: &CameraFrame,
        mesh: &TriangleMesh,
        resolution: (u32, u32),
    ) -> Result<Vec<u8>>;
}
