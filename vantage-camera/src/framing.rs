//! Camera placement and auto-zoom framing

use log::debug;
use serde::{Deserialize, Serialize};
use vantage_core::{Drawable, Error, Point3f, Result, TriangleMesh, Vector3f};

use crate::preset::ViewPreset;
use crate::render::ViewportBounds;

/// Camera distance as a multiple of the bounding-box diagonal
pub const DISTANCE_DIAGONAL_FACTOR: f32 = 1.8;

/// Perspective view angle in degrees
pub const VIEW_ANGLE_DEG: f32 = 30.0;

/// Fraction of the viewport the projected silhouette should fill
pub const TARGET_FILL: f32 = 0.875;

/// Lower zoom clamp
pub const ZOOM_MIN: f32 = 0.5;

/// Upper zoom clamp
pub const ZOOM_MAX: f32 = 3.0;

/// A fully specified static camera
///
/// Invariants: `0 < near_clip < far_clip`, position differs from the
/// focal point, and `zoom` stays within `[ZOOM_MIN, ZOOM_MAX]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    pub position: Point3f,
    pub focal_point: Point3f,
    pub up: Vector3f,
    /// Perspective view angle in degrees
    pub view_angle: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// Multiplicative zoom applied on top of the renderer's auto-fit
    pub zoom: f32,
}

impl CameraFrame {
    /// Distance from the camera to its focal point
    pub fn distance(&self) -> f32 {
        (self.position - self.focal_point).norm()
    }
}

/// Where to point the camera: a named preset or an arbitrary direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraView {
    Preset(ViewPreset),
    /// View direction from the object toward the camera
    Direction(Vector3f),
}

impl From<ViewPreset> for CameraView {
    fn from(preset: ViewPreset) -> Self {
        CameraView::Preset(preset)
    }
}

impl From<Vector3f> for CameraView {
    fn from(direction: Vector3f) -> Self {
        CameraView::Direction(direction)
    }
}

/// Place the camera for `view` without the auto-zoom pass
///
/// The mesh is expected to be centered at the origin (see
/// [`TriangleMesh::center_at_origin`]); the focal point is the
/// bounding-box center either way, so an uncentered mesh is still
/// framed, just with an off-origin focal point.
///
/// Presets put the camera on their canonical axis; an arbitrary
/// direction puts it at `-direction * distance` with a `+z` up vector.
///
/// # Errors
/// Fails on an empty mesh, a mesh with zero extent, or a zero-length
/// direction.
pub fn place_camera(mesh: &TriangleMesh, view: CameraView) -> Result<CameraFrame> {
    if mesh.vertices.is_empty() {
        return Err(Error::InvalidData(
            "cannot frame a mesh with no points".to_string(),
        ));
    }

    let bounds = mesh.bounding_box();
    if bounds.max_extent() <= 0.0 {
        return Err(Error::InvalidData(format!(
            "mesh has zero extent: {:?}",
            bounds
        )));
    }

    let diagonal = bounds.diagonal();
    let camera_distance = DISTANCE_DIAGONAL_FACTOR * diagonal;
    let focal_point = bounds.center();

    let (offset, up) = match view {
        CameraView::Preset(preset) => (preset.direction() * camera_distance, preset.up()),
        CameraView::Direction(direction) => {
            let norm = direction.norm();
            if norm <= f32::EPSILON {
                return Err(Error::InvalidData(format!(
                    "view direction has zero length: {:?}",
                    direction
                )));
            }
            (
                -(direction / norm) * camera_distance,
                Vector3f::new(0.0, 0.0, 1.0),
            )
        }
    };

    // The whole bounding box stays inside the clip volume for any
    // orientation, and near stays strictly positive.
    let near_clip = (camera_distance - diagonal).max(0.1 * camera_distance);
    let far_clip = camera_distance + diagonal;

    Ok(CameraFrame {
        position: focal_point + offset,
        focal_point,
        up,
        view_angle: VIEW_ANGLE_DEG,
        near_clip,
        far_clip,
        zoom: 1.0,
    })
}

/// Compute the full camera frame for `view`, including the auto-zoom pass
///
/// The viewport collaborator performs the renderer's generic bounds fit;
/// the zoom factor then corrects it toward [`TARGET_FILL`], since the
/// generic fit knows nothing about the desired fill ratio or the
/// orientation-dependent silhouette width. Without a valid visible-bounds
/// report the auto-fit result is kept unchanged.
pub fn frame(
    mesh: &TriangleMesh,
    view: CameraView,
    viewport: &mut impl ViewportBounds,
) -> Result<CameraFrame> {
    let mut camera = place_camera(mesh, view)?;
    let max_size = mesh.bounding_box().max_extent();

    match viewport.fit_visible_bounds(&camera, mesh) {
        Some(visible) => {
            let visible_width = visible.projected_width();
            if visible_width > 0.0 {
                let zoom = TARGET_FILL / (visible_width / max_size);
                camera.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
                debug!(
                    "applied fill zoom {:.2} for {:.1}% fill",
                    camera.zoom,
                    TARGET_FILL * 100.0
                );
            } else {
                debug!("degenerate visible bounds, keeping auto-fit framing");
            }
        }
        None => debug!("no visible bounds reported, keeping auto-fit framing"),
    }

    Ok(camera)
}
