//! Core traits for vantage

use crate::bounds::Aabb;
use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::point::*;
use std::path::Path;

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> Aabb;

    /// Get the center point of the object
    fn center(&self) -> Point3f;
}

/// External mesh-loading collaborator
///
/// File parsing lives in the host application; implementations surface
/// failures as [`crate::Error::Load`] or [`crate::Error::UnsupportedFormat`].
pub trait MeshSource {
    /// Load a mesh from a file
    fn load(&self, path: &Path) -> Result<TriangleMesh>;
}

impl Drawable for TriangleMesh {
    fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
            .unwrap_or_else(|| Aabb::new(Point3f::origin(), Point3f::origin()))
    }

    fn center(&self) -> Point3f {
        self.bounding_box().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(-1.0, 0.0, 2.0),
                Point3f::new(1.0, 4.0, 0.0),
                Point3f::new(0.0, 2.0, 6.0),
            ],
            vec![[0, 1, 2]],
        );

        let bounds = mesh.bounding_box();
        assert_eq!(bounds.min, Point3f::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3f::new(1.0, 4.0, 6.0));
        assert_eq!(mesh.center(), Point3f::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_mesh_bounding_box_is_degenerate() {
        let mesh = TriangleMesh::new();
        let bounds = mesh.bounding_box();

        assert_eq!(bounds.min, Point3f::origin());
        assert_eq!(bounds.max, Point3f::origin());
    }
}
