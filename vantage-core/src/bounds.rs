//! Axis-aligned bounding boxes

use crate::point::*;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Create a bounding box from its corners
    pub fn new(min: Point3f, max: Point3f) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all points, or `None` for an empty slice
    pub fn from_points(points: &[Point3f]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;

        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        Some(Self { min, max })
    }

    /// Per-axis extents (width, depth, height)
    pub fn extents(&self) -> Vector3f {
        self.max - self.min
    }

    /// Largest single-axis extent
    pub fn max_extent(&self) -> f32 {
        let extents = self.extents();
        extents.x.max(extents.y).max(extents.z)
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f32 {
        self.extents().norm()
    }

    /// Center point of the box
    pub fn center(&self) -> Point3f {
        Point3f::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Projected silhouette width: the larger of the x and y spans.
    ///
    /// This is the quantity the framer compares against the target fill
    /// ratio after the renderer's bounds fit.
    pub fn projected_width(&self) -> f32 {
        let extents = self.extents();
        extents.x.max(extents.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point3f::new(-1.0, 2.0, 0.5),
            Point3f::new(3.0, -2.0, 0.0),
            Point3f::new(0.0, 0.0, 4.0),
        ];

        let bounds = Aabb::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point3f::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Point3f::new(3.0, 2.0, 4.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_extents_and_diagonal() {
        let bounds = Aabb::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 2.0));

        assert_eq!(bounds.extents(), Vector3f::new(1.0, 2.0, 2.0));
        assert_relative_eq!(bounds.max_extent(), 2.0);
        assert_relative_eq!(bounds.diagonal(), 3.0);
        assert_eq!(bounds.center(), Point3f::new(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_projected_width_picks_larger_span() {
        let bounds = Aabb::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 4.0, 9.0));
        assert_relative_eq!(bounds.projected_width(), 4.0);
    }
}
