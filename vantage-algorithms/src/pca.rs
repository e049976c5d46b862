//! Principal axis analysis of vertex clouds

use nalgebra::Matrix3;
use vantage_core::{Error, Point3f, Result, Vector3f};

/// The principal axes of a point cloud
///
/// Axes are the orthonormal eigenvectors of the point covariance matrix,
/// sorted by eigenvalue descending, so `axes[0]` is the direction of
/// maximum spread. When eigenvalues are equal the sort is stable and the
/// eigen-solver's column order decides, which keeps degenerate clouds
/// deterministic.
#[derive(Debug, Clone)]
pub struct PrincipalAxes {
    /// Orthonormal principal directions, strongest spread first
    pub axes: [Vector3f; 3],
    /// Variance along each axis, descending
    pub eigenvalues: [f32; 3],
}

impl PrincipalAxes {
    /// Fit principal axes to a vertex cloud
    ///
    /// # Arguments
    /// * `points` - The vertex positions to analyze
    ///
    /// # Returns
    /// * `Result<PrincipalAxes>` - The fitted axes, or an error for an empty cloud
    pub fn fit(points: &[Point3f]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidData(
                "cannot fit principal axes to an empty point set".to_string(),
            ));
        }

        let n = points.len() as f32;
        let centroid = points
            .iter()
            .fold(Vector3f::zeros(), |acc, p| acc + p.coords)
            / n;

        let mut covariance = Matrix3::zeros();
        for point in points {
            let diff = point.coords - centroid;
            covariance += diff * diff.transpose();
        }
        covariance /= n;

        let eigen = covariance.symmetric_eigen();

        // Stable sort: equal eigenvalues keep the solver's column order.
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[b]
                .partial_cmp(&eigen.eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self {
            axes: [
                eigen.eigenvectors.column(order[0]).into_owned(),
                eigen.eigenvectors.column(order[1]).into_owned(),
                eigen.eigenvectors.column(order[2]).into_owned(),
            ],
            eigenvalues: [
                eigen.eigenvalues[order[0]],
                eigen.eigenvalues[order[1]],
                eigen.eigenvalues[order[2]],
            ],
        })
    }

    /// Strongest absolute alignment between `direction` and any principal axis
    pub fn alignment(&self, direction: &Vector3f) -> f32 {
        self.axes
            .iter()
            .map(|axis| direction.dot(axis).abs())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn elongated_cloud() -> Vec<Point3f> {
        // Spread 10 along x, 1 along y, 0.5 along z.
        let mut points = Vec::new();
        for i in 0..10 {
            let x = i as f32;
            points.push(Point3f::new(x, 0.0, 0.0));
            points.push(Point3f::new(x, 1.0, 0.0));
            points.push(Point3f::new(x, 0.0, 0.5));
        }
        points
    }

    #[test]
    fn test_primary_axis_is_longest() {
        let axes = PrincipalAxes::fit(&elongated_cloud()).unwrap();

        assert!(
            axes.axes[0].x.abs() > 0.9,
            "expected primary axis along x, got {:?}",
            axes.axes[0]
        );
        assert!(axes.eigenvalues[0] >= axes.eigenvalues[1]);
        assert!(axes.eigenvalues[1] >= axes.eigenvalues[2]);
    }

    #[test]
    fn test_axes_are_orthonormal() {
        let axes = PrincipalAxes::fit(&elongated_cloud()).unwrap();

        for axis in &axes.axes {
            assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-5);
        }
        assert_relative_eq!(axes.axes[0].dot(&axes.axes[1]), 0.0, epsilon = 1e-5);
        assert_relative_eq!(axes.axes[0].dot(&axes.axes[2]), 0.0, epsilon = 1e-5);
        assert_relative_eq!(axes.axes[1].dot(&axes.axes[2]), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_empty_cloud_fails() {
        assert!(PrincipalAxes::fit(&[]).is_err());
    }

    #[test]
    fn test_alignment_bounds() {
        let axes = PrincipalAxes::fit(&elongated_cloud()).unwrap();

        // Alignment with a principal axis itself is 1, regardless of sign.
        assert_relative_eq!(axes.alignment(&axes.axes[1]), 1.0, epsilon = 1e-5);
        assert_relative_eq!(axes.alignment(&-axes.axes[1]), 1.0, epsilon = 1e-5);

        // Any unit direction aligns with at least one axis of an
        // orthonormal basis by 1/sqrt(3).
        let diagonal = Vector3f::new(1.0, 1.0, 1.0).normalize();
        assert!(axes.alignment(&diagonal) >= 1.0 / 3.0_f32.sqrt() - 1e-5);
    }
}
