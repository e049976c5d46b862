//! View candidate generation and scoring ("front detection")
//!
//! Candidates combine two hand-picked priority views (top and front),
//! the principal axes of the vertex cloud, and a fixed set of standard
//! orthographic directions. Each candidate is scored by how well it
//! aligns with a principal axis and how much of the surface faces the
//! camera; the best-scoring, mutually distinct directions win.

use crate::pca::PrincipalAxes;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use vantage_core::{Error, Result, TriangleMesh, Vector3f};

/// Tunable weights and thresholds for view scoring
///
/// The defaults are the calibrated values the scoring was tuned with;
/// change them only when behavioral compatibility does not matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewScoringConfig {
    /// Weight of the principal-axis alignment term
    pub pca_weight: f32,
    /// Weight of the surface visibility term
    pub visibility_weight: f32,
    /// Additive bonus for the top and front priority views
    pub priority_bonus: f32,
    /// Visibility substitute when face normals are unavailable or skipped
    pub visibility_fallback: f32,
    /// Face count at which exact visibility scoring is skipped
    pub max_faces_for_visibility: usize,
    /// Dot-product threshold above which two directions count as duplicates
    pub similarity_threshold: f32,
}

impl Default for ViewScoringConfig {
    fn default() -> Self {
        Self {
            pca_weight: 2.0,
            visibility_weight: 3.0,
            priority_bonus: 1.0,
            visibility_fallback: 0.6,
            max_faces_for_visibility: 100_000,
            similarity_threshold: 0.9,
        }
    }
}

/// A ranked view direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredView {
    /// Unit direction from the object toward the camera
    pub direction: Vector3f,
    /// Final ranking score, priority bonus included
    pub score: f32,
    /// Human-readable tag ("top", "pca_0_pos", "diag_1", ...)
    pub name: String,
}

struct ViewCandidate {
    direction: Vector3f,
    name: String,
    priority: bool,
}

/// The fixed candidate set: priority views first, then principal axes,
/// then standard orthographic views. The order matters - ties in the
/// final score are broken by it.
fn candidates(axes: &PrincipalAxes) -> Vec<ViewCandidate> {
    let mut all = vec![
        ViewCandidate {
            direction: Vector3f::new(0.0, 0.0, 1.0),
            name: "top".to_string(),
            priority: true,
        },
        ViewCandidate {
            direction: Vector3f::new(0.0, -1.0, 0.0),
            name: "front".to_string(),
            priority: true,
        },
    ];

    for (i, axis) in axes.axes.iter().enumerate() {
        all.push(ViewCandidate {
            direction: *axis,
            name: format!("pca_{}_pos", i),
            priority: false,
        });
        all.push(ViewCandidate {
            direction: -*axis,
            name: format!("pca_{}_neg", i),
            priority: false,
        });
    }

    let standard = [
        (Vector3f::new(1.0, 0.0, 0.0), "right"),
        (Vector3f::new(-1.0, 0.0, 0.0), "left"),
        (Vector3f::new(0.0, 1.0, 0.0), "back"),
        (Vector3f::new(0.0, 0.0, -1.0), "bottom"),
        (Vector3f::new(1.0, 1.0, 0.0), "diag_1"),
        (Vector3f::new(1.0, 0.0, 1.0), "diag_2"),
    ];
    for (direction, name) in standard {
        all.push(ViewCandidate {
            direction: direction.normalize(),
            name: name.to_string(),
            priority: false,
        });
    }

    all
}

/// Fraction of face normals with a positive component along `direction`
fn facing_fraction(normals: &[Vector3f], direction: &Vector3f) -> f32 {
    let facing = normals
        .par_iter()
        .filter(|normal| normal.dot(direction) > 0.0)
        .count();
    facing as f32 / normals.len() as f32
}

/// Face normals for exact visibility scoring, or `None` when the
/// fallback constant should be used instead
fn visibility_normals(mesh: &TriangleMesh, config: &ViewScoringConfig) -> Option<Vec<Vector3f>> {
    let face_count = mesh.face_count();
    if face_count == 0 {
        return None;
    }
    if face_count >= config.max_faces_for_visibility {
        debug!(
            "large mesh ({} faces), using simplified visibility scoring",
            face_count
        );
        return None;
    }

    match mesh.face_normals() {
        Ok(normals) => Some(normals),
        Err(err) => {
            warn!(
                "face normal computation failed ({}), using fallback visibility",
                err
            );
            None
        }
    }
}

/// Find the `n` most informative viewing directions for a mesh
///
/// Returns at most `n` unit directions with their scores, best first.
/// Directions are pairwise distinct under the similarity threshold; when
/// fewer distinct good views exist, fewer are returned.
///
/// # Arguments
/// * `mesh` - The mesh to analyze, centered or not
/// * `n` - Maximum number of views to return
///
/// # Returns
/// * `Result<Vec<(Vector3f, f32)>>` - Ranked (direction, score) pairs
pub fn find_best_views(mesh: &TriangleMesh, n: usize) -> Result<Vec<(Vector3f, f32)>> {
    let views = find_best_views_with(mesh, n, &ViewScoringConfig::default())?;
    Ok(views.into_iter().map(|v| (v.direction, v.score)).collect())
}

/// Find the best views with explicit configuration, keeping the tags
///
/// Same contract as [`find_best_views`], with the scoring weights and
/// thresholds taken from `config` and the candidate tags preserved in
/// the result.
pub fn find_best_views_with(
    mesh: &TriangleMesh,
    n: usize,
    config: &ViewScoringConfig,
) -> Result<Vec<ScoredView>> {
    if mesh.vertices.is_empty() {
        return Err(Error::InvalidData(
            "cannot select views for a mesh with no points".to_string(),
        ));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let axes = PrincipalAxes::fit(&mesh.vertices)?;
    let normals = visibility_normals(mesh, config);

    let mut scored: Vec<ScoredView> = candidates(&axes)
        .into_iter()
        .map(|candidate| {
            let direction = candidate.direction.normalize();

            let pca_score = axes.alignment(&direction);
            let visibility = match &normals {
                Some(normals) => facing_fraction(normals, &direction),
                None => config.visibility_fallback,
            };

            let base_score = config.pca_weight * pca_score + config.visibility_weight * visibility;
            let score = if candidate.priority {
                let boosted = base_score + config.priority_bonus;
                debug!(
                    "priority view '{}': base={:.2}, final={:.2}",
                    candidate.name, base_score, boosted
                );
                boosted
            } else {
                base_score
            };

            ScoredView {
                direction,
                score,
                name: candidate.name,
            }
        })
        .collect();

    // Stable sort keeps generation order for tied scores.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut selected: Vec<ScoredView> = Vec::new();
    for view in scored {
        // Raw dot product, not absolute value: a direction and its
        // antipode are kept as distinct views; only near-identical
        // directions are dropped.
        let duplicate = selected
            .iter()
            .any(|kept| view.direction.dot(&kept.direction) > config.similarity_threshold);
        if !duplicate {
            debug!("selected view '{}': score={:.2}", view.name, view.score);
            selected.push(view);
        }
        if selected.len() >= n {
            break;
        }
    }

    Ok(selected)
}
