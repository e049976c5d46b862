//! Mesh data structures and functionality

use crate::error::{Error, Result};
use crate::point::*;
use crate::traits::Drawable;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices, faces and optional per-face normals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    /// Precomputed per-face unit normals, if the source provided them
    pub normals: Option<Vec<Vector3f>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Set per-face normals; ignored unless one normal per face is given
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.faces.len() {
            self.normals = Some(normals);
        }
    }

    /// Per-face unit normals, using precomputed data when present
    pub fn face_normals(&self) -> Result<Vec<Vector3f>> {
        match &self.normals {
            Some(normals) if normals.len() == self.faces.len() => Ok(normals.clone()),
            _ => self.calculate_face_normals(),
        }
    }

    /// Calculate per-face unit normals from point connectivity
    ///
    /// # Errors
    /// Fails on an out-of-bounds face index or a zero-area face.
    pub fn calculate_face_normals(&self) -> Result<Vec<Vector3f>> {
        self.faces
            .iter()
            .map(|face| {
                let [a, b, c] = *face;
                let (v0, v1, v2) = match (
                    self.vertices.get(a),
                    self.vertices.get(b),
                    self.vertices.get(c),
                ) {
                    (Some(v0), Some(v1), Some(v2)) => (*v0, *v1, *v2),
                    _ => {
                        return Err(Error::InvalidData(format!(
                            "face {:?} references a vertex out of bounds",
                            face
                        )))
                    }
                };

                let normal = (v1 - v0).cross(&(v2 - v0));
                let length = normal.norm();
                if length <= f32::EPSILON {
                    return Err(Error::Algorithm(format!(
                        "face {:?} is degenerate and has no normal",
                        face
                    )));
                }

                Ok(normal / length)
            })
            .collect()
    }

    /// Translate every vertex by `offset`
    pub fn translate(&mut self, offset: Vector3f) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Translate the mesh so its bounding-box center sits at the origin
    ///
    /// Callers are expected to apply this once at load time; the framer
    /// and scorer both take the centered mesh by reference afterwards.
    /// Returns the translation that was applied.
    pub fn center_at_origin(&mut self) -> Vector3f {
        let offset = -self.center().coords;
        self.translate(offset);
        offset
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
