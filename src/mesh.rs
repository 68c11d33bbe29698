//! Mesh data and loading.
//!
//! A [`Mesh`] bundles what the renderer's setters accept: a vertex list, a
//! flat triangle index list, and optionally one normal per triangle. Meshes
//! come from the built-in [`Mesh::cube`] or from OBJ files via
//! [`Mesh::from_obj`].

use std::path::Path;

use thiserror::Error;

use crate::math::vec3::Vec3;

/// Failed to produce a mesh from a file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The OBJ file could not be read or parsed.
    #[error("failed to load `{path}`: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    /// The file parsed but contained no triangle geometry.
    #[error("`{path}` contains no triangles")]
    Empty { path: String },
}

/// Triangle mesh in model space.
///
/// `indices` holds three entries per triangle, referencing `vertices`.
/// `normals` is optional; when absent the renderer derives one face normal
/// per triangle from the winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<usize>,
    pub normals: Option<Vec<Vec3>>,
}

impl Mesh {
    /// Axis-aligned cube centered on the origin with the given edge length.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];

        // Wound so the derived normal (v1 - v0) x (v2 - v1) points out of
        // the cube on every face.
        let indices = vec![
            // Front face (-z)
            0, 3, 2, 0, 2, 1, //
            // Back face (+z)
            4, 5, 6, 4, 6, 7, //
            // Left face (-x)
            0, 4, 7, 0, 7, 3, //
            // Right face (+x)
            1, 2, 6, 1, 6, 5, //
            // Top face (+y)
            3, 7, 6, 3, 6, 2, //
            // Bottom face (-y)
            0, 1, 5, 0, 5, 4, //
        ];

        Self {
            vertices,
            indices,
            normals: None,
        }
    }

    /// Load a mesh from an OBJ file.
    ///
    /// All objects/groups in the file are merged into a single mesh. Faces
    /// are triangulated during the load, and any normals in the file are
    /// ignored in favor of derivation from winding order.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| LoadError::Obj {
            path: path.display().to_string(),
            source,
        })?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for model in &models {
            let base = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            indices.extend(model.mesh.indices.iter().map(|&i| base + i as usize));
        }

        if indices.is_empty() {
            return Err(LoadError::Empty {
                path: path.display().to_string(),
            });
        }

        log::info!(
            "loaded `{}`: {} vertices, {} triangles",
            path.display(),
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            vertices,
            indices,
            normals: None,
        })
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_cube_has_expected_shape() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.indices.len(), 36);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.normals.is_none());
    }

    #[test]
    fn test_cube_indices_are_in_range() {
        let cube = Mesh::cube(1.0);
        assert!(cube.indices.iter().all(|&i| i < cube.vertices.len()));
    }

    #[test]
    fn test_cube_vertices_span_the_edge_length() {
        let cube = Mesh::cube(3.0);
        for v in &cube.vertices {
            assert_eq!(v.x.abs(), 1.5);
            assert_eq!(v.y.abs(), 1.5);
            assert_eq!(v.z.abs(), 1.5);
        }
    }

    #[test]
    fn test_cube_winding_produces_outward_normals() {
        let cube = Mesh::cube(2.0);
        for corner in cube.indices.chunks_exact(3) {
            let v0 = cube.vertices[corner[0]];
            let v1 = cube.vertices[corner[1]];
            let v2 = cube.vertices[corner[2]];
            let normal = (v1 - v0).cross(v2 - v1);
            let centroid = (v0 + v1 + v2) * (1.0 / 3.0);
            // An outward normal points the same way as the face centroid
            assert!(
                normal.dot(centroid) > 0.0,
                "inward-facing triangle {corner:?}"
            );
        }
    }

    #[test]
    fn test_from_obj_merges_models() {
        let path =
            std::env::temp_dir().join(format!("termesh_test_quad_{}.obj", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "o quad").unwrap();
        writeln!(file, "v 0.0 0.0 0.0").unwrap();
        writeln!(file, "v 1.0 0.0 0.0").unwrap();
        writeln!(file, "v 1.0 1.0 0.0").unwrap();
        writeln!(file, "v 0.0 1.0 0.0").unwrap();
        writeln!(file, "f 1 2 3 4").unwrap();
        drop(file);

        let mesh = Mesh::from_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        // The quad triangulates into two triangles
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices.len(), 4);
        assert!(mesh.indices.iter().all(|&i| i < mesh.vertices.len()));
    }

    #[test]
    fn test_from_obj_missing_file_fails() {
        let result = Mesh::from_obj("/nonexistent/termesh.obj");
        assert!(matches!(result, Err(LoadError::Obj { .. })));
    }
}
