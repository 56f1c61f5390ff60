//! # Mesh Data Structure
//!
//! Core indexed mesh representation: vertex positions plus
//! triangles-by-index, append-only.

use crate::error::MeshError;
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the engine hand-off boundary.
///
/// The buffer is append-only: vertices and triangles are added, never
/// removed or rewritten. `add_triangle` asserts that every referenced
/// vertex already exists, so a triangle can never point forward into
/// vertices that have not been appended yet.
///
/// # Example
///
/// ```rust
/// use solidsh_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices and returns the triangle index.
    ///
    /// # Panics
    ///
    /// Panics if any index refers to a vertex that has not been appended
    /// yet. A forward reference is a generator bug, not bad input, so it
    /// is fatal rather than a recoverable error.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) -> u32 {
        let vertex_count = self.vertices.len() as u32;
        assert!(
            v0 < vertex_count && v1 < vertex_count && v2 < vertex_count,
            "triangle ({}, {}, {}) references a vertex beyond the {} appended so far",
            v0,
            v1,
            v2,
            vertex_count
        );
        let index = self.triangles.len() as u32;
        self.triangles.push([v0, v1, v2]);
        index
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &glam::DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    ///
    /// The other mesh's triangle indices are shifted by this mesh's
    /// vertex count so they keep pointing at their own vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for degenerate triangles
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < DEGENERATE_AREA_EPSILON {
                return false;
            }
        }

        true
    }

    /// Validation as a `Result`, for use at the engine hand-off boundary.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTopology`] when [`Self::validate`]
    /// fails.
    pub fn ensure_valid(&self) -> Result<(), MeshError> {
        if self.validate() {
            Ok(())
        } else {
            Err(MeshError::invalid_topology(format!(
                "mesh with {} vertices / {} triangles has out-of-range or degenerate triangles",
                self.vertex_count(),
                self.triangle_count()
            )))
        }
    }

    /// Returns true if the mesh encloses a volume with no boundary edges.
    ///
    /// Counts directed edges: in a closed, consistently wound mesh every
    /// directed edge appears exactly once and its reverse appears in the
    /// neighboring triangle.
    pub fn is_watertight(&self) -> bool {
        use std::collections::HashMap;

        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in &self.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *directed.entry((a, b)).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Exports vertices as f32 array for the external engine constructor.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for the external engine
    /// constructor.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.push(tri[0]);
            result.push(tri[1]);
            result.push(tri[2]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle_returns_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        assert_eq!(mesh.add_triangle(0, 1, 2), 0);
        assert_eq!(mesh.add_triangle(1, 2, 3), 1);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "references a vertex beyond")]
    fn test_mesh_add_triangle_forward_reference_panics() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_translate() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.translate(DVec3::new(10.0, 0.0, -1.0));
        assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, -1.0));
        assert_eq!(mesh.vertex(1), DVec3::new(11.0, 0.0, -1.0));
    }

    #[test]
    fn test_mesh_transform_scale() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        let matrix = glam::DMat4::from_scale(DVec3::splat(2.0));
        mesh.transform(&matrix);
        assert_eq!(mesh.vertex(0), DVec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate());
        assert!(mesh.ensure_valid().is_ok());
    }

    #[test]
    fn test_mesh_ensure_valid_reports_topology_error() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0)); // collinear
        mesh.add_triangle(0, 1, 2);
        assert!(matches!(
            mesh.ensure_valid(),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_degenerate_repeated_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        // In bounds, so append succeeds; validation must still reject it
        mesh.add_triangle(0, 1, 1);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0)); // collinear
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        let f32_verts = mesh.vertices_f32();
        assert_eq!(f32_verts, vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_mesh_indices_u32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertex(DVec3::ZERO);
        mesh1.add_vertex(DVec3::X);
        mesh1.add_vertex(DVec3::Y);
        mesh1.add_triangle(0, 1, 2);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(DVec3::Z);
        mesh2.add_vertex(DVec3::new(1.0, 0.0, 1.0));
        mesh2.add_vertex(DVec3::new(0.0, 1.0, 1.0));
        mesh2.add_triangle(0, 1, 2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]); // Offset by 3
    }

    #[test]
    fn test_open_mesh_is_not_watertight() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn test_tetrahedron_is_watertight() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::ZERO);
        let b = mesh.add_vertex(DVec3::X);
        let c = mesh.add_vertex(DVec3::Y);
        let d = mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, b, d);
        mesh.add_triangle(b, c, d);
        mesh.add_triangle(c, a, d);
        assert!(mesh.is_watertight());
    }
}
