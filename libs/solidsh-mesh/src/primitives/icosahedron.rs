//! # Icosahedron Primitive
//!
//! Emits the canonical twelve-vertex regular icosahedron. A minimal
//! end-to-end exercise of the mesh pipeline: fixed vertices, fixed
//! faces, always watertight.

use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a regular icosahedron mesh.
///
/// The 12 vertices are the cyclic permutations of (0, ±1/φ, ±1) with
/// φ the golden ratio, giving an edge length of 2/φ. They are **not**
/// projected onto the unit sphere; callers wanting an icosphere seed
/// must rescale the vertices themselves.
///
/// Deterministic: every call emits the same vertices and faces in the
/// same order.
///
/// # Returns
///
/// A mesh with 12 vertices and 20 triangles, wound outward.
///
/// # Example
///
/// ```rust
/// use solidsh_mesh::primitives::create_icosahedron;
///
/// let mesh = create_icosahedron();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
pub fn create_icosahedron() -> Mesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0; // golden ratio
    let a = 1.0;
    let b = 1.0 / phi;

    let mut mesh = Mesh::with_capacity(12, 20);

    let v0 = mesh.add_vertex(DVec3::new(0.0, b, -a));
    let v1 = mesh.add_vertex(DVec3::new(b, a, 0.0));
    let v2 = mesh.add_vertex(DVec3::new(-b, a, 0.0));
    let v3 = mesh.add_vertex(DVec3::new(0.0, b, a));
    let v4 = mesh.add_vertex(DVec3::new(0.0, -b, a));
    let v5 = mesh.add_vertex(DVec3::new(-a, 0.0, b));
    let v6 = mesh.add_vertex(DVec3::new(0.0, -b, -a));
    let v7 = mesh.add_vertex(DVec3::new(a, 0.0, -b));
    let v8 = mesh.add_vertex(DVec3::new(a, 0.0, b));
    let v9 = mesh.add_vertex(DVec3::new(-a, 0.0, -b));
    let v10 = mesh.add_vertex(DVec3::new(b, -a, 0.0));
    let v11 = mesh.add_vertex(DVec3::new(-b, -a, 0.0));

    mesh.add_triangle(v2, v1, v0);
    mesh.add_triangle(v1, v2, v3);
    mesh.add_triangle(v5, v4, v3);
    mesh.add_triangle(v4, v8, v3);
    mesh.add_triangle(v7, v6, v0);
    mesh.add_triangle(v6, v9, v0);
    mesh.add_triangle(v11, v10, v4);
    mesh.add_triangle(v10, v11, v6);
    mesh.add_triangle(v9, v5, v2);
    mesh.add_triangle(v5, v9, v11);
    mesh.add_triangle(v8, v7, v1);
    mesh.add_triangle(v7, v8, v10);
    mesh.add_triangle(v2, v5, v3);
    mesh.add_triangle(v8, v1, v3);
    mesh.add_triangle(v9, v2, v0);
    mesh.add_triangle(v1, v7, v0);
    mesh.add_triangle(v11, v9, v6);
    mesh.add_triangle(v7, v10, v6);
    mesh.add_triangle(v5, v11, v4);
    mesh.add_triangle(v10, v8, v4);

    mesh
}
