//! # Solidsh Mesh
//!
//! Procedural watertight mesh synthesis for the solidsh modeling
//! pipeline. Builds index-consistent, outward-oriented triangle solids
//! that the downstream boundary-representation engine accepts without
//! repair.
//!
//! ## Architecture
//!
//! ```text
//! height grid text → HeightGrid → terrain solid (surface + base + skirt)
//!                                      ↓
//!                          Mesh (vertices + triangles)
//!                                      ↓
//!                 vertices_f32 / indices_u32 → engine constructor
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use solidsh_mesh::{parse_and_build, primitives::create_icosahedron};
//!
//! let solid = parse_and_build("0 1 0\n1 2 1\n0 1 0").unwrap();
//! assert!(solid.is_watertight());
//!
//! let ico = create_icosahedron();
//! assert_eq!(ico.triangle_count(), 20);
//! ```

pub mod error;
pub mod grid;
pub mod mesh;
pub mod primitives;
pub mod terrain;

pub use error::MeshError;
pub use grid::HeightGrid;
pub use mesh::Mesh;
pub use primitives::create_icosahedron;
pub use terrain::create_terrain_solid;

/// Parses height grid text and builds the watertight terrain solid.
///
/// This is the main entry point for the synthesis pipeline: one call
/// takes the whitespace-separated grid rows and returns either the
/// complete sealed solid or an error, never partial geometry.
///
/// # Arguments
///
/// * `text` - Whitespace-separated elevation rows, one row per line
///
/// # Errors
///
/// Returns [`MeshError::MalformedGrid`] for ragged, undersized, or
/// unparsable input; the grid is rejected before any vertex is emitted.
///
/// # Example
///
/// ```rust
/// use solidsh_mesh::parse_and_build;
///
/// let mesh = parse_and_build("0 0 0\n0 5 0\n0 0 0").unwrap();
/// assert_eq!(mesh.vertex_count(), 23);
/// ```
pub fn parse_and_build(text: &str) -> Result<Mesh, MeshError> {
    let grid = HeightGrid::parse(text)?;
    Ok(create_terrain_solid(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build_flat() {
        let mesh = parse_and_build("0 0\n0 0").unwrap();
        // 5 surface + 5 base vertices; 4 surface + 4 base + 8 skirt triangles
        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_parse_and_build_peak() {
        let mesh = parse_and_build("0 0 0\n0 9 0\n0 0 0").unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(max.z, 9.0);
        assert_eq!(min.z, config::constants::BASE_PLATE_DEPTH);
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_parse_and_build_rejects_bad_input() {
        assert!(parse_and_build("").is_err());
        assert!(parse_and_build("1 2 3").is_err());
        assert!(parse_and_build("1 2\n3").is_err());
        assert!(parse_and_build("1 2\nx y").is_err());
    }

    #[test]
    fn test_engine_handoff_buffers() {
        let mesh = parse_and_build("0 1\n2 3").unwrap();
        let vertices = mesh.vertices_f32();
        let indices = mesh.indices_u32();
        assert_eq!(vertices.len(), mesh.vertex_count() * 3);
        assert_eq!(indices.len(), mesh.triangle_count() * 3);
        let max_index = *indices.iter().max().unwrap() as usize;
        assert!(max_index < mesh.vertex_count());
    }

    #[test]
    fn test_solids_merge_for_one_handoff() {
        let mut scene = create_icosahedron();
        let mut terrain = parse_and_build("0 0\n0 0").unwrap();
        terrain.translate(glam::DVec3::new(10.0, 0.0, 0.0));
        scene.merge(&terrain);
        assert_eq!(scene.vertex_count(), 12 + 10);
        assert_eq!(scene.triangle_count(), 20 + 16);
        assert!(scene.is_watertight());
    }
}
