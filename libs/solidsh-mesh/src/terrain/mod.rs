//! # Terrain Solid Synthesis
//!
//! Converts a height grid into a closed, two-manifold triangle solid:
//! an elevated surface, a flat base plate, and a skirt stitching their
//! rims together. The result goes straight into the boundary
//! representation engine's constructor, so every stage here must keep
//! indices consistent and winding outward.
//!
//! ## Pipeline
//!
//! ```text
//! HeightGrid → surface (quad fans) ─┐
//!            → base plate (center fan) ─┤→ one shared Mesh
//!            → skirt ladder over the two rims ─┘
//! ```
//!
//! Vertex emission order is fixed: surface grid corners (row-major),
//! surface quad centers, base grid corners, base center. Later stages
//! rely on that order for index arithmetic.

use crate::grid::HeightGrid;
use crate::mesh::Mesh;
use config::constants::BASE_PLATE_DEPTH;
use glam::DVec3;


/// Vertex indices assigned to the cells of one W x H grid, row-major.
///
/// Populated during vertex emission, one assignment per cell. Both the
/// surface and the base produce one of these, and the skirt depends on
/// their rims corresponding position-by-position.
struct IndexGrid {
    width: usize,
    height: usize,
    indices: Vec<u32>,
}

impl IndexGrid {
    fn with_capacity(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            indices: Vec::with_capacity(width * height),
        }
    }

    fn push(&mut self, index: u32) {
        self.indices.push(index);
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u32 {
        self.indices[y * self.width + x]
    }
}

/// Extracts the ordered boundary loop of a grid's vertex indices.
///
/// Traced clockwise viewed from above: start at the top-left corner,
/// right along the top row, down the right edge, left along the bottom
/// row, up the left edge. Length is `2(W-1) + 2(H-1)` with no repeated
/// index. The surface and base rims of one grid size correspond
/// position-by-position; the skirt is a twisted self-intersecting wall
/// if that pairing breaks.
fn perimeter_loop(grid: &IndexGrid) -> Vec<u32> {
    let w = grid.width;
    let h = grid.height;
    let mut rim = Vec::with_capacity(2 * (w - 1) + 2 * (h - 1));

    // Top edge, left to right (stops short of the top-right corner)
    for x in 0..w - 1 {
        rim.push(grid.get(x, 0));
    }
    // Right edge, top to bottom (stops short of the bottom-right corner)
    for y in 0..h - 1 {
        rim.push(grid.get(w - 1, y));
    }
    // Bottom edge, right to left (both bottom corners)
    for x in (0..w).rev() {
        rim.push(grid.get(x, h - 1));
    }
    // Left edge, bottom to top (interior cells only)
    for y in (1..h - 1).rev() {
        rim.push(grid.get(0, y));
    }

    rim
}

/// Emits the elevated surface: one vertex per grid cell, one synthetic
/// center vertex per quad, and four triangles fanned around each center.
///
/// The four-triangle fan replaces the usual two diagonal triangles so
/// every quad subdivides symmetrically regardless of its corner
/// heights, with a consistent upward-facing winding.
///
/// Emits `W*H + (W-1)*(H-1)` vertices and `4*(W-1)*(H-1)` triangles.
fn emit_surface(mesh: &mut Mesh, grid: &HeightGrid) -> IndexGrid {
    let w = grid.width();
    let h = grid.height();

    // Grid corner vertices, row-major
    let mut cells = IndexGrid::with_capacity(w, h);
    for y in 0..h {
        for x in 0..w {
            let index = mesh.add_vertex(DVec3::new(x as f64, y as f64, grid.get(x, y)));
            cells.push(index);
        }
    }

    // Quad center vertices; the first one's index anchors the
    // center-offset arithmetic below
    let center_offset = mesh.vertex_count() as u32;
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let z_center =
                (grid.get(x, y) + grid.get(x + 1, y) + grid.get(x, y + 1) + grid.get(x + 1, y + 1))
                    / 4.0;
            mesh.add_vertex(DVec3::new(x as f64 + 0.5, y as f64 + 0.5, z_center));
        }
    }

    // Four triangles per quad, fanned around its center
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let top_left = cells.get(x, y);
            let top_right = cells.get(x + 1, y);
            let bottom_left = cells.get(x, y + 1);
            let bottom_right = cells.get(x + 1, y + 1);
            let quad_center = center_offset + (y * (w - 1) + x) as u32;

            mesh.add_triangle(bottom_left, top_left, quad_center);
            mesh.add_triangle(top_left, top_right, quad_center);
            mesh.add_triangle(top_right, bottom_right, quad_center);
            mesh.add_triangle(bottom_right, bottom_left, quad_center);
        }
    }

    cells
}

/// Emits the flat base plate: one vertex per grid cell at `depth`, a
/// single center vertex, and a fan from the center to the rim.
///
/// The fan winding mirrors the surface fans so the cap's outward
/// normal points down.
///
/// Emits `W*H + 1` vertices and `2(W-1) + 2(H-1)` triangles.
fn emit_base(mesh: &mut Mesh, grid: &HeightGrid, depth: f64) -> IndexGrid {
    let w = grid.width();
    let h = grid.height();

    let mut cells = IndexGrid::with_capacity(w, h);
    for y in 0..h {
        for x in 0..w {
            let index = mesh.add_vertex(DVec3::new(x as f64, y as f64, depth));
            cells.push(index);
        }
    }

    let center = mesh.add_vertex(DVec3::new(w as f64 / 2.0, h as f64 / 2.0, depth));

    let rim = perimeter_loop(&cells);
    for i in 1..rim.len() {
        mesh.add_triangle(center, rim[i], rim[i - 1]);
    }
    mesh.add_triangle(center, rim[0], rim[rim.len() - 1]);

    cells
}

/// Stitches the surface rim to the base rim with a closed triangle
/// ladder: two triangles per consecutive rim position, plus the
/// wrap-around pair.
///
/// Both loops must come from [`perimeter_loop`] over grids of the same
/// dimensions, so `surface_rim[i]` sits directly above `base_rim[i]`.
fn stitch_skirt(mesh: &mut Mesh, surface_rim: &[u32], base_rim: &[u32]) {
    assert_eq!(
        surface_rim.len(),
        base_rim.len(),
        "skirt rims must pair up position-by-position"
    );

    for i in 1..surface_rim.len() {
        mesh.add_triangle(surface_rim[i], base_rim[i - 1], base_rim[i]);
        mesh.add_triangle(surface_rim[i], surface_rim[i - 1], base_rim[i - 1]);
    }

    let last = surface_rim.len() - 1;
    mesh.add_triangle(surface_rim[last], base_rim[last], base_rim[0]);
    mesh.add_triangle(surface_rim[0], surface_rim[last], base_rim[0]);
}

/// Builds a watertight terrain solid from a height grid.
///
/// The surface sits at the grid's elevations, the base plate at
/// [`BASE_PLATE_DEPTH`], and the skirt seals the volume between their
/// rims. The whole solid is built into one buffer in a fixed order, so
/// two calls over the same grid produce identical meshes.
///
/// # Example
///
/// ```rust
/// use solidsh_mesh::{create_terrain_solid, HeightGrid};
///
/// let grid = HeightGrid::parse("0 0 0\n0 2 0\n0 0 0").unwrap();
/// let mesh = create_terrain_solid(&grid);
/// assert!(mesh.is_watertight());
/// ```
pub fn create_terrain_solid(grid: &HeightGrid) -> Mesh {
    let w = grid.width();
    let h = grid.height();
    let quads = (w - 1) * (h - 1);
    let rim_len = 2 * (w - 1) + 2 * (h - 1);

    let mut mesh = Mesh::with_capacity(2 * w * h + quads + 1, 4 * quads + 3 * rim_len);

    let surface = emit_surface(&mut mesh, grid);
    let base = emit_base(&mut mesh, grid, BASE_PLATE_DEPTH);

    let surface_rim = perimeter_loop(&surface);
    let base_rim = perimeter_loop(&base);
    stitch_skirt(&mut mesh, &surface_rim, &base_rim);

    mesh
}
