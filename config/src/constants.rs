//! # Configuration Constants
//!
//! Centralized constants for the mesh synthesis pipeline. Precision
//! tolerances, grid limits, and geometry defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Grid**: Height-grid size bounds
//! - **Geometry**: Default placement values for generated solids

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area accepted by mesh validation.
///
/// Triangles whose area falls below this tolerance are treated as
/// degenerate. Slightly larger than [`EPSILON`] to absorb the numerical
/// noise of cross-product area computation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let area = 0.25_f64; // quarter-cell triangle of a unit-spaced grid
/// assert!(area > DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Minimum width and height of a height grid.
///
/// A grid needs at least one quad cell to produce a surface, which
/// requires two samples along each axis. Anything smaller is rejected
/// at construction time.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_GRID_DIM;
///
/// let width = 3;
/// assert!(width >= MIN_GRID_DIM);
/// ```
pub const MIN_GRID_DIM: usize = 2;

/// Maximum number of cells (width * height) in a height grid.
///
/// Keeps the synthesized solid (roughly two vertices per cell) well
/// inside the `u32` index space of the mesh buffers and bounds memory
/// use for hostile inputs.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GRID_CELLS;
///
/// let cells = 1024 * 1024;
/// assert!(cells <= MAX_GRID_CELLS);
/// ```
pub const MAX_GRID_CELLS: usize = 16_777_216;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Depth of the flat base plate sealing a terrain solid.
///
/// The floor is placed at this fixed z coordinate, below the meaningful
/// elevation range of the surface. Callers wanting a different floor can
/// translate the finished solid.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_PLATE_DEPTH;
///
/// assert!(BASE_PLATE_DEPTH < 0.0);
/// ```
pub const BASE_PLATE_DEPTH: f64 = -1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
