//! # Height Grid
//!
//! Rectangular grid of scalar elevations, stored as one flat row-major
//! buffer with explicit width and height. Ragged input is rejected at
//! construction time, never carried into generation.

use crate::error::MeshError;
use config::constants::{MAX_GRID_CELLS, MIN_GRID_DIM};
use serde::{Deserialize, Serialize};

/// A row-major rectangular grid of elevation samples.
///
/// Immutable once constructed. Width and height are both at least
/// [`MIN_GRID_DIM`]; every row has exactly `width` samples.
///
/// # Example
///
/// ```rust
/// use solidsh_mesh::HeightGrid;
///
/// let grid = HeightGrid::parse("0 1\n2 3\n").unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(1, 1), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl HeightGrid {
    /// Creates a grid from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedGrid`] when either dimension is
    /// below [`MIN_GRID_DIM`] or the buffer length does not match
    /// `width * height`, and [`MeshError::GridTooLarge`] when the cell
    /// count exceeds [`MAX_GRID_CELLS`].
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Result<Self, MeshError> {
        if width < MIN_GRID_DIM || height < MIN_GRID_DIM {
            return Err(MeshError::malformed_grid(format!(
                "grid must be at least {}x{}: got {}x{}",
                MIN_GRID_DIM, MIN_GRID_DIM, width, height
            )));
        }

        let cells = width * height;
        if cells > MAX_GRID_CELLS {
            return Err(MeshError::GridTooLarge {
                cells,
                max: MAX_GRID_CELLS,
            });
        }

        if data.len() != cells {
            return Err(MeshError::malformed_grid(format!(
                "expected {} samples for a {}x{} grid, got {}",
                cells,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedGrid`] for ragged rows (any row
    /// whose length differs from the first) or undersized grids.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MeshError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MeshError::malformed_grid(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
        }

        let data = rows.into_iter().flatten().collect();
        Self::new(width, height, data)
    }

    /// Parses a grid from whitespace-separated rows of floats, one row
    /// per line. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedGrid`] for unparsable tokens,
    /// ragged rows, or undersized grids.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidsh_mesh::HeightGrid;
    ///
    /// let grid = HeightGrid::parse("0.0 0.5 1.0\n1.0 2.0 1.0\n0.0 0.5 1.0").unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self, MeshError> {
        let mut rows = Vec::new();

        for (line_number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| {
                        MeshError::malformed_grid(format!(
                            "line {}: invalid elevation value {:?}",
                            line_number + 1,
                            token
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, MeshError>>()?;

            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the elevation at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Returns the flat row-major sample buffer.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.data
    }
}
