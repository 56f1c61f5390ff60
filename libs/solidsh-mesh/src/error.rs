//! # Mesh Errors
//!
//! Error types for mesh synthesis operations.

use thiserror::Error;

/// Errors that can occur during mesh synthesis.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed height grid (ragged rows, undersized, or unparsable)
    #[error("Malformed grid: {message}")]
    MalformedGrid { message: String },

    /// Grid exceeds the cell limit
    #[error("Grid too large: {cells} cells (max: {max})")]
    GridTooLarge { cells: usize, max: usize },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates a malformed grid error.
    pub fn malformed_grid(message: impl Into<String>) -> Self {
        Self::MalformedGrid {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
