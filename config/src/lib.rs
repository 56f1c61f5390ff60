//! # Config Crate
//!
//! Centralized configuration constants for the solidsh mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_GRID_DIM, BASE_PLATE_DEPTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Grid dimensions are validated against MIN_GRID_DIM
//! let width = 4;
//! assert!(width >= MIN_GRID_DIM);
//!
//! // The base plate of a terrain solid sits below the surface
//! assert!(BASE_PLATE_DEPTH < 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
