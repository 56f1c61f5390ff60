//! # Primitives
//!
//! Procedurally emitted regular solids.

pub mod icosahedron;

pub use icosahedron::create_icosahedron;
