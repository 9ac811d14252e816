//! Deterministic interpreter over a sparse, unbounded plane of colored tiles
//!
//! The plane answers structural queries (block intensity sums, path traces,
//! shortest paths) and runs a first-match rule engine that recolors tiles from
//! the color histogram of their eight neighbors.

#![forbid(unsafe_code)]

/// Block search, rule engine, propagation and path queries
pub mod algorithm;
/// Command parsing, script execution and error handling
pub mod io;
/// Sparse grid storage and neighborhood
pub mod spatial;

pub use algorithm::plane::Plane;
pub use io::error::{InterpreterError, Result};
