//! Spatial data structures for the tile plane
//!
//! This module contains spatial-related functionality including:
//! - Sparse storage of lit tiles
//! - The fixed 8-neighborhood used by traversals

/// Sparse position to tile storage
pub mod grid;
/// Eight-direction adjacency and move tokens
pub mod neighborhood;

pub use grid::{Grid, Position, Tile};
pub use neighborhood::{Direction, neighbors};
