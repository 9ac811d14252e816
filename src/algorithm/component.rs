//! Breadth-first discovery of connected blocks of lit tiles
//!
//! Two tiles are connected when they are 8-adjacent and both lit. A homogeneous
//! block additionally requires every member to share the seed tile's color; the
//! comparison is always against the seed, never against the tile being expanded.

use std::collections::{HashSet, VecDeque};

use crate::spatial::{Grid, Position, neighbors};

/// Admission rule for neighbors during a block search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFilter {
    /// Any lit neighbor joins the block
    Any,
    /// Only lit neighbors with the seed tile's color join the block
    MatchSeed,
}

impl ColorFilter {
    /// Filter for a `same_color_only` flag
    pub const fn from_same_color(same_color_only: bool) -> Self {
        if same_color_only {
            Self::MatchSeed
        } else {
            Self::Any
        }
    }
}

/// Collect the block containing `seed`
///
/// Returns the empty set when `seed` is unlit. Work is proportional to the size
/// of the block, not of the grid.
pub fn component(grid: &Grid, seed: Position, filter: ColorFilter) -> HashSet<Position> {
    let mut visited = HashSet::new();
    let Some(seed_tile) = grid.get(seed) else {
        return visited;
    };
    let seed_color = seed_tile.color.as_str();

    let mut queue = VecDeque::from([seed]);
    visited.insert(seed);

    while let Some(current) = queue.pop_front() {
        for neighbor in neighbors(current) {
            let Some(tile) = grid.get(neighbor) else {
                continue;
            };
            if filter == ColorFilter::MatchSeed && tile.color != seed_color {
                continue;
            }
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::trace!(
        x = seed.x,
        y = seed.y,
        ?filter,
        size = visited.len(),
        "block search finished"
    );
    visited
}

/// Sum of intensities over a set of positions, skipping unlit ones
pub fn intensity_sum<'a>(grid: &Grid, positions: impl IntoIterator<Item = &'a Position>) -> u64 {
    positions
        .into_iter()
        .filter_map(|&pos| grid.get(pos))
        .map(|tile| u64::from(tile.intensity))
        .sum()
}

/// Total intensity of the block containing `seed`, 0 when unlit
pub fn component_sum(grid: &Grid, seed: Position, filter: ColorFilter) -> u64 {
    intensity_sum(grid, &component(grid, seed, filter))
}
