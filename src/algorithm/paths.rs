//! Path queries over lit tiles: scripted traces and shortest hop counts

use std::collections::{HashSet, VecDeque};

use crate::spatial::{Direction, Grid, Position, Tile, neighbors};

/// One visited position of a successful trace with its tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep<'a> {
    /// Visited position
    pub position: Position,
    /// Tile lit at that position
    pub tile: &'a Tile,
}

/// Follow `moves` from `start`, requiring every visited position to be lit
///
/// Returns all visited steps, `start` first, or `None` as soon as the start or
/// any step is unlit. A step past the coordinate range counts as unlit. Partial
/// walks are never returned.
pub fn trace_path<'a>(
    grid: &'a Grid,
    start: Position,
    moves: &[Direction],
) -> Option<Vec<TraceStep<'a>>> {
    let mut steps = Vec::with_capacity(moves.len() + 1);
    steps.push(TraceStep {
        position: start,
        tile: grid.get(start)?,
    });

    let mut current = start;
    for &direction in moves {
        let next = direction.step(current);
        let Some((position, tile)) = next.and_then(|pos| grid.get(pos).map(|tile| (pos, tile)))
        else {
            tracing::trace!(
                x = current.x,
                y = current.y,
                %direction,
                "trace stepped off lit tiles"
            );
            return None;
        };
        current = position;
        steps.push(TraceStep { position, tile });
    }

    Some(steps)
}

/// Minimum number of 8-adjacent hops from `from` to `to` through lit tiles
///
/// Breadth-first search is exact here because every edge has weight 1. Returns
/// `None` when either end is unlit or no lit path connects them; the distance
/// from a lit position to itself is 0.
pub fn shortest_path(grid: &Grid, from: Position, to: Position) -> Option<usize> {
    if !grid.is_lit(from) || !grid.is_lit(to) {
        return None;
    }

    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([(from, 0_usize)]);

    while let Some((current, distance)) = queue.pop_front() {
        if current == to {
            return Some(distance);
        }

        for neighbor in neighbors(current) {
            if grid.is_lit(neighbor) && visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    tracing::trace!(explored = visited.len(), "no lit path between endpoints");
    None
}
