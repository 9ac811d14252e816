//! The plane: one grid and one rule set behind the interpreter's operations
//!
//! Every operation runs to completion synchronously. Queries against unlit
//! positions, empty blocks or unreachable goals return values, never errors.

use crate::algorithm::component::{ColorFilter, component, component_sum};
use crate::algorithm::paths::{TraceStep, shortest_path, trace_path};
use crate::algorithm::propagation::{propagate_at, propagate_component};
use crate::algorithm::rules::{Rule, RuleSet};
use crate::spatial::{Direction, Grid, Position, Tile};
use std::collections::HashSet;

/// Grid plus rule set mutated by a single interpreter session
#[derive(Debug, Clone, Default)]
pub struct Plane {
    grid: Grid,
    rules: RuleSet,
}

impl Plane {
    /// Create an unlit plane with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the tile storage
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Light `pos`; an intensity of 0 switches it off
    pub fn set_tile(&mut self, pos: Position, color: impl Into<String>, intensity: u32) {
        let color = color.into();
        tracing::debug!(x = pos.x, y = pos.y, %color, intensity, "set tile");
        self.grid.set(pos, color, intensity);
    }

    /// Switch `pos` off
    pub fn erase_tile(&mut self, pos: Position) {
        if self.grid.erase(pos).is_some() {
            tracing::debug!(x = pos.x, y = pos.y, "erased tile");
        }
    }

    /// Tile at `pos`, `None` when unlit
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.grid.get(pos)
    }

    /// Append a rule from `(color, minimum count)` conditions
    pub fn add_rule<C, S>(&mut self, conditions: C, result: impl Into<String>) -> usize
    where
        C: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let index = self.rules.add(Rule::new(conditions, result));
        tracing::debug!(index, "rule added");
        index
    }

    /// Rules in current evaluation order
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Positions of the block containing `pos`
    pub fn component(&self, pos: Position, same_color_only: bool) -> HashSet<Position> {
        component(&self.grid, pos, ColorFilter::from_same_color(same_color_only))
    }

    /// Total intensity of the block containing `pos`
    pub fn component_sum(&self, pos: Position, same_color_only: bool) -> u64 {
        component_sum(&self.grid, pos, ColorFilter::from_same_color(same_color_only))
    }

    /// Recolor `pos` with the first matching rule; returns that rule's index
    pub fn propagate_at(&mut self, pos: Position) -> Option<usize> {
        propagate_at(&mut self.grid, &mut self.rules, pos)
    }

    /// Propagate over the block containing `pos`; returns the number of firings
    pub fn propagate_component(&mut self, pos: Position) -> usize {
        propagate_component(&mut self.grid, &mut self.rules, pos)
    }

    /// Stable sort of the rules by ascending usage
    pub fn reorder_rules(&mut self) {
        self.rules.reorder();
        tracing::debug!(rules = self.rules.len(), "rules reordered");
    }

    /// Walk `moves` from `pos` over lit tiles only
    pub fn trace_path(&self, pos: Position, moves: &[Direction]) -> Option<Vec<TraceStep<'_>>> {
        trace_path(&self.grid, pos, moves)
    }

    /// Hop count of a shortest lit path between `from` and `to`
    pub fn shortest_path(&self, from: Position, to: Position) -> Option<usize> {
        shortest_path(&self.grid, from, to)
    }

    /// Hop count of a shortest lit path, or -1 when there is none
    pub fn shortest_path_len(&self, from: Position, to: Position) -> i64 {
        self.shortest_path(from, to)
            .and_then(|hops| i64::try_from(hops).ok())
            .unwrap_or(-1)
    }
}
