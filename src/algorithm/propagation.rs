//! Applying the rule set to a single tile or to a whole block
//!
//! Block propagation reads every neighbor histogram from the grid as it was
//! before the call and commits all recolorings together afterwards, so the
//! outcome does not depend on traversal order.

use crate::algorithm::component::{ColorFilter, component};
use crate::algorithm::rules::{ColorHistogram, RuleSet};
use crate::spatial::{Grid, Position};

/// A pending recoloring decided against a fixed grid state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing {
    /// Position to recolor
    pub position: Position,
    /// Index of the matched rule at decision time
    pub rule_index: usize,
    /// Color the position receives
    pub color: String,
}

/// Decide which rule, if any, fires at `pos` without mutating anything
pub fn plan_at(grid: &Grid, rules: &RuleSet, pos: Position) -> Option<Firing> {
    let histogram = ColorHistogram::around(grid, pos);
    let Some(rule_index) = rules.evaluate(&histogram) else {
        tracing::trace!(
            x = pos.x,
            y = pos.y,
            lit_neighbors = histogram.total(),
            "no rule matched"
        );
        return None;
    };
    let rule = rules.get(rule_index)?;

    Some(Firing {
        position: pos,
        rule_index,
        color: rule.result().to_owned(),
    })
}

/// Apply planned firings: recolor each position and count each rule use
///
/// Unlit positions are lit with intensity 1; lit ones keep their intensity.
pub fn commit(grid: &mut Grid, rules: &mut RuleSet, firings: Vec<Firing>) -> usize {
    let applied = firings.len();
    for firing in firings {
        let was_lit = grid.recolor(firing.position, firing.color);
        rules.record_usage(firing.rule_index);
        tracing::debug!(
            x = firing.position.x,
            y = firing.position.y,
            rule = firing.rule_index,
            was_lit,
            "rule fired"
        );
    }
    applied
}

/// Recolor `pos` with the first rule matching its neighbors
///
/// Returns the index of the rule that fired, or `None` when no rule matched.
pub fn propagate_at(grid: &mut Grid, rules: &mut RuleSet, pos: Position) -> Option<usize> {
    let firing = plan_at(grid, rules, pos)?;
    let rule_index = firing.rule_index;
    commit(grid, rules, vec![firing]);
    Some(rule_index)
}

/// Propagate over every tile of the block containing `pos`
///
/// All histograms come from the pre-call grid state. Returns the number of
/// tiles that received a color; 0 when `pos` is unlit or nothing matched.
pub fn propagate_component(grid: &mut Grid, rules: &mut RuleSet, pos: Position) -> usize {
    let block = component(grid, pos, ColorFilter::Any);
    if block.is_empty() {
        return 0;
    }

    let firings: Vec<Firing> = block
        .iter()
        .filter_map(|&member| plan_at(grid, rules, member))
        .collect();

    tracing::trace!(
        block = block.len(),
        firings = firings.len(),
        "block propagation planned"
    );
    commit(grid, rules, firings)
}
