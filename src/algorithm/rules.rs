//! Ordered first-match recoloring rules with usage tracking
//!
//! A rule fires when the neighbor color histogram meets every one of its
//! minimum counts. Rules are evaluated in list order and the first satisfied
//! rule wins; specificity and recency play no part.

use std::collections::HashMap;

use crate::spatial::{Grid, Position, neighbors};

/// Count of each color among the lit neighbors of a position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: HashMap<String, u32>,
}

impl ColorHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram of the up-to-8 lit neighbors of `pos`
    ///
    /// The tile at `pos` itself is not counted.
    pub fn around(grid: &Grid, pos: Position) -> Self {
        let mut histogram = Self::new();
        for tile in neighbors(pos).filter_map(|neighbor| grid.get(neighbor)) {
            histogram.record(&tile.color);
        }
        histogram
    }

    /// Count one more occurrence of `color`
    pub fn record(&mut self, color: &str) {
        if let Some(count) = self.counts.get_mut(color) {
            *count += 1;
        } else {
            self.counts.insert(color.to_owned(), 1);
        }
    }

    /// Occurrences of `color`, 0 when absent
    pub fn count(&self, color: &str) -> u32 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Total number of counted tiles
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for color in iter {
            histogram.record(color.as_ref());
        }
        histogram
    }
}

/// A conjunctive neighbor condition, its result color and how often it fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    conditions: Vec<(String, u32)>,
    result: String,
    usage: u64,
}

impl Rule {
    /// Build a rule from `(color, minimum count)` pairs
    ///
    /// A color listed twice keeps its first position and its last count.
    pub fn new<C, S>(conditions: C, result: impl Into<String>) -> Self
    where
        C: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut ordered: Vec<(String, u32)> = Vec::new();
        for (color, minimum) in conditions {
            let color = color.into();
            if let Some(existing) = ordered.iter_mut().find(|(known, _)| *known == color) {
                existing.1 = minimum;
            } else {
                ordered.push((color, minimum));
            }
        }

        Self {
            conditions: ordered,
            result: result.into(),
            usage: 0,
        }
    }

    /// Conditions in the order they were written
    pub fn conditions(&self) -> &[(String, u32)] {
        &self.conditions
    }

    /// Color applied when the rule fires
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Number of successful propagations attributed to this rule
    pub const fn usage(&self) -> u64 {
        self.usage
    }

    /// Whether every minimum count is met; an empty rule always matches
    pub fn matches(&self, histogram: &ColorHistogram) -> bool {
        self.conditions
            .iter()
            .all(|(color, minimum)| histogram.count(color) >= *minimum)
    }
}

/// Rules in evaluation order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with zero usage and return its current index
    pub fn add(&mut self, rule: Rule) -> usize {
        self.rules.push(rule);
        self.rules.len() - 1
    }

    /// Index of the first rule satisfied by `histogram`
    pub fn evaluate(&self, histogram: &ColorHistogram) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(histogram))
    }

    /// Rule at `index` in current order
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Count one firing of the rule at `index`
    pub fn record_usage(&mut self, index: usize) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.usage += 1;
        }
    }

    /// Stable sort by ascending usage; equal usages keep their relative order
    pub fn reorder(&mut self) {
        // `sort_by_key` is a stable merge sort
        self.rules.sort_by_key(Rule::usage);
    }

    /// Rules in current evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been added
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
