/// Connected block discovery and intensity sums
pub mod component;
/// Graph queries: path tracing and shortest paths
pub mod paths;
/// Interpreter state combining the grid and the rule set
pub mod plane;
/// Single-tile and whole-block rule propagation
pub mod propagation;
/// Rule records, ordered rule sets and neighbor histograms
pub mod rules;
