//! Executes parsed commands against a plane and formats their results
//!
//! Output formats:
//! - tile: `color intensity`, nothing when unlit
//! - rules: `(`, one `result: k1 c1 k2 c2` line per rule, `)`
//! - trace: `[`, one `x y color intensity` line per step, `]`, nothing on failure
//! - block sums and path lengths: a bare integer, `-1` for a missing path

use std::io::{BufRead, Write};

use crate::algorithm::paths::TraceStep;
use crate::algorithm::plane::Plane;
use crate::algorithm::rules::Rule;
use crate::io::command::Command;
use crate::io::error::{Result, WithContext};
use crate::io::progress::ScriptProgress;

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// A quit command was executed
    Quit,
}

/// How malformed lines are handled while running a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Log a warning and skip the line
    #[default]
    Skip,
    /// Stop with the error
    Strict,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, including blank and comment lines
    pub lines: usize,
    /// Commands executed against the plane
    pub executed: usize,
    /// Malformed lines skipped
    pub skipped: usize,
    /// Whether the run ended with a quit command
    pub quit: bool,
}

/// Interpreter session writing results to `out`
pub struct Session<W: Write> {
    plane: Plane,
    out: W,
    policy: InputPolicy,
}

impl<W: Write> Session<W> {
    /// Create a session over an empty plane
    pub fn new(out: W) -> Self {
        Self {
            plane: Plane::new(),
            out,
            policy: InputPolicy::default(),
        }
    }

    /// Set how malformed lines are handled
    #[must_use]
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current plane state
    pub const fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Consume the session and return its writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run one command and write its result
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Color {
                position,
                color,
                intensity,
            } => self.plane.set_tile(position, color, intensity),
            Command::Erase { position } => self.plane.erase_tile(position),
            Command::Query { position } => {
                if let Some(tile) = self.plane.tile(position) {
                    writeln!(self.out, "{} {}", tile.color, tile.intensity)?;
                }
            }
            Command::AddRule { result, conditions } => {
                self.plane.add_rule(conditions, result);
            }
            Command::PrintRules => {
                writeln!(self.out, "(")?;
                for rule in self.plane.rules() {
                    writeln!(self.out, "{}", format_rule(rule))?;
                }
                writeln!(self.out, ")")?;
            }
            Command::Block {
                position,
                same_color_only,
            } => {
                let sum = self.plane.component_sum(position, same_color_only);
                writeln!(self.out, "{sum}")?;
            }
            Command::Propagate { position } => {
                self.plane.propagate_at(position);
            }
            Command::PropagateBlock { position } => {
                self.plane.propagate_component(position);
            }
            Command::Reorder => self.plane.reorder_rules(),
            Command::Trace { start, moves } => {
                if let Some(steps) = self.plane.trace_path(start, &moves) {
                    write_trace(&mut self.out, &steps)?;
                }
            }
            Command::Length { from, to } => {
                let length = self.plane.shortest_path_len(from, to);
                writeln!(self.out, "{length}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and run one line
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed or writing output fails
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    /// Run every line of `input` until it ends or a quit command is executed
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or on the
    /// first malformed line under [`InputPolicy::Strict`]
    pub fn run<R: BufRead>(&mut self, input: R, progress: &ScriptProgress) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line_result) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = line_result.at_line(line_number)?;
            summary.lines = line_number;
            progress.advance();

            let command = match Command::parse(&line).at_line(line_number) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(error) if self.policy == InputPolicy::Skip && error.is_malformed_input() => {
                    tracing::warn!("skipping malformed input: {error}");
                    summary.skipped += 1;
                    continue;
                }
                Err(error) => return Err(error),
            };

            summary.executed += 1;
            if self.execute(command).at_line(line_number)? == Flow::Quit {
                summary.quit = true;
                break;
            }
        }

        self.out.flush()?;
        progress.finish();
        Ok(summary)
    }
}

/// Render a rule as `result: k1 c1 k2 c2`
pub fn format_rule(rule: &Rule) -> String {
    let mut text = format!("{}:", rule.result());
    for (color, minimum) in rule.conditions() {
        text.push_str(&format!(" {minimum} {color}"));
    }
    text
}

fn write_trace<W: Write>(out: &mut W, steps: &[TraceStep<'_>]) -> std::io::Result<()> {
    writeln!(out, "[")?;
    for step in steps {
        writeln!(
            out,
            "{} {} {} {}",
            step.position.x, step.position.y, step.tile.color, step.tile.intensity
        )?;
    }
    writeln!(out, "]")
}
