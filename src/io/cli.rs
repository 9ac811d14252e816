//! Command-line interface for running tile plane scripts

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTERS};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ScriptProgress;
use crate::io::session::{InputPolicy, RunSummary, Session};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tileplane")]
#[command(
    version,
    about = "Run tile plane commands from a script file or standard input"
)]
/// Command-line arguments for the interpreter
pub struct Cli {
    /// Script file to execute; standard input is read when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.script.is_some()
    }

    /// Handling of malformed lines selected by `--strict`
    pub const fn input_policy(&self) -> InputPolicy {
        if self.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Skip
        }
    }

    /// Log filter directive for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_FILTER,
            level => VERBOSE_LOG_FILTERS
                .get(usize::from(level) - 1)
                .or_else(|| VERBOSE_LOG_FILTERS.last())
                .copied()
                .unwrap_or(DEFAULT_LOG_FILTER),
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `filter` when set. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    // A subscriber may already be installed by an embedding program or a test
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Feeds a script file or standard input through one interpreter session
pub struct ScriptRunner {
    cli: Cli,
}

impl ScriptRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected input, writing results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read, output cannot be
    /// written, or a malformed line is met under `--strict`
    pub fn process(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        self.process_into(stdout.lock())
    }

    /// Run the selected input, writing results to `out`
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScriptRunner::process`]
    pub fn process_into<W: Write>(&self, out: W) -> Result<RunSummary> {
        let mut session = Session::new(out).with_policy(self.cli.input_policy());

        let summary = match &self.cli.script {
            Some(path) => {
                let progress = if self.cli.should_show_progress() {
                    ScriptProgress::for_script(path, count_lines(path)?)
                } else {
                    ScriptProgress::hidden()
                };
                let file = File::open(path).map_err(|e| file_system_error(path, "open", e))?;
                tracing::info!(script = %path.display(), "running script");
                session.run(BufReader::new(file), &progress)?
            }
            None => {
                let stdin = std::io::stdin();
                tracing::info!("reading commands from standard input");
                session.run(stdin.lock(), &ScriptProgress::hidden())?
            }
        };

        tracing::info!(
            lines = summary.lines,
            executed = summary.executed,
            skipped = summary.skipped,
            quit = summary.quit,
            "run finished"
        );
        Ok(summary)
    }
}

fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| file_system_error(path, "open", e))?;
    let mut total = 0_u64;
    for line in BufReader::new(file).lines() {
        line.map_err(|e| file_system_error(path, "read", e))?;
        total += 1;
    }
    Ok(total)
}
