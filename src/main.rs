//! CLI entry point for the tile plane interpreter

use clap::Parser;
use tileplane::io::cli::{Cli, ScriptRunner, init_logging};

fn main() -> tileplane::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());
    let runner = ScriptRunner::new(cli);
    runner.process().map(|_summary| ())
}
