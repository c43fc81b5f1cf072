//! Labelscan CLI: scan a directory of label files and report token-budget violations.

use anyhow::Result;
use clap::Parser;
use labelscan::engine::arg_parser::Cli;
use labelscan::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
