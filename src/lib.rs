// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::exec::SystemRunner;
use crate::pipeline::Orchestrator;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the generation → build/test pipeline
/// - the real process runner
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let orchestrator = Orchestrator::from_config(&cfg);

    if args.dry_run {
        print_dry_run(&orchestrator);
        return Ok(());
    }

    let mut runner = SystemRunner::with_timeout(cfg.runner.timeout);
    orchestrator.run(&mut runner)?;

    Ok(())
}

/// Simple dry-run output: print the two planned commands in order.
fn print_dry_run(orchestrator: &Orchestrator) {
    println!("gencheck dry-run");
    println!("  generate: {}", orchestrator.generation().command());
    println!("  build:    {}", orchestrator.build().command());

    debug!("dry-run complete (no execution)");
}
