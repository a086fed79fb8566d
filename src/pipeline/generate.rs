// src/pipeline/generate.rs

//! Generator invocation step.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::errors::{GencheckError, Result};
use crate::exec::{CommandSpec, ProcessRunner};

/// Runs the protocol generator against a descriptor, targeting two output
/// files (the Side-A and Side-B implementations).
///
/// The step does not check that the descriptor exists or that the outputs
/// were actually written; the generator owns the former and the subsequent
/// build validates the latter transitively.
#[derive(Debug, Clone)]
pub struct GenerationStep {
    bin: PathBuf,
    descriptor: PathBuf,
    side_a: PathBuf,
    side_b: PathBuf,
}

impl GenerationStep {
    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        Self {
            bin: cfg.bin.clone(),
            descriptor: cfg.descriptor.clone(),
            side_a: cfg.side_a.clone(),
            side_b: cfg.side_b.clone(),
        }
    }

    /// The generator invocation: `<bin> -l <descriptor> -a <side_a> -b <side_b>`.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.bin)
            .arg("-l")
            .arg(self.descriptor.as_os_str())
            .arg("-a")
            .arg(self.side_a.as_os_str())
            .arg("-b")
            .arg(self.side_b.as_os_str())
    }

    /// Run the generator and interpret its exit status.
    ///
    /// Exit 0 means both output files are considered populated. Nonzero
    /// exit becomes [`GencheckError::GenerationFailure`] carrying the exit
    /// code and whatever the generator wrote to stderr.
    pub fn run(&self, runner: &mut dyn ProcessRunner) -> Result<()> {
        info!(descriptor = %self.descriptor.display(), "running protocol generator");

        let outcome = runner.run(&self.command())?;

        if !outcome.success() {
            warn!(exit_code = outcome.exit_code, "generator failed");
            return Err(GencheckError::GenerationFailure {
                exit_code: outcome.exit_code,
                stderr: outcome.stderr,
            });
        }

        debug!(
            side_a = %self.side_a.display(),
            side_b = %self.side_b.display(),
            "generated sources written"
        );

        Ok(())
    }
}
