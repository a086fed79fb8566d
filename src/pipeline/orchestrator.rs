// src/pipeline/orchestrator.rs

//! Sequences the generation and build steps, fail-fast.

use tracing::info;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::ProcessRunner;
use crate::pipeline::{BuildTestStep, GenerationStep};

/// Runs [`GenerationStep`] then [`BuildTestStep`] against a single
/// [`ProcessRunner`].
///
/// If generation fails, the build command is never constructed or
/// executed. There are no retries and no alternate paths; the first
/// failure is the pipeline's result.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    generation: GenerationStep,
    build: BuildTestStep,
}

impl Orchestrator {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            generation: GenerationStep::from_config(&cfg.generator),
            build: BuildTestStep::from_config(&cfg.build),
        }
    }

    pub fn generation(&self) -> &GenerationStep {
        &self.generation
    }

    pub fn build(&self) -> &BuildTestStep {
        &self.build
    }

    /// Run the whole pipeline. Each step blocks until its child process has
    /// fully terminated before the next one starts.
    pub fn run(&self, runner: &mut dyn ProcessRunner) -> Result<()> {
        info!("gencheck pipeline started");

        self.generation.run(runner)?;
        self.build.run(runner)?;

        info!("gencheck pipeline succeeded");
        Ok(())
    }
}
