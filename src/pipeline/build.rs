// src/pipeline/build.rs

//! Build-and-test invocation step.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::BuildConfig;
use crate::errors::{GencheckError, Result};
use crate::exec::{CommandSpec, ProcessRunner};

/// Runs the build system against the target that compiles all sources
/// (generated ones included) and executes the test suite.
///
/// A compile failure and a test-assertion failure surface identically here;
/// the build tool's exit-code contract does not separate them.
#[derive(Debug, Clone)]
pub struct BuildTestStep {
    tool: PathBuf,
    build_dir: PathBuf,
    target: String,
}

impl BuildTestStep {
    pub fn from_config(cfg: &BuildConfig) -> Self {
        Self {
            tool: cfg.tool.clone(),
            build_dir: cfg.build_dir.clone(),
            target: cfg.target.clone(),
        }
    }

    /// The build invocation: `<tool> --build <build_dir> --target <target>`.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.tool)
            .arg("--build")
            .arg(self.build_dir.as_os_str())
            .arg("--target")
            .arg(&self.target)
    }

    /// Run the build target and interpret its exit status.
    ///
    /// Exit 0 means the build succeeded and every test passed. Nonzero exit
    /// becomes [`GencheckError::BuildOrTestFailure`] carrying the exit code
    /// and both captured streams.
    pub fn run(&self, runner: &mut dyn ProcessRunner) -> Result<()> {
        info!(target = %self.target, "building and running tests");

        let outcome = runner.run(&self.command())?;

        if !outcome.success() {
            warn!(exit_code = outcome.exit_code, "build/test target failed");
            return Err(GencheckError::BuildOrTestFailure {
                exit_code: outcome.exit_code,
                stdout: outcome.stdout,
                stderr: outcome.stderr,
            });
        }

        info!(target = %self.target, "all tests passed");
        Ok(())
    }
}
