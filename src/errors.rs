// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! A nonzero exit from a child process is reported through the step-specific
//! variants (`GenerationFailure`, `BuildOrTestFailure`) and always carries
//! the exit code and captured output, so a failure can be diagnosed without
//! re-running the pipeline. `LaunchError` is deliberately distinct: it means
//! the executable never started at all.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GencheckError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The executable could not be started (missing binary, permission
    /// denied). Distinct from a nonzero exit code.
    #[error("failed to launch '{program}': {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator ran but exited nonzero. The build step is never
    /// attempted after this.
    #[error("generator exited with code {exit_code}")]
    GenerationFailure { exit_code: i32, stderr: String },

    /// The build tool ran but exited nonzero. Compile failures and test
    /// failures surface identically; the build tool owns that distinction.
    #[error("build/test target exited with code {exit_code}")]
    BuildOrTestFailure {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// The child process exceeded the configured per-step timeout and was
    /// killed.
    #[error("'{program}' did not finish within {timeout_secs}s")]
    Timeout { program: String, timeout_secs: u64 },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GencheckError>;
