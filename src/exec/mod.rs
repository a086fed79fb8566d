// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external tools the
//! pipeline depends on (the protocol generator and the build system) and
//! reporting their results back to the pipeline steps.
//!
//! - [`command`] defines [`CommandSpec`], the immutable description of one
//!   invocation (program + argument vector + optional working directory).
//! - [`runner`] defines the [`ProcessRunner`] seam together with
//!   [`ExecutionOutcome`] and the production [`SystemRunner`], which tests
//!   can replace with a fake implementation.

pub mod command;
pub mod runner;

pub use command::CommandSpec;
pub use runner::{ExecutionOutcome, ProcessRunner, SystemRunner};
