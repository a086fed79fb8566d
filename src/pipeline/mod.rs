// src/pipeline/mod.rs

//! The two-step generate-then-build pipeline.
//!
//! - [`generate`] invokes the protocol generator against a descriptor and
//!   two output targets.
//! - [`build`] invokes the build system against the target that compiles
//!   everything (generated sources included) and runs the test suite.
//! - [`orchestrator`] sequences the two, aborting on the first failure.

pub mod build;
pub mod generate;
pub mod orchestrator;

pub use build::BuildTestStep;
pub use generate::GenerationStep;
pub use orchestrator::Orchestrator;
