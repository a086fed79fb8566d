// src/config/mod.rs

//! Configuration loading and validation for gencheck.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like distinct output paths (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{
    BuildConfig, ConfigFile, GeneratorConfig, RawBuildSection, RawConfigFile,
    RawGeneratorSection, RawRunnerSection, RunnerConfig,
};
pub use validate::validate_config;
