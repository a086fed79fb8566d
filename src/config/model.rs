// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::config::validate::validate_config;
use crate::errors::GencheckError;

/// Top-level configuration as read from a TOML file.
///
/// This is a direct mapping of the expected layout:
///
/// ```toml
/// [generator]
/// bin = "../LCSF_Generator/build/bin/lcsf_generator_cli"
/// descriptor = "../LCSF_Generator/example/Test.json"
/// side_a = "./src/protocols_a/Test_Main_a.c"
/// side_b = "./src/protocols_b/Test_Main_b.c"
///
/// [build]
/// tool = "cmake"
/// build_dir = "build/"
/// target = "run_tests"
///
/// [runner]
/// timeout_secs = 300
/// ```
///
/// Only `[generator]` is required; `[build]` and `[runner]` have defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Generator invocation from `[generator]`.
    pub generator: RawGeneratorSection,

    /// Build-system invocation from `[build]`.
    #[serde(default)]
    pub build: RawBuildSection,

    /// Runner behaviour from `[runner]`.
    #[serde(default)]
    pub runner: RawRunnerSection,
}

/// `[generator]` section.
///
/// All four paths are required and must be non-empty. They are *not*
/// existence-checked here: a missing binary surfaces as a launch error and
/// a missing descriptor is the generator's own failure to report.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeneratorSection {
    /// Path to the generator executable.
    pub bin: String,

    /// Path to the protocol description file to read.
    pub descriptor: String,

    /// File path the generator writes the Side-A source into.
    pub side_a: String,

    /// File path the generator writes the Side-B source into.
    pub side_b: String,
}

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuildSection {
    /// Build tool executable.
    #[serde(default = "default_build_tool")]
    pub tool: String,

    /// Build tree handed to `--build`.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Logical target that compiles everything and runs the test suite.
    #[serde(default = "default_build_target")]
    pub target: String,
}

fn default_build_tool() -> String {
    "cmake".to_string()
}

fn default_build_dir() -> String {
    "build/".to_string()
}

fn default_build_target() -> String {
    "run_tests".to_string()
}

impl Default for RawBuildSection {
    fn default() -> Self {
        Self {
            tool: default_build_tool(),
            build_dir: default_build_dir(),
            target: default_build_target(),
        }
    }
}

/// `[runner]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawRunnerSection {
    /// Per-step timeout in seconds. If absent, a hung child hangs the
    /// pipeline indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Validated configuration with typed fields, produced from
/// [`RawConfigFile`] via `TryFrom`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub generator: GeneratorConfig,
    pub build: BuildConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub bin: PathBuf,
    pub descriptor: PathBuf,
    pub side_a: PathBuf,
    pub side_b: PathBuf,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub tool: PathBuf,
    pub build_dir: PathBuf,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub timeout: Option<Duration>,
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = GencheckError;

    fn try_from(raw: RawConfigFile) -> Result<Self, Self::Error> {
        validate_config(&raw)?;

        Ok(Self {
            generator: GeneratorConfig {
                bin: PathBuf::from(&raw.generator.bin),
                descriptor: PathBuf::from(&raw.generator.descriptor),
                side_a: PathBuf::from(&raw.generator.side_a),
                side_b: PathBuf::from(&raw.generator.side_b),
            },
            build: BuildConfig {
                tool: PathBuf::from(&raw.build.tool),
                build_dir: PathBuf::from(&raw.build.build_dir),
                target: raw.build.target,
            },
            runner: RunnerConfig {
                timeout: raw.runner.timeout_secs.map(Duration::from_secs),
            },
        })
    }
}
