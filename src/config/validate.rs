// src/config/validate.rs

use crate::config::model::RawConfigFile;
use crate::errors::{GencheckError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - all `[generator]` paths are non-empty
/// - `side_a` and `side_b` are distinct
/// - `[build]` tool / build_dir / target are non-empty
/// - `timeout_secs >= 1` when set
///
/// It does **not** check that any of the paths exist: a missing generator
/// binary is a launch error at run time, and a missing descriptor is the
/// generator's own failure to report.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_generator(cfg)?;
    validate_build(cfg)?;
    validate_runner(cfg)?;
    Ok(())
}

fn validate_generator(cfg: &RawConfigFile) -> Result<()> {
    ensure_non_empty("[generator].bin", &cfg.generator.bin)?;
    ensure_non_empty("[generator].descriptor", &cfg.generator.descriptor)?;
    ensure_non_empty("[generator].side_a", &cfg.generator.side_a)?;
    ensure_non_empty("[generator].side_b", &cfg.generator.side_b)?;

    if cfg.generator.side_a == cfg.generator.side_b {
        return Err(GencheckError::ConfigError(format!(
            "[generator].side_a and [generator].side_b must be distinct paths (both are '{}')",
            cfg.generator.side_a
        )));
    }

    Ok(())
}

fn validate_build(cfg: &RawConfigFile) -> Result<()> {
    ensure_non_empty("[build].tool", &cfg.build.tool)?;
    ensure_non_empty("[build].build_dir", &cfg.build.build_dir)?;
    ensure_non_empty("[build].target", &cfg.build.target)?;
    Ok(())
}

fn validate_runner(cfg: &RawConfigFile) -> Result<()> {
    if cfg.runner.timeout_secs == Some(0) {
        return Err(GencheckError::ConfigError(
            "[runner].timeout_secs must be >= 1 (got 0); omit it to disable the timeout"
                .to_string(),
        ));
    }
    Ok(())
}

fn ensure_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GencheckError::ConfigError(format!(
            "{field} must be a non-empty path"
        )));
    }
    Ok(())
}
