// src/exec/command.rs

//! Immutable description of one external invocation.
//!
//! A [`CommandSpec`] carries an explicit argument vector that is handed
//! straight to the process-launch primitive. No shell is ever involved, so
//! paths containing spaces or metacharacters are inert data.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Executable path + ordered argument list + optional working directory.
///
/// Built once by a pipeline step, then consumed by a
/// [`ProcessRunner`](crate::exec::ProcessRunner). Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the working directory the child is spawned in.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

/// Renders the command roughly as it would be typed, for logs and dry-run
/// output only. Execution never goes through this string form.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
