// src/exec/runner.rs

//! Blocking child-process runner.
//!
//! The pipeline talks to a [`ProcessRunner`] instead of `std::process`
//! directly. This makes it easy to swap in a fake runner in tests while
//! keeping the production implementation in [`SystemRunner`].
//!
//! A nonzero exit code is a normal, reportable [`ExecutionOutcome`], not an
//! error of the runner. The runner itself only fails when the executable
//! cannot be started (`LaunchError`) or when a configured timeout expires
//! (`Timeout`).

use std::process::{Command, Output, Stdio};
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::{GencheckError, Result};
use crate::exec::CommandSpec;

/// Exit code + captured output streams of one finished child process.
///
/// Produced once per [`ProcessRunner::run`] call; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how a [`CommandSpec`] is executed.
///
/// Production code uses [`SystemRunner`]; tests can provide their own
/// implementation that records invocations and returns scripted outcomes
/// without spawning real processes.
pub trait ProcessRunner {
    /// Launch the command, block until it terminates, and return its
    /// outcome.
    fn run(&mut self, spec: &CommandSpec) -> Result<ExecutionOutcome>;
}

/// Real process runner used in production.
///
/// Spawns the child via `std::process::Command` with both output streams
/// piped, and blocks until it exits. With a timeout configured, a child
/// that outlives it is killed and reported as [`GencheckError::Timeout`].
#[derive(Debug, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<ExecutionOutcome> {
        info!(cmd = %spec, "executing");

        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = spec.dir() {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|source| GencheckError::LaunchError {
            program: spec.program().display().to_string(),
            source,
        })?;

        let output = match self.timeout {
            Some(timeout) => wait_with_timeout(child, timeout, spec)?,
            None => child.wait_with_output()?,
        };

        // A termination by signal yields no exit code; report it as -1.
        let exit_code = output.status.code().unwrap_or(-1);

        info!(
            program = %spec.program().display(),
            exit_code,
            success = output.status.success(),
            "child process exited"
        );

        Ok(ExecutionOutcome {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Wait for a child with a timeout, capturing both streams on reader
/// threads so pipe buffers can't fill up and deadlock the child.
fn wait_with_timeout(
    mut child: std::process::Child,
    timeout: Duration,
    spec: &CommandSpec,
) -> Result<Output> {
    use std::io::Read;
    use std::sync::mpsc;
    use std::thread;

    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_thread = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stdout) = stdout_handle {
            let _ = stdout.read_to_end(&mut buf);
        }
        buf
    });

    let stderr_thread = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stderr) = stderr_handle {
            let _ = stderr.read_to_end(&mut buf);
        }
        buf
    });

    let (tx, rx) = mpsc::channel();
    let wait_thread = thread::spawn(move || {
        let result = child.wait();
        let _ = tx.send(result);
        child
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(status)) => {
            let _ = wait_thread.join();

            let stdout = stdout_thread.join().unwrap_or_default();
            let stderr = stderr_thread.join().unwrap_or_default();

            Ok(Output {
                status,
                stdout,
                stderr,
            })
        }
        Ok(Err(e)) => {
            let _ = wait_thread.join();
            let _ = stdout_thread.join();
            let _ = stderr_thread.join();
            Err(e.into())
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            debug!(cmd = %spec, timeout_secs = timeout.as_secs(), "timeout expired, killing child");

            // Kill and reap so no zombie is left behind.
            if let Ok(mut child) = wait_thread.join() {
                let _ = child.kill();
                let _ = child.wait();
            }
            let _ = stdout_thread.join();
            let _ = stderr_thread.join();

            Err(GencheckError::Timeout {
                program: spec.program().display().to_string(),
                timeout_secs: timeout.as_secs(),
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            let _ = wait_thread.join();
            let _ = stdout_thread.join();
            let _ = stderr_thread.join();
            Err(anyhow::anyhow!("process wait thread disconnected").into())
        }
    }
}
