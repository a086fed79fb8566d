use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use gencheck::errors::{GencheckError, Result};
use gencheck::exec::{CommandSpec, ExecutionOutcome, ProcessRunner};

/// Scripted response for one `FakeRunner::run` call.
pub enum FakeResponse {
    Outcome(ExecutionOutcome),
    LaunchError,
}

/// A fake process runner that:
/// - records every `CommandSpec` it is asked to run
/// - returns the next scripted response, or a clean exit-0 outcome when
///   the script is exhausted.
pub struct FakeRunner {
    responses: VecDeque<FakeResponse>,
    invoked: Arc<Mutex<Vec<CommandSpec>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
            invoked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the invocation record, for assertions after the pipeline
    /// has consumed the runner.
    pub fn invoked(&self) -> Arc<Mutex<Vec<CommandSpec>>> {
        Arc::clone(&self.invoked)
    }

    /// Script a clean exit-0 outcome with empty output.
    pub fn push_success(&mut self) {
        self.push_outcome(ExecutionOutcome {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        });
    }

    /// Script a nonzero exit with the given stderr text.
    pub fn push_exit(&mut self, exit_code: i32, stderr: &str) {
        self.push_outcome(ExecutionOutcome {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
    }

    pub fn push_outcome(&mut self, outcome: ExecutionOutcome) {
        self.responses.push_back(FakeResponse::Outcome(outcome));
    }

    /// Script a launch failure (as if the executable did not exist).
    pub fn push_launch_error(&mut self) {
        self.responses.push_back(FakeResponse::LaunchError);
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<ExecutionOutcome> {
        {
            let mut guard = self.invoked.lock().unwrap();
            guard.push(spec.clone());
        }

        match self.responses.pop_front() {
            Some(FakeResponse::Outcome(outcome)) => Ok(outcome),
            Some(FakeResponse::LaunchError) => Err(GencheckError::LaunchError {
                program: spec.program().display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "fake launch error",
                ),
            }),
            None => Ok(ExecutionOutcome {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}
