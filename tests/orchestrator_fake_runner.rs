// tests/orchestrator_fake_runner.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::path::Path;

use gencheck::config::ConfigFile;
use gencheck::errors::GencheckError;
use gencheck::pipeline::Orchestrator;
use gencheck_test_utils::builders::ConfigFileBuilder;
use gencheck_test_utils::fake_runner::FakeRunner;

type TestResult = Result<(), Box<dyn Error>>;

fn test_config() -> ConfigFile {
    ConfigFileBuilder::new()
        .with_generator_bin("lcsf_generator_cli")
        .with_descriptor("Test.json")
        .with_side_a("Test_Main_a.c")
        .with_side_b("Test_Main_b.c")
        .build()
}

fn args_of(spec: &gencheck::exec::CommandSpec) -> Vec<String> {
    spec.args()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn pipeline_success_runs_generate_then_build() -> TestResult {
    init_tracing();

    let cfg = test_config();
    let orchestrator = Orchestrator::from_config(&cfg);

    let mut runner = FakeRunner::new();
    runner.push_success();
    runner.push_success();
    let invoked = runner.invoked();

    orchestrator.run(&mut runner)?;

    let commands = invoked.lock().unwrap().clone();
    assert_eq!(commands.len(), 2);

    assert_eq!(commands[0].program(), Path::new("lcsf_generator_cli"));
    assert_eq!(
        args_of(&commands[0]),
        ["-l", "Test.json", "-a", "Test_Main_a.c", "-b", "Test_Main_b.c"]
    );

    assert_eq!(commands[1].program(), Path::new("cmake"));
    assert_eq!(
        args_of(&commands[1]),
        ["--build", "build/", "--target", "run_tests"]
    );

    Ok(())
}

#[test]
fn generation_failure_skips_build() {
    init_tracing();

    let cfg = test_config();
    let orchestrator = Orchestrator::from_config(&cfg);

    let mut runner = FakeRunner::new();
    runner.push_exit(2, "invalid field type");
    let invoked = runner.invoked();

    let result = orchestrator.run(&mut runner);

    match result {
        Err(GencheckError::GenerationFailure { exit_code, stderr }) => {
            assert_eq!(exit_code, 2);
            assert!(stderr.contains("invalid field type"));
        }
        Err(e) => panic!("Expected GenerationFailure, got: {e:?}"),
        Ok(()) => panic!("Expected error, got Ok"),
    }

    // The build command was never constructed or executed.
    assert_eq!(invoked.lock().unwrap().len(), 1);
}

#[test]
fn build_failure_after_successful_generation() {
    init_tracing();

    let cfg = test_config();
    let orchestrator = Orchestrator::from_config(&cfg);

    let mut runner = FakeRunner::new();
    runner.push_success();
    runner.push_exit(1, "test assertion failed");
    let invoked = runner.invoked();

    let result = orchestrator.run(&mut runner);

    match result {
        Err(GencheckError::BuildOrTestFailure { exit_code, stderr, .. }) => {
            assert_eq!(exit_code, 1);
            assert!(stderr.contains("test assertion failed"));
        }
        Err(e) => panic!("Expected BuildOrTestFailure, got: {e:?}"),
        Ok(()) => panic!("Expected error, got Ok"),
    }

    assert_eq!(invoked.lock().unwrap().len(), 2);
}

#[test]
fn launch_error_is_distinct_from_generation_failure() {
    init_tracing();

    let cfg = test_config();
    let orchestrator = Orchestrator::from_config(&cfg);

    let mut runner = FakeRunner::new();
    runner.push_launch_error();
    let invoked = runner.invoked();

    let result = orchestrator.run(&mut runner);

    match result {
        Err(GencheckError::LaunchError { program, .. }) => {
            assert_eq!(program, "lcsf_generator_cli");
        }
        Err(e) => panic!("Expected LaunchError, got: {e:?}"),
        Ok(()) => panic!("Expected error, got Ok"),
    }

    // The build step was never reached.
    assert_eq!(invoked.lock().unwrap().len(), 1);
}
