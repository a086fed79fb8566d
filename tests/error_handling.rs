// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use gencheck::config::load_and_validate;
use gencheck::errors::GencheckError;

#[test]
fn identical_output_paths_return_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[generator]
bin = "lcsf_generator_cli"
descriptor = "Test.json"
side_a = "Test_Main.c"
side_b = "Test_Main.c"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GencheckError::ConfigError(msg)) => {
            assert!(msg.contains("distinct"));
            assert!(msg.contains("Test_Main.c"));
        }
        Err(e) => panic!("Expected ConfigError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_generator_bin_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[generator]
bin = ""
descriptor = "Test.json"
side_a = "Test_Main_a.c"
side_b = "Test_Main_b.c"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GencheckError::ConfigError(msg)) => {
            assert!(msg.contains("[generator].bin"));
        }
        Err(e) => panic!("Expected ConfigError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn zero_timeout_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[generator]
bin = "lcsf_generator_cli"
descriptor = "Test.json"
side_a = "Test_Main_a.c"
side_b = "Test_Main_b.c"

[runner]
timeout_secs = 0
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GencheckError::ConfigError(msg)) => {
            assert!(msg.contains("timeout_secs"));
        }
        Err(e) => panic!("Expected ConfigError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "this is ][ not toml").unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GencheckError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_generator_section_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[build]
target = "run_tests"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(GencheckError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {e:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn build_and_runner_sections_have_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[generator]
bin = "lcsf_generator_cli"
descriptor = "Test.json"
side_a = "Test_Main_a.c"
side_b = "Test_Main_b.c"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.build.tool.to_string_lossy(), "cmake");
    assert_eq!(cfg.build.build_dir.to_string_lossy(), "build/");
    assert_eq!(cfg.build.target, "run_tests");
    assert!(cfg.runner.timeout.is_none());
}
