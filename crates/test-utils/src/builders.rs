#![allow(dead_code)]

use gencheck::config::{
    ConfigFile, RawBuildSection, RawConfigFile, RawGeneratorSection, RawRunnerSection,
};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                generator: RawGeneratorSection {
                    bin: "generator".to_string(),
                    descriptor: "Test.json".to_string(),
                    side_a: "Test_Main_a.c".to_string(),
                    side_b: "Test_Main_b.c".to_string(),
                },
                build: RawBuildSection::default(),
                runner: RawRunnerSection::default(),
            },
        }
    }

    pub fn with_generator_bin(mut self, path: &str) -> Self {
        self.config.generator.bin = path.to_string();
        self
    }

    pub fn with_descriptor(mut self, path: &str) -> Self {
        self.config.generator.descriptor = path.to_string();
        self
    }

    pub fn with_side_a(mut self, path: &str) -> Self {
        self.config.generator.side_a = path.to_string();
        self
    }

    pub fn with_side_b(mut self, path: &str) -> Self {
        self.config.generator.side_b = path.to_string();
        self
    }

    pub fn with_build_tool(mut self, path: &str) -> Self {
        self.config.build.tool = path.to_string();
        self
    }

    pub fn with_build_dir(mut self, path: &str) -> Self {
        self.config.build.build_dir = path.to_string();
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.config.build.target = target.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.runner.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
