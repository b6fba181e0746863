#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "students.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "report.txt";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub echo_summaries: bool,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            echo_summaries: true,
            monitor: false,
        }
    }
}

impl From<&TomlConfig> for RunConfig {
    fn from(config: &TomlConfig) -> Self {
        Self {
            input_path: config.input.path.clone(),
            output_path: config.output.path.clone(),
            echo_summaries: config.echo_summaries(),
            monitor: config.monitoring_enabled(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn echo_summaries(&self) -> bool {
        self.echo_summaries
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("Input file path", &self.input_path)?;
        validate_path("Output file path", &self.output_path)
    }
}
