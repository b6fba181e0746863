use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "grade-report")]
#[command(about = "Grades student scores from a comma-separated file and writes a report")]
pub struct CliConfig {
    /// Student file with `id,full_name,score` lines [default: students.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Report destination, overwritten on every run [default: report.txt]
    #[arg(short, long)]
    pub output: Option<String>,

    /// TOML configuration file; explicit flags take precedence over it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Do not echo per-student summary lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log memory usage and elapsed time per phase
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Merges defaults, the optional TOML file and the command line, in
    /// increasing order of precedence.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                RunConfig::from(&toml)
            }
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if self.quiet {
            config.echo_summaries = false;
        }
        if self.monitor {
            config.monitor = true;
        }

        Ok(config)
    }
}
