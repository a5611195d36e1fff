use crate::config::toml_config::TomlConfig;
use crate::config::CopierConfig;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "template-copier")]
#[command(about = "Copies the contacts import modal template into the app tree")]
pub struct CliArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the template to copy from
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Override the file to write
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    pub fn copier_config(&self, file: Option<&TomlConfig>) -> CopierConfig {
        CopierConfig::layered(file, self.template.clone(), self.target.clone())
    }

    pub fn verbose(&self, file: Option<&TomlConfig>) -> bool {
        self.verbose || file.map(TomlConfig::verbose).unwrap_or(false)
    }

    pub fn log_format(&self, file: Option<&TomlConfig>) -> LogFormat {
        self.log_format
            .or_else(|| file.and_then(TomlConfig::log_format))
            .unwrap_or_default()
    }
}
