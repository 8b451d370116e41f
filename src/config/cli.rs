use crate::config::toml_config::TomlConfig;
use crate::config::RangeConfig;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parity-check")]
#[command(about = "Classify a range of integers as Even or Odd")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// First number to classify [default: 0]
    #[arg(long)]
    pub start: Option<i64>,

    /// Last number to classify, inclusive [default: 99]
    #[arg(long)]
    pub end: Option<i64>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML file with [range] and [output] sections
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the optional config file and layers the command-line values over it.
    pub fn resolve(&self) -> Result<RangeConfig> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let resolved = RangeConfig::merge(file.as_ref(), self.start, self.end, self.format);
        resolved.validate()?;
        Ok(resolved)
    }
}
