#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_span, validate_ordered, Validate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use toml_config::TomlConfig;

pub const DEFAULT_START: i64 = 0;
pub const DEFAULT_END: i64 = 99;
/// Upper bound on rows a single run may produce.
pub const MAX_SPAN: u64 = 1_000_000;

/// Fully resolved settings for one classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: i64,
    pub end: i64,
    pub format: OutputFormat,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            format: OutputFormat::default(),
        }
    }
}

impl RangeConfig {
    /// Command-line values win over the file, the file wins over defaults.
    pub fn merge(
        file: Option<&TomlConfig>,
        start: Option<i64>,
        end: Option<i64>,
        format: Option<OutputFormat>,
    ) -> Self {
        let defaults = Self::default();
        let range = file.and_then(|config| config.range.as_ref());
        let output = file.and_then(|config| config.output.as_ref());

        Self {
            start: start
                .or_else(|| range.and_then(|r| r.start))
                .unwrap_or(defaults.start),
            end: end
                .or_else(|| range.and_then(|r| r.end))
                .unwrap_or(defaults.end),
            format: format
                .or_else(|| output.and_then(|o| o.format))
                .unwrap_or(defaults.format),
        }
    }

    pub fn range(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl Validate for RangeConfig {
    fn validate(&self) -> Result<()> {
        validate_ordered("start", self.start, "end", self.end)?;
        validate_max_span("range", self.start, self.end, MAX_SPAN)?;
        Ok(())
    }
}
