#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, RangeConfig};
pub use core::classifier::{classifications, classify, classify_range, summarize, ParitySummary};
pub use core::report::{render, OutputFormat};
pub use domain::model::{Classification, Parity};
pub use utils::error::{ParityError, Result};
