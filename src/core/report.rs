use crate::core::classifier::summarize;
use crate::core::Classification;
use crate::utils::error::{ParityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ParityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParityError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Supported formats: text, csv, json".to_string(),
            }),
        }
    }
}

pub fn render(table: &[Classification], format: OutputFormat) -> Result<String> {
    tracing::debug!("Rendering {} rows as {}", table.len(), format);
    match format {
        OutputFormat::Text => Ok(render_text(table)),
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
    }
}

fn render_text(table: &[Classification]) -> String {
    let mut output = String::new();
    for row in table {
        output.push_str(&row.to_string());
        output.push('\n');
    }

    let summary = summarize(table);
    output.push_str(&format!(
        "Summary: {} even, {} odd ({} total)\n",
        summary.even,
        summary.odd,
        summary.total()
    ));
    output
}

fn render_csv(table: &[Classification]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if table.is_empty() {
        writer.write_record(["number", "parity"])?;
    }
    for row in table {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| ParityError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
