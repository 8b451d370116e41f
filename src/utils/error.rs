use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParityError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid parity label '{value}': expected 'Even' or 'Odd'")]
    ParseParityError { value: String },

    #[error("Invalid value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

impl ParityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParityError::TomlParseError(_) | ParityError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ParityError::ParseParityError { .. } => ErrorCategory::Input,
            ParityError::IoError(_)
            | ParityError::CsvError(_)
            | ParityError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input => 65,
            ErrorCategory::Output => 74,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check --start/--end and the [range] section of the config file",
            ErrorCategory::Input => "Use one of the labels 'Even' or 'Odd'",
            ErrorCategory::Output => "Check that stdout is writable and try another --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, ParityError>;
