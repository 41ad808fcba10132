use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverviewError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Preference '{key}' error: {message}")]
    PreferenceError { key: String, message: String },
}

impl OverviewError {
    /// Short hint printed next to the error by the CLI.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OverviewError::IoError(_) => "Check that the file exists and is readable",
            OverviewError::SerializationError(_) | OverviewError::PreferenceError { .. } => {
                "Inspect or delete the preferences file; it will be recreated"
            }
            OverviewError::CsvError(_) => "Expected columns: id,shortname,fullname,visible",
            OverviewError::UrlError(_) => "Set [site].wwwroot to an absolute http(s) URL",
            OverviewError::ConfigValidationError { .. }
            | OverviewError::InvalidConfigValueError { .. } => "Fix the configuration file and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, OverviewError>;
