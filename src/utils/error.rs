use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Serialization,
    Config,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) => ErrorCategory::Network,
            ScrapeError::IoError(_) => ErrorCategory::Io,
            ScrapeError::SerializationError(_) => ErrorCategory::Serialization,
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. }
            | ScrapeError::MissingConfigError { .. }
            | ScrapeError::ConfigValidationError { .. } => ErrorCategory::Config,
            ScrapeError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and that the source sites are reachable".to_string()
            }
            ErrorCategory::Io => {
                "Check that the output directory is writable and the disk has free space"
                    .to_string()
            }
            ErrorCategory::Serialization => {
                "Re-run with --verbose and report the output; this is likely a bug".to_string()
            }
            ErrorCategory::Config => match self {
                ScrapeError::InvalidConfigValueError { field, .. }
                | ScrapeError::MissingConfigError { field }
                | ScrapeError::ConfigValidationError { field, .. } => {
                    format!("Fix the '{}' setting (CLI flag or TOML file)", field)
                }
                _ => "Review the CLI flags or the TOML configuration file".to_string(),
            },
            ErrorCategory::Processing => {
                "Re-run with --verbose to see which pipeline stage failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) => format!("Could not reach a source site: {}", e),
            ScrapeError::IoError(e) => format!("Could not write the output file: {}", e),
            ScrapeError::SerializationError(e) => {
                format!("Could not serialize the results: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
