use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Source request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Report rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument '{argument}' ({value}): {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    Network,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankError::InvalidArgument { .. } => ErrorCategory::Argument,
            RankError::ConfigValidationError { .. }
            | RankError::InvalidConfigValueError { .. }
            | RankError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RankError::HttpError(_) => ErrorCategory::Network,
            RankError::CsvError(_)
            | RankError::SerializationError(_)
            | RankError::ProcessingError { .. } => ErrorCategory::Processing,
            RankError::IoError(_) | RankError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤重試後通常可以恢復
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Argument | ErrorCategory::Configuration | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RankError::InvalidArgument { argument, .. } => {
                format!("Pass a valid value for '{}' (top-n must be >= 0)", argument)
            }
            RankError::ConfigValidationError { field, .. }
            | RankError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            RankError::MissingConfigError { field } => {
                format!("Add the required '{}' setting to your configuration", field)
            }
            RankError::HttpError(_) => {
                "Check the source URL and your network connection, then retry".to_string()
            }
            RankError::CsvError(_) | RankError::SerializationError(_) => {
                "Report rendering failed; re-run with --verbose to see details".to_string()
            }
            RankError::ProcessingError { .. } => {
                "Check that the source contains valid UTF-8 text".to_string()
            }
            RankError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            RankError::ZipError(_) => {
                "Check free disk space and permissions on the output path".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RankError::InvalidArgument {
                argument, reason, ..
            } => format!("Invalid argument '{}': {}", argument, reason),
            RankError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RankError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            RankError::MissingConfigError { field } => {
                format!("Missing configuration: '{}'", field)
            }
            RankError::HttpError(e) => format!("Could not fetch the text source: {}", e),
            RankError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
