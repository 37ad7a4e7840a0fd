use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombinerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CombinerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CombinerError::ConfigError { .. }
            | CombinerError::ConfigValidationError { .. }
            | CombinerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CombinerError::IoError(_) => ErrorCategory::Io,
            CombinerError::SerializationError(_) | CombinerError::CsvError(_) => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CombinerError::ConfigError { .. }
            | CombinerError::ConfigValidationError { .. }
            | CombinerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CombinerError::SerializationError(_) | CombinerError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            CombinerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CombinerError::ConfigError { .. } => "Check the combiner configuration file",
            CombinerError::ConfigValidationError { .. } => {
                "Fix the TOML syntax or the reported field and try again"
            }
            CombinerError::InvalidConfigValueError { .. } => {
                "Adjust the reported value, see --help for accepted ranges"
            }
            CombinerError::IoError(_) => "Check that the config file is readable and stdout is still open",
            CombinerError::SerializationError(_) | CombinerError::CsvError(_) => {
                "Try the plain output format"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CombinerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            CombinerError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            CombinerError::ConfigError { message } => format!("Configuration problem: {}", message),
            CombinerError::IoError(e) => format!("I/O failure: {}", e),
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CombinerError>;
