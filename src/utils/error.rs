use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Configuration,
    System,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::DivisionByZero | DemoError::InvalidArgument { .. } => {
                ErrorCategory::Arithmetic
            }
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::DivisionByZero => "A division by zero was attempted".to_string(),
            DemoError::InvalidArgument { message } => format!("Invalid input: {}", message),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            DemoError::IoError(e) => format!("Could not read a file: {}", e),
            DemoError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Arithmetic => "Check the operands in the demo configuration",
            ErrorCategory::Configuration => {
                "Fix the TOML configuration file or run without --config to use defaults"
            }
            ErrorCategory::System => "Check file paths and permissions, then retry",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Arithmetic => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
