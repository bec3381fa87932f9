use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入錯誤在互動模式中可恢復
            Self::InvalidInput { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            Self::ConfigError { .. } => "The configuration profile could not be read".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "The recipe report could not be rendered".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            Self::ConfigError { message } => {
                format!("Check the TOML profile syntax ({})", message)
            }
            Self::IoError(_) => "Make sure the path exists and is writable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different output format, e.g. --format text".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
