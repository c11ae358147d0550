use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitmentError {
    #[error("Invalid tire size: '{input}'")]
    InvalidSize { input: String },

    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Catalog,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FitmentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FitmentError::InvalidSize { .. } => ErrorCategory::Input,
            FitmentError::ConfigError { .. }
            | FitmentError::MissingConfigError { .. }
            | FitmentError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FitmentError::HttpError(_)
            | FitmentError::CsvError(_)
            | FitmentError::SerializationError(_)
            | FitmentError::CatalogError { .. } => ErrorCategory::Catalog,
            FitmentError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Catalog => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FitmentError::InvalidSize { input } => format!(
                "'{}' is not a valid tire size. Use the form 205/55R16.",
                input
            ),
            FitmentError::HttpError(_) => "Could not reach the product catalog.".to_string(),
            FitmentError::CsvError(_) | FitmentError::SerializationError(_) => {
                "The product catalog could not be read.".to_string()
            }
            FitmentError::IoError(e) => format!("File access failed: {}", e),
            FitmentError::ConfigError { message } => format!("Configuration problem: {}", message),
            FitmentError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            FitmentError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            FitmentError::CatalogError { message } => format!("Catalog problem: {}", message),
        }
    }

    /// 根據錯誤類別決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::Catalog => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Enter width (3 digits), aspect ratio (2 digits) and rim (2 digits), e.g. 205/55R16"
            }
            ErrorCategory::Configuration => "Check the config file and environment variables",
            ErrorCategory::Catalog => {
                "Check the catalog file or endpoint; recommendations still work without it"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, FitmentError>;
