use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed frame on line {line}: {message}")]
    FrameParseError { line: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl RelayError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelayError::HttpError(_) => "Check that the report endpoint is reachable",
            RelayError::IoError(_) => "Check that the frame file exists and is readable",
            RelayError::FrameParseError { .. } => {
                "Each line must be one JSON object with a multiHandLandmarks array"
            }
            RelayError::ConfigError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::MissingConfigError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    /// 依錯誤類型決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            RelayError::ConfigError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::MissingConfigError { .. } => 1,
            RelayError::FrameParseError { .. } => 2,
            RelayError::IoError(_) | RelayError::HttpError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
