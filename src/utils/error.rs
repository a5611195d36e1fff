use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopierError {
    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template {} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Which side of the copy an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

impl CopierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::Read { .. } | Self::Encoding { .. } => {
                ErrorCategory::Input
            }
            Self::Write { .. } => ErrorCategory::Output,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit status for this failure. Never 0.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Output => 1,
            ErrorCategory::Configuration => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, CopierError>;
