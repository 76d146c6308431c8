//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them and exits non-zero.

use std::fmt;
use std::io;

use crate::interpreter::InterpretError;
use crate::observability::ObservabilityError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Logging could not be set up
    LoggingError,
    /// Record store could not be opened
    StoreError,
    /// Server failed to start or stopped with an error
    BootFailed,
    /// Phrase not understood
    Unparseable,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "STRLENS_CLI_CONFIG_ERROR",
            Self::IoError => "STRLENS_CLI_IO_ERROR",
            Self::LoggingError => "STRLENS_CLI_LOGGING_ERROR",
            Self::StoreError => "STRLENS_CLI_STORE_ERROR",
            Self::BootFailed => "STRLENS_CLI_BOOT_FAILED",
            Self::Unparseable => "STRLENS_CLI_UNPARSEABLE",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ObservabilityError> for CliError {
    fn from(e: ObservabilityError) -> Self {
        Self::new(CliErrorCode::LoggingError, e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

impl From<InterpretError> for CliError {
    fn from(e: InterpretError) -> Self {
        Self::new(CliErrorCode::Unparseable, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
