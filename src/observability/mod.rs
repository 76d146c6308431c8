//! Observability for strlens
//!
//! - Structured logging (JSON lines) through `tracing`
//! - Typed lifecycle event names
//!
//! # Usage
//!
//! ```ignore
//! use strlens::observability::{init_logging, Event};
//!
//! init_logging("info")?;
//! tracing::info!(event = Event::ServerStart.as_str(), addr = "0.0.0.0:8000", "serving");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, resolve_filter, DEFAULT_LOG_FILTER};

use thiserror::Error;

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Logging setup errors. Never fatal to request handling.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ObservabilityError::InvalidFilter("bad".into());
        assert!(err.to_string().contains("Invalid log filter"));
    }
}
