//! Structured JSON logging
//!
//! - One JSON object per line
//! - Level and per-module filtering via an `EnvFilter` directive
//! - `RUST_LOG` takes precedence over the configured directive

use tracing_subscriber::{fmt, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Default filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolves the effective filter: `RUST_LOG` if set, else `directive`.
pub fn resolve_filter(directive: &str) -> ObservabilityResult<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.trim().is_empty() => EnvFilter::try_new(env)
            .map_err(|e| ObservabilityError::InvalidFilter(e.to_string())),
        _ => EnvFilter::try_new(directive)
            .map_err(|e| ObservabilityError::InvalidFilter(e.to_string())),
    }
}

/// Installs the global JSON subscriber.
///
/// Fails if a global subscriber was already installed.
pub fn init_logging(directive: &str) -> ObservabilityResult<()> {
    let filter = resolve_filter(directive)?;

    fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
