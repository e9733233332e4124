//! Logging setup.
//!
//! The subscriber is built explicitly and installed as the default for the
//! current thread only. The returned guard must be held for the whole run;
//! dropping it uninstalls the subscriber.

use clap::ValueEnum;
use tracing::Dispatch;
use tracing::dispatcher::{self, DefaultGuard};
use tracing_subscriber::EnvFilter;

/// Filter used when none is configured or the configured one does not parse.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable text.
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}

/// Keeps the run's subscriber installed.
#[must_use = "logging is uninstalled when the guard is dropped"]
pub struct LogGuard {
    _default: DefaultGuard,
}

/// Build the subscriber and install it for the current thread.
pub fn init_logging(config: &LoggingConfig) -> LogGuard {
    let dispatch = build_dispatch(config);
    LogGuard {
        _default: dispatcher::set_default(&dispatch),
    }
}

/// Build a stderr subscriber for `config` without installing it.
pub fn build_dispatch(config: &LoggingConfig) -> Dispatch {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}' ({e}), using '{DEFAULT_LOG_FILTER}'",
            config.filter
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    match config.format {
        LogFormat::Json => Dispatch::new(
            tracing_subscriber::fmt()
                .json()
                .flatten_event(true)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish(),
        ),
        LogFormat::Pretty => Dispatch::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn config(filter: &str, format: LogFormat) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
            format,
        }
    }

    #[test]
    fn test_filter_controls_levels() {
        let dispatch = build_dispatch(&config("warn", LogFormat::Json));
        dispatcher::with_default(&dispatch, || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::INFO));
        });
    }

    #[test]
    fn test_invalid_filter_falls_back_to_info() {
        let dispatch = build_dispatch(&config("intake_core=loud", LogFormat::Pretty));
        dispatcher::with_default(&dispatch, || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_guard_scopes_subscriber() {
        let guard = init_logging(&config("error", LogFormat::Json));
        assert!(!tracing::enabled!(Level::WARN));
        drop(guard);
    }
}
