//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the records manager binaries.
//! Library crates only emit events; this is the one place that decides where they go.
//!
//! Sinks: compact ANSI console output and a rolling file under a directory, written
//! through a non-blocking worker, optionally as JSON lines. Filtering starts from a
//! default level and honours `RUST_LOG` unless explicit directives are given with
//! [`LoggerBuilder::env_filter`].
//!
//! ## Example
//!
//! ```rust
//! # use ccrm_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("ccrm")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;
mod filter;

pub use crate::builder::{ConsoleOnly, LoggerBuilder, Named, Unnamed, WithDirectory};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::filter::parse_level;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use ccrm_domain::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed subscriber.
///
/// Holds the file writer's worker guard when a directory is configured. Drop it only at
/// shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a [`LoggerBuilder`]. The name prefixes rolling files (`ccrm.2025-09-01.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Installs a subscriber described by the `[logging]` configuration section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name, plus
    /// everything [`LoggerBuilder::init`] can return.
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let builder = Self::builder().name(name).console(config.console).level(level);

        match &config.directory {
            Some(directory) => {
                let builder = builder.path(directory);
                if config.json { builder.json().init() } else { builder.init() }
            },
            None if config.json => Err(LoggerError::InvalidConfiguration {
                message: "JSON output needs a log directory".into(),
                context: None,
            }),
            None => builder.init(),
        }
    }

    pub(crate) const fn with_guard(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files before shutdown");
        }
    }
}
