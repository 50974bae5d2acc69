//! Builder pattern for initializing logging configuration.
//!
//! This module provides a convenient builder API for configuring and initializing
//! logging in a single chain of method calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use tidylog;
//!
//! // Simple console logging
//! tidylog::builder()
//!     .with_level("info")
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! // With rotated file logging for the listed programs
//! tidylog::builder()
//!     .with_level("debug")
//!     .with_rotation("logs")
//!     .with_programs(["quickpay", "phantom"])
//!     .init()
//!     .expect("Failed to initialize logging");
//! ```

use crate::init_logging;
use crate::{Cadence, LogConfig, Result, RotateConfig};
use std::path::PathBuf;

/// A builder for configuring and initializing logging.
///
/// This provides a fluent interface for setting up logging configuration
/// and initializing the logging system in one chain of calls.
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Set the log level (e.g., "trace", "debug", "info", "warn", "error").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level.into());
        self
    }

    /// Set the log output format ("text" or "json").
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.config = self.config.with_format(format.into());
        self
    }

    /// Configure rotated file logging in the given directory.
    ///
    /// This creates a RotateConfig with the default retention settings.
    pub fn with_rotation(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rotate_mut().dir = dir.into();
        self
    }

    /// Configure file logging with a custom RotateConfig.
    pub fn with_rotate_config(mut self, rotate: RotateConfig) -> Self {
        self.config = self.config.with_rotate(rotate);
        self
    }

    /// Set the programs that log to rotated files.
    pub fn with_programs<I, S>(mut self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rotate_mut().programs = programs.into_iter().map(Into::into).collect();
        self
    }

    /// Override program detection with an explicit name.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.rotate_mut().program = Some(program.into());
        self
    }

    /// Set the retention threshold in calendar months; zero is raised to one.
    pub fn with_keep_months(mut self, keep_months: u8) -> Self {
        self.rotate_mut().keep_months = keep_months;
        self
    }

    /// Set the retention sweep cadence.
    pub fn with_sweep(mut self, sweep: Cadence) -> Self {
        self.rotate_mut().sweep = sweep;
        self
    }

    fn rotate_mut(&mut self) -> &mut RotateConfig {
        self.config.rotate.get_or_insert_with(RotateConfig::new)
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Initialize logging with the configured settings.
    ///
    /// This consumes the builder and initializes the global logging system.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tracing subscriber is already initialized
    /// - Invalid configuration is provided
    pub fn init(self) -> Result<()> {
        init_logging(&self.config)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new [`LogBuilder`].
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
