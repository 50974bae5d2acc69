use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Cadence;

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (e.g., "info", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
    /// Rotating-file configuration; absent means console-only logging
    pub rotate: Option<RotateConfig>,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            rotate: None,
        }
    }

    /// Set log level
    pub fn with_level(mut self, level: String) -> Self {
        self.level = level;
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: String) -> Self {
        self.format = format;
        self
    }

    /// Set rotating-file configuration
    pub fn with_rotate(mut self, rotate: RotateConfig) -> Self {
        self.rotate = Some(rotate);
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

/// Configuration for the rotating file destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotateConfig {
    /// Directory holding the dated log files
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    /// Programs that log to rotated files; any other process stays on the
    /// console
    #[serde(default)]
    pub programs: Vec<String>,
    /// Explicit program name, overriding detection from the process
    pub program: Option<String>,
    /// Age threshold for the retention sweep, in calendar months
    /// (a zero is treated as one month)
    #[serde(default = "default_keep_months")]
    pub keep_months: u8,
    /// How often the retention sweep re-runs after startup
    #[serde(default)]
    pub sweep: Cadence,
}

impl RotateConfig {
    /// Create a new RotateConfig with defaults
    pub fn new() -> Self {
        Self {
            dir: default_log_dir(),
            programs: Vec::new(),
            program: None,
            keep_months: default_keep_months(),
            sweep: Cadence::default(),
        }
    }

    /// Set the log directory
    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the list of file-backed programs
    pub fn with_programs(mut self, programs: Vec<String>) -> Self {
        self.programs = programs;
        self
    }

    /// Override program detection with an explicit name
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Set the retention threshold in calendar months; zero is raised to one
    pub fn with_keep_months(mut self, keep_months: u8) -> Self {
        self.keep_months = keep_months;
        self
    }

    /// Set the retention sweep cadence
    pub fn with_sweep(mut self, sweep: Cadence) -> Self {
        self.sweep = sweep;
        self
    }
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_keep_months() -> u8 {
    2
}
