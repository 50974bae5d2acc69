//! # Tidylog
//!
//! Daily log rotation with age-based retention, built on the `tracing`
//! ecosystem.
//!
//! ## Features
//!
//! - Console or dated-file logging, chosen by program name
//! - A fresh `{program}_{YYYYMMDD}.log` file at every local midnight
//! - A retention sweep that deletes dated files older than a configurable
//!   number of calendar months
//! - Structured logging with JSON output
//!
//! ## Example
//!
//! ```rust
//! use tidylog::{init_logging, LogConfig};
//!
//! let config = LogConfig::new();
//! init_logging(&config)?;
//!
//! tracing::info!("This is an info message");
//! # Ok::<(), tidylog::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod naming;
pub mod retention;
pub mod rotation;
pub mod schedule;
pub mod tracing_init;
pub mod writer;

pub use builder::{LogBuilder, builder};
pub use config::{LogConfig, RotateConfig};
pub use error::{Error, Result};
pub use naming::{Identity, IdentityCell};
pub use retention::Sweeper;
pub use rotation::Rotator;
pub use schedule::Cadence;
pub use tracing_init::init_logging;
pub use writer::ActiveWriter;
