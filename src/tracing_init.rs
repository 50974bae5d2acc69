use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RotateConfig;
use crate::naming::IdentityCell;
use crate::retention::Sweeper;
use crate::rotation::Rotator;
use crate::schedule::{self, Cadence};
use crate::{Error, LogConfig, Result};

static LOG_GUARD: Lazy<Mutex<Option<tracing_appender::non_blocking::WorkerGuard>>> =
    Lazy::new(|| Mutex::new(None));

/// Initialize logging with the given configuration.
///
/// Without a `rotate` section this is plain console logging. With one, the
/// subscriber writes through the rotator's active destination, today's file
/// is opened up front, expired files are swept once, and the midnight
/// rotation and retention timers are started.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let log_spec = effective_log_spec(config);

    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;

    match config.rotate.as_ref() {
        Some(rotate) => init_rotating(config, rotate, env_filter),
        None => init_console_only(config, env_filter),
    }
}

/// Initialize rotating-file logging.
fn init_rotating(config: &LogConfig, rotate: &RotateConfig, env_filter: EnvFilter) -> Result<()> {
    let identity = Arc::new(match rotate.program.as_ref() {
        Some(name) => IdentityCell::preset(name.clone(), rotate.programs.clone()),
        None => IdentityCell::new(rotate.programs.clone()),
    });
    let rotator = Arc::new(Rotator::new(rotate.dir.clone(), Arc::clone(&identity)));
    let sweeper = Arc::new(Sweeper::new(rotate.dir.clone(), rotate.keep_months, identity));

    // The first rotation runs before the subscriber exists; its failures go
    // to the console.
    rotator.rotate();

    let (non_blocking, guard) = tracing_appender::non_blocking(rotator.writer());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    if config.format == "json" {
        let fmt_layer = fmt_layer.json().boxed();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| Error::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| Error::Init(e.to_string()))?;
    }

    // Parked only once the install succeeds; a refused attempt drops its own
    // guard and must not displace the live subscriber's.
    *LOG_GUARD.lock().unwrap() = Some(guard);

    sweeper.run();

    schedule::spawn("tidylog-rotate", Cadence::Daily, {
        let rotator = Arc::clone(&rotator);
        move || rotator.rotate()
    });
    schedule::spawn("tidylog-sweep", rotate.sweep, move || sweeper.run());

    Ok(())
}

/// Initialize console-only logging.
fn init_console_only(config: &LogConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer_builder = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let fmt_layer = if config.format == "json" {
        fmt_layer_builder.json().boxed()
    } else {
        fmt_layer_builder.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Determine the effective filter directives.
fn effective_log_spec(config: &LogConfig) -> String {
    // RUST_LOG takes precedence over everything
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    if config.level.is_empty() {
        "info".to_string()
    } else {
        config.level.clone()
    }
}
