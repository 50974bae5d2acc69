//! Example of loading logging configuration from TOML.
//!
//! This example demonstrates how to parse a TOML configuration and
//! initialize the logging system from it.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    log: tidylog::LogConfig,
}

const CONFIG: &str = r#"
[log]
level = "debug"
format = "text"

[log.rotate]
dir = "logs"
programs = ["quickpay", "phantom", "shopcode"]
keep_months = 2
sweep = "daily"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse the TOML configuration
    let root: Config = toml::from_str(CONFIG)?;
    let config = root.log;

    // Initialize logging with the loaded configuration. This process is not
    // on the program list, so output stays on the console.
    tidylog::init_logging(&config)?;

    // Log some messages
    tracing::trace!("This is a trace message (usually not visible)");
    tracing::debug!("This is a debug message (visible because level is debug)");
    tracing::info!("This is an info message");
    tracing::warn!("This is a warning message");
    tracing::error!("This is an error message");

    // Log with structured data
    tracing::info!(
        user = "bob",
        action = "logout",
        duration_ms = 1234,
        "User session ended"
    );

    Ok(())
}
