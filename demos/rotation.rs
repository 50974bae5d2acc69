//! Rotated file logging example.
//!
//! The process logs into a dated file under a temporary directory and the
//! file name changes at every local midnight. The explicit program name
//! stands in for detection from the executable.

use std::time::Duration;

use tidylog::{LogConfig, RotateConfig, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;

    let rotate = RotateConfig::new()
        .with_dir(temp_dir.path())
        .with_programs(vec!["quickpay".to_string()])
        .with_program("quickpay")
        .with_keep_months(2);

    let config = LogConfig::new().with_rotate(rotate);

    init_logging(&config)?;

    for i in 0..100 {
        tracing::info!("Log message number {}", i);
    }

    // Give the background writer a moment to drain
    std::thread::sleep(Duration::from_millis(200));

    for entry in std::fs::read_dir(temp_dir.path())? {
        let entry = entry?;
        println!("created {}", entry.file_name().to_string_lossy());
    }

    Ok(())
}
