use std::io::Read;
use std::time::Duration;

use tidylog::naming::{date_stamp, dated_file_name};
use tidylog::{Cadence, LogConfig, RotateConfig, init_logging};

fn stamp_days_ago(days: i64) -> String {
    let date = time::OffsetDateTime::now_utc().date() - time::Duration::days(days);
    date_stamp(date).expect("format stamp")
}

/// One full pass through the public entry point: today's file is opened,
/// log calls land in it, the startup sweep drops expired files, and a
/// second initialization is refused.
#[test]
fn test_init_logging_end_to_end() {
    unsafe {
        std::env::remove_var("RUST_LOG");
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let expired = dated_file_name("quickpay", &stamp_days_ago(95));
    let recent = dated_file_name("quickpay", &stamp_days_ago(28));
    std::fs::write(dir.path().join(&expired), b"old\n").unwrap();
    std::fs::write(dir.path().join(&recent), b"new\n").unwrap();

    let rotate = RotateConfig::new()
        .with_dir(dir.path())
        .with_programs(vec!["quickpay".to_string(), "phantom".to_string()])
        .with_program("quickpay")
        .with_keep_months(2)
        .with_sweep(Cadence::Daily);
    let config = LogConfig::new()
        .with_level("debug".to_string())
        .with_rotate(rotate);

    init_logging(&config).expect("first init");

    tracing::info!("end-to-end: file message");
    tracing::debug!(request = "balance", "end-to-end: structured");

    // Give the background worker a moment to write and flush
    std::thread::sleep(Duration::from_millis(300));

    assert!(!dir.path().join(&expired).exists(), "startup sweep missed");
    assert!(dir.path().join(&recent).exists(), "recent file deleted");

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().into_string().unwrap_or_default())
        .collect();
    assert_eq!(names.len(), 2, "expected live file plus recent file: {names:?}");

    let live = names.iter().find(|n| **n != recent).expect("live file");
    let mut s = String::new();
    std::fs::File::open(dir.path().join(live))
        .expect("open log file")
        .read_to_string(&mut s)
        .expect("read log file");
    assert!(s.contains("end-to-end: file message"));
    assert!(s.contains("end-to-end: structured"));
    assert!(!s.contains("\x1b"), "ANSI escape found in log file");

    // The global subscriber is already installed
    assert!(init_logging(&LogConfig::new()).is_err());
}

#[test]
fn test_init_logging_rejects_invalid_filter() {
    unsafe {
        std::env::remove_var("RUST_LOG");
    }

    let config = LogConfig::new().with_level("foo=notalevel".to_string());
    assert!(init_logging(&config).is_err());
}
