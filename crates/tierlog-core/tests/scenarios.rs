use std::fs;
use std::io;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use tempfile::tempdir;
use tierlog_core::logging::{format_timestamp, MemoryWriter};
use tierlog_core::{Level, LeveledLogger, Logger, LoggerConfig, SharedLogger, Threshold};

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 3, 7, 9).unwrap() + chrono::Duration::milliseconds(5)
}

#[test]
fn warn_console_error_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs.txt");
    let console = MemoryWriter::new();
    let logger = LeveledLogger::new()
        .with_console_threshold(Level::Warn)
        .with_file_threshold(Level::Error)
        .with_log_file(&path)
        .with_console_writer(console.clone())
        .with_clock(clock);

    logger.info("routine", &[]);
    assert!(console.contents().is_empty());
    assert!(!path.exists());

    logger.warn("careful", &[]);
    assert!(console.contents().contains("careful"));
    assert!(!path.exists());

    logger.error("broken", &[]);
    assert!(console.contents().contains("broken"));
    let file = fs::read_to_string(&path).unwrap();
    assert!(file.contains("broken"));
    assert!(!file.contains("careful"));
}

#[test]
fn two_errors_are_numbered_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs.txt");
    let logger = LeveledLogger::new()
        .with_console_threshold(Threshold::Nothing)
        .with_log_file(&path)
        .with_clock(clock);

    let enospc = io::Error::new(io::ErrorKind::Other, "ENOSPC");
    let timeout = io::Error::new(io::ErrorKind::TimedOut, "timeout");
    logger.error("disk nearly full", &[&enospc, &timeout]);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!(
            "[ERROR] {}: disk nearly full\n\t\t\t\t=> err 1: ENOSPC\n\t\t\t\t=> err 2: timeout\n",
            format_timestamp(clock())
        )
    );
}

#[test]
fn console_block_is_colored_with_trailing_blank_line() {
    let console = MemoryWriter::new();
    let logger = LeveledLogger::new()
        .with_file_threshold(Threshold::Nothing)
        .with_console_writer(console.clone())
        .with_clock(clock);

    logger.important("deployed", &[]);

    assert_eq!(
        console.contents(),
        "\x1b[32m[IMPORTANT] 05/01/2024 03:07:09.005: deployed\n\x1b[0m\n"
    );
}

#[test]
fn disabled_logger_is_silent_until_enabled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs.txt");
    let console = MemoryWriter::new();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let seen = hits.clone();

    let mut logger = LeveledLogger::new()
        .with_log_file(&path)
        .with_console_writer(console.clone())
        .with_callback(Level::ShouldntHappen, move |_, message, _| {
            seen.lock().push(message.to_string())
        });

    logger.disable();
    logger.shouldnt_happen("first", &[]);
    assert!(console.contents().is_empty());
    assert!(!path.exists());
    assert!(hits.lock().is_empty());

    logger.enable();
    logger.shouldnt_happen("second", &[]);
    assert!(console.contents().contains("second"));
    assert!(fs::read_to_string(&path).unwrap().contains("second"));
    assert_eq!(*hits.lock(), vec!["second".to_string()]);
}

#[test]
fn configured_from_yaml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    let log_path = dir.path().join("svc.log");
    fs::write(
        &config_path,
        format!(
            "console_threshold: nothing\nfile_threshold: important\nlog_file: {}\n",
            log_path.display()
        ),
    )
    .unwrap();

    let config = LoggerConfig::load(&config_path).unwrap();
    let console = MemoryWriter::new();
    let logger: SharedLogger = Arc::new(
        LeveledLogger::from_config(&config).with_console_writer(console.clone()),
    );

    tierlog_core::log_info!(logger, "{} jobs queued", 3);
    tierlog_core::log_important!(logger, "{} jobs done", 3);

    assert!(console.contents().is_empty());
    let file = fs::read_to_string(&log_path).unwrap();
    assert!(!file.contains("queued"));
    assert!(file.contains("[IMPORTANT]"));
    assert!(file.contains("3 jobs done"));
}
