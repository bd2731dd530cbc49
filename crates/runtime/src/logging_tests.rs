use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
#[serial]
fn get_level_from_env_parses_cases() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some("info"), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some("garbage"), Level::Warn),
        (Some("off"), Level::Warn),
    ];

    for (value, expected) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, v) },
            None => unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) },
        }

        let lvl = get_level_from_env();
        assert_eq!(
            lvl, *expected,
            "env {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger {
            level: logger_level,
        };

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("glimpse_fs::probe")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn short_target_strips_workspace_prefix() {
    assert_eq!(short_target("glimpse_fs::record"), "fs::record");
    assert_eq!(short_target("glimpse_collection"), "collection");
    assert_eq!(short_target("trash::linux"), "trash::linux");
}

#[test]
fn format_line_contains_level_target_and_message() {
    let logger = Logger { level: Level::Info };
    let line = logger.format_line(
        Level::Info,
        "glimpse_collection::build",
        &format_args!("{} images", 3),
    );

    assert!(line.contains("INFO"), "line: {line}");
    assert!(line.contains("[collection::build]"), "line: {line}");
    assert!(line.ends_with("3 images"), "line: {line}");
}

#[test]
fn stderr_logger_does_not_panic() {
    let logger = Logger { level: Level::Info };

    for (lvl, msg) in [(Level::Debug, "debug"), (Level::Info, "info"), (Level::Error, "error")] {
        logger.log(
            &Record::builder()
                .level(lvl)
                .target("t")
                .args(format_args!("{msg}"))
                .build(),
        );
    }

    logger.flush();
}
