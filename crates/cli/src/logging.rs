//! A minimal stderr backend for the `log` facade.
//!
//! The level comes from the `DECAY_LOG` environment variable and defaults to
//! `warn`. Records never go to stdout, which carries only the result.

use std::{
    env,
    io::{self, Write},
    str::FromStr,
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LEVEL_VAR: &str = "DECAY_LOG";

/// Level used when `DECAY_LOG` is unset or unrecognized.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(
            io::stderr().lock(),
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parses a level name such as `debug` or `OFF`.
#[must_use]
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the stderr logger with the level from `DECAY_LOG`.
///
/// # Errors
///
/// Returns an error if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from(env::var(LEVEL_VAR).ok().as_deref());
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
