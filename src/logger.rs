//! Line logger for the interactive binary.
//!
//! Errors go to stderr, everything else to stdout, each line prefixed with
//! its level: `$ERROR: `, `$WARNING: `, `$INFO: `, `$DEBUG: `.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;

/// Environment variable holding the maximum level to print.
pub const LEVEL_VAR: &str = "PARAKEET_LOG";

#[derive(Debug)]
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        StdoutLogger { level }
    }
}

fn prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "$ERROR: ",
        Level::Warn => "$WARNING: ",
        Level::Info => "$INFO: ",
        Level::Debug | Level::Trace => "$DEBUG: ",
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{}{}", prefix(record.level()), record.args());
        // A closed pipe is not worth aborting over.
        if record.level() == Level::Error {
            let _ = writeln!(std::io::stderr(), "{line}");
        } else {
            let _ = writeln!(std::io::stdout(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Level named by `value`, defaulting to `Info` when absent or unknown.
#[must_use]
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

static LOGGER: OnceCell<StdoutLogger> = OnceCell::new();

/// Install the logger with the level from [`LEVEL_VAR`].
pub fn init() -> Result<(), SetLoggerError> {
    let level = parse_level(std::env::var(LEVEL_VAR).ok().as_deref());
    let logger = LOGGER.get_or_init(|| StdoutLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
