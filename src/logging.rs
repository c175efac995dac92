use log::{LevelFilter, Metadata, Record};

use crate::error::ShellError;

static LOGGER: StderrLogger = StderrLogger;

/// Writes log records to stderr so they never mix with listing output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn level_for(quiet: bool, debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Off
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. Call once, before the shell starts.
pub fn init(level: LevelFilter) -> Result<(), ShellError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
