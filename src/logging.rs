//! Minimal stderr logger behind the `log` facade.
//!
//! Level comes from the `SCRY_LOG` environment variable (`error`, `warn`,
//! `info`, `debug`, `trace`); unset or unparsable values mean `warn`.

use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable consulted for the log level.
pub const LOG_LEVEL_VAR: &str = "SCRY_LOG";

struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn level_from_env() -> Level {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

/// Install the stderr logger at the environment-selected level.
pub fn init() -> Result<(), SetLoggerError> {
    init_at(level_from_env())
}

/// Install the stderr logger at an explicit level. Later calls are no-ops.
pub fn init_at(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }
    Ok(())
}
