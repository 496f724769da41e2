#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stderr, so `auto` output on stdout stays valid JSON
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name, falling back to `default` when absent or invalid.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from the `FLEET_LOG` environment variable.
/// Uses `default` if the variable is not set or invalid.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var("FLEET_LOG").ok().as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(level_from(Some("debug"), LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(level_from(Some("TRACE"), LevelFilter::Warn), LevelFilter::Trace);
        assert_eq!(level_from(Some("loud"), LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(level_from(None, LevelFilter::Info), LevelFilter::Info);
    }
}
