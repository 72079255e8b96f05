// A tiny stderr logger for the `log` crate. Filtering is left entirely to
// `log::set_max_level`, which main sets from RUST_LOG via `max_level`.

use log::{self, LevelFilter, Log};

/// Logs every record it is given to stderr.
#[derive(Debug)]
pub struct Logger(());

const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Install this logger as the global logger.
    pub fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        // Source locations only matter when chasing something down, so
        // they're only shown at the noisier levels.
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) if record.level() >= log::Level::Debug => {
                format!("|{}:{}", file, line)
            }
            _ => String::new(),
        };
        eprintln!(
            "{}|{}{}: {}",
            record.level(),
            record.target(),
            location,
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Parse a RUST_LOG value into the maximum level to emit.
///
/// Only bare level names are accepted, in any case. Per-target directives
/// aren't supported since every record goes to the same place anyway. An
/// empty value turns logging off.
pub fn max_level(rustlog: &str) -> anyhow::Result<LevelFilter> {
    let rustlog = rustlog.trim();
    if rustlog.is_empty() {
        return Ok(LevelFilter::Off);
    }
    rustlog.parse().map_err(|_| {
        anyhow::anyhow!(
            "unrecognized RUST_LOG level '{}' (expected one of: off, \
             error, warn, info, debug, trace)",
            rustlog,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_off() {
        assert_eq!(LevelFilter::Off, max_level("").unwrap());
        assert_eq!(LevelFilter::Off, max_level("off").unwrap());
    }

    #[test]
    fn level_names() {
        assert_eq!(LevelFilter::Debug, max_level("debug").unwrap());
        assert_eq!(LevelFilter::Trace, max_level("TRACE").unwrap());
        assert_eq!(LevelFilter::Warn, max_level(" warn ").unwrap());
    }

    #[test]
    fn directives_are_rejected() {
        let err = max_level("regexbench=debug").unwrap_err();
        assert!(err.to_string().contains("regexbench=debug"));
    }
}
