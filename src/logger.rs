//! Stderr logger with colored level prefixes.
//!
//! Library crates log through the `log` facade; this is the sink the binary
//! installs. Debug and trace records only show with `--verbose`.

use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Stream};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Install the logger. Safe to call more than once; later calls only
/// update the verbosity.
pub fn init(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
    // Err means a logger is already installed, which is fine.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose { LevelFilter::Trace } else { LevelFilter::Info });
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info || is_verbose()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = stderr().lock();
        writeln!(out, "{} {}", prefix(record.level()), record.args()).ok();
    }

    fn flush(&self) {
        stderr().flush().ok();
    }
}

fn prefix(level: Level) -> String {
    let tag = format!("[{}]", level.as_str().to_ascii_lowercase());
    let styled = tag.if_supports_color(Stream::Stderr, |t| match level {
        Level::Error => t.bright_red().bold().to_string(),
        Level::Warn => t.bright_yellow().bold().to_string(),
        Level::Info => t.bright_green().bold().to_string(),
        Level::Debug => t.bright_blue().to_string(),
        Level::Trace => t.dimmed().to_string(),
    });
    styled.to_string()
}
