use std::{io::Write, str::FromStr};

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::cli::stderr_buffer_writer;

/// Writes log records to stderr with a coloured level prefix.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let colour = match record.level() {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Cyan,
            Level::Trace => Color::Blue,
        };

        let buffer_writer = stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();

        let _ = buffer
            .set_color(ColorSpec::new().set_bold(true).set_fg(Some(colour)))
            .and_then(|_| write!(buffer, "{: >5}", record.level()))
            .and_then(|_| buffer.reset())
            .and_then(|_| writeln!(buffer, " [{}] {}", record.target(), record.args()))
            .and_then(|_| buffer_writer.print(&buffer));
    }

    fn flush(&self) {}
}

/// Level from `-v` repetitions, overridden by `SFL_LOG` when it holds a valid
/// level name.
pub fn level(verbosity: u8) -> LevelFilter {
    if let Some(level) = std::env::var("SFL_LOG")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
    {
        return level;
    }

    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
