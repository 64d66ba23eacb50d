use std::{
    io::{IsTerminal, Write},
    time::Duration,
};
use sfl_core::{environment::prelude::Environment, utils::prelude::Error};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub(crate) fn print_running(text: &str) {
    print_colourful_prefix("Running", Color::Magenta, text)
}

pub(crate) fn print_finished(duration: Duration) {
    print_colourful_prefix("Finished", Color::Green, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_failed(duration: Duration) {
    print_colourful_prefix("Failed", Color::Red, &format!("after {}", seconds(duration)))
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    let _ = buffer
        .set_color(ColorSpec::new().set_intense(true).set_bold(true).set_fg(Some(color)))
        .and_then(|_| write!(buffer, "{prefix: >11}"))
        .and_then(|_| buffer.reset())
        .and_then(|_| writeln!(buffer, " {text}"))
        .and_then(|_| buffer_writer.print(&buffer));
}

/// Renders `err` with source snippets to stderr.
pub fn print_error(err: &Error) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    err.pretty(&mut buffer);

    if let Err(io_err) = buffer_writer.print(&buffer) {
        log::error!("could not write diagnostic to stderr: {io_err}");
    }
}

pub fn print_environment(env: &Environment) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    for (name, value) in env.sorted() {
        let _ = buffer
            .set_color(ColorSpec::new().set_bold(true))
            .and_then(|_| write!(buffer, "{name: >11}"))
            .and_then(|_| buffer.reset())
            .and_then(|_| writeln!(buffer, " = {value:?}"));
    }

    let _ = buffer_writer.print(&buffer);
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    std::env::var("FORCE_COLOR").is_ok_and(|force| !force.is_empty())
}

pub(crate) fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
