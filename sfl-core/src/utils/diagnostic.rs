use std::{io, path::PathBuf};

pub use codespan_reporting::diagnostic::{LabelStyle, Severity};
use codespan_reporting::{diagnostic::Label as CodespanLabel, files::SimpleFiles};
use termcolor::{Color, ColorSpec, WriteColor};

use super::src_span::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

impl From<Level> for Severity {
    fn from(value: Level) -> Self {
        match value {
            Level::Error => Severity::Error,
            Level::Warning => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    pub text: Option<String>,
    pub span: SrcSpan,
}

impl Label {
    fn to_codespan_label(&self, file_id: usize, style: LabelStyle) -> CodespanLabel<usize> {
        let label = CodespanLabel::new(style, file_id, self.span.start as usize..self.span.end as usize);

        match &self.text {
            Some(text) => label.with_message(text.clone()),
            None => label,
        }
    }
}

/// Where in which source a diagnostic points.
#[derive(Debug, Clone)]
pub struct Location<'a> {
    pub src: &'a str,
    pub path: PathBuf,
    pub label: Label,
}

#[derive(Debug, Clone)]
pub struct Diagnostic<'a> {
    pub title: String,
    pub text: String,
    pub level: Level,
    pub location: Option<Location<'a>>,
}

impl<'a> Diagnostic<'a> {
    pub fn write(&self, buf: &mut impl WriteColor) -> io::Result<()> {
        match &self.location {
            Some(location) => self.write_span(location, buf)?,
            None => self.write_title(buf)?,
        }

        if !self.text.is_empty() {
            writeln!(buf, "{}", self.text)?;
        }

        Ok(())
    }

    fn write_span(&self, location: &Location, buf: &mut impl WriteColor) -> io::Result<()> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(location.path.display().to_string(), location.src);

        // codespan rejects ranges past the end of the file
        let len = location.src.len() as u32;
        let span = SrcSpan {
            start: location.label.span.start.min(len),
            end: location.label.span.end.min(len),
        };
        let label = Label { text: location.label.text.clone(), span };

        let diagnostic = codespan_reporting::diagnostic::Diagnostic::new(self.level.into())
            .with_message(&self.title)
            .with_labels(vec![label.to_codespan_label(file_id, LabelStyle::Primary)]);

        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(buf, &config, &files, &diagnostic)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }

    fn write_title(&self, buf: &mut impl WriteColor) -> io::Result<()> {
        let (kind, colour) = match self.level {
            Level::Error => ("error", Color::Red),
            Level::Warning => ("warning", Color::Yellow),
        };

        buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(colour)))?;
        write!(buf, "{kind}")?;

        buf.set_color(ColorSpec::new().set_bold(true))?;
        write!(buf, ": {}\n\n", self.title)?;

        buf.reset()
    }
}
