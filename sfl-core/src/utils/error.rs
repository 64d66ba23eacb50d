use std::path::PathBuf;

use termcolor::{Buffer, WriteColor};
use thiserror::Error;

use crate::{
    interpreter::prelude::RuntimeError,
    parser::prelude::{ParseError, ParseErrorType},
    scanner::prelude::LexError,
    utils::prelude::SrcSpan
};
use super::diagnostic::{Diagnostic, Label, Level, Location};

/// A stage failure together with the source it happened in.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to scan source code: {error}")]
    Lex {
        path: PathBuf,
        src: String,
        error: LexError
    },
    #[error("failed to parse source code: {error}")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("program failed: {error}")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed: {err}")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8_lossy(&nocolor.into_inner()).into_owned()
    }

    /// Writes every diagnostic of the error; a failing writer is ignored since
    /// there is nowhere left to report to.
    pub fn pretty(&self, buf: &mut impl WriteColor) {
        for diagnostic in self.to_diagnostics() {
            let _ = diagnostic.write(buf).and_then(|_| writeln!(buf));
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lex { path, src, error } => {
                let (label, extra) = error.details();

                vec![Diagnostic {
                    title: "Lexical error".into(),
                    text: extra.join("\n"),
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.span,
                        },
                    }),
                }]
            },
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                let span = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan::point(src.len())
                } else {
                    error.token.span
                };

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text: extra.join("\n"),
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span,
                        },
                    }),
                }]
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();

                let title = if error.is_internal() {
                    "Internal interpreter error"
                } else {
                    "Runtime error"
                };

                vec![Diagnostic {
                    title: title.into(),
                    text: std::iter::once(format!("{}", error.error))
                        .chain(extra)
                        .collect::<Vec<String>>()
                        .join("\n"),
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.token.span,
                        },
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::StdIo { err: value.kind() }
    }
}
