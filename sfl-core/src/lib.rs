pub mod scanner;
pub mod parser;
pub mod environment;
pub mod interpreter;
pub mod utils;

use std::{io::{BufRead, Write}, path::{Path, PathBuf}};

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::Environment,
    interpreter::prelude::Interpreter,
    parser::prelude::{parse, Node},
    scanner::prelude::{scan, LexError, LexErrorType},
    utils::prelude::{Error, SrcSpan}
};

/// Scans and parses `src`, keeping the source around for diagnostics.
pub fn compile(path: &Path, src: &str) -> Result<Node, Error> {
    let tokens = scan(src).map_err(|error| Error::Lex {
        path: path.to_path_buf(),
        src: src.to_string(),
        error
    })?;

    parse(tokens).map_err(|error| Error::Parse {
        path: path.to_path_buf(),
        src: src.to_string(),
        error
    })
}

/// Runs `src` against an existing environment.
pub fn run_in(
    path: &Path,
    src: &str,
    env: &mut Environment,
    out: impl Write
) -> Result<(), Error> {
    let ast = compile(path, src)?;

    Interpreter::new(out).run(&ast, env).map_err(|error| Error::Runtime {
        path: path.to_path_buf(),
        src: src.to_string(),
        error
    })
}

/// Runs `src` on a fresh environment and returns the final bindings.
pub fn run_source(path: &Path, src: &str, out: impl Write) -> Result<Environment, Error> {
    let mut env = Environment::new();
    run_in(path, src, &mut env, out)?;

    Ok(env)
}

pub fn run_file(path: PathBuf, out: impl Write) -> Result<Environment, Error> {
    let file = std::fs::File::open(&path)?;
    let src = read_source(&path, std::io::BufReader::new(file), None)?;

    run_source(&path, &src, out)
}

/// Reads program text line by line until a line equal to `sentinel` (when
/// given) or the end of input. The sentinel line itself is dropped. Input
/// that is not valid UTF-8 is reported as a lexical error.
pub fn read_source(
    path: &Path,
    mut reader: impl BufRead,
    sentinel: Option<&str>
) -> Result<String, Error> {
    let mut src = String::new();
    let mut line = String::new();
    let (mut line_no, mut col) = (1, 1);
    let is_sentinel = |line: &str| sentinel.is_some_and(|sentinel| line.trim_end_matches('\r') == sentinel);

    for ch in reader.chars() {
        let ch = match ch {
            Ok(ch) => ch,
            Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                let at = src.len() + line.len();
                src.push_str(&line);

                return Err(Error::Lex {
                    path: path.to_path_buf(),
                    src,
                    error: LexError {
                        error: LexErrorType::InvalidUtf8,
                        line: line_no,
                        col,
                        span: SrcSpan::point(at),
                    }
                });
            },
            Err(err) => return Err(err.into()),
        };

        if ch != '\n' {
            line.push(ch);
            col += 1;
            continue;
        }

        if is_sentinel(line.as_str()) {
            log::debug!("sentinel reached after {} lines", line_no - 1);
            return Ok(src);
        }

        src.push_str(&line);
        src.push('\n');
        line.clear();
        line_no += 1;
        col = 1;
    }

    if !is_sentinel(line.as_str()) {
        src.push_str(&line);
    }

    Ok(src)
}

#[cfg(test)]
mod tests;
