use thiserror::Error;

use crate::scanner::prelude::{Token, TokenKind};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("unexpected token, expected {}", .expected.join(" or "))]
    UnexpectedToken { expected: Vec<String> },
    #[error("`end` without a matching `begin`")]
    UnmatchedEnd,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("{feature} not implemented")]
    NotImplemented { feature: &'static str },
    #[error("nesting deeper than {limit} levels")]
    TooDeep { limit: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error}: found {} at {}:{}", .token.describe(), .token.line, .token.column)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub token: Token,
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedToken { expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", self.token.describe()))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnmatchedEnd => ("Unexpected `end` keyword", vec![
                "There is no open `begin` block to close".to_string()
            ]),
            ParseErrorType::UnexpectedEof => ("Unexpected end of input", vec![]),
            ParseErrorType::NotImplemented { feature } => ("Not implemented", vec![
                format!("{feature} are not supported yet")
            ]),
            ParseErrorType::TooDeep { limit } => ("Nesting too deep", vec![
                format!("Expressions and blocks may nest at most {limit} levels")
            ]),
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, token: &Token) -> Result<T, ParseError> {
    Err(ParseError { error, token: token.clone() })
}

pub(crate) fn expected_token(kind: TokenKind) -> String {
    match kind {
        TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::Eof => {
            format!("{kind}")
        },
        kind => format!("`{}`", kind.as_literal()),
    }
}
