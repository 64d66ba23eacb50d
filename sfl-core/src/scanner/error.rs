use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorType {
    #[error("unexpected token `{tok}`")]
    UnexpectedToken { tok: char },
    #[error("unexpected token `.`")]
    LonePeriod,
    #[error("two decimals in one number")]
    MultipleDecimalPoints,
    #[error("string did not terminate")]
    UnterminatedString,
    #[error("source is not valid UTF-8")]
    InvalidUtf8,
}

/// First malformed piece of source text. `line`/`col` point at the start of the
/// failing token, or at the offending character when it starts no token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{error} at {line}:{col}")]
pub struct LexError {
    pub error: LexErrorType,
    pub line: u32,
    pub col: u32,
    pub span: SrcSpan,
}

impl LexError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexErrorType::UnexpectedToken { tok } => {
                ("Unexpected token", vec![format!("`{}` cannot start a token", tok.escape_default())])
            },
            LexErrorType::LonePeriod => {
                ("Unexpected token", vec!["A number needs at least one digit".to_string()])
            },
            LexErrorType::MultipleDecimalPoints => {
                ("Two decimals in one number", vec![])
            },
            LexErrorType::UnterminatedString => {
                ("String did not terminate", vec!["Add a closing `\"`".to_string()])
            },
            LexErrorType::InvalidUtf8 => {
                ("Source is not valid UTF-8", vec![])
            }
        }
    }
}
