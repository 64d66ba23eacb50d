use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,

    // Literals
    Number,
    String,

    // Operators
    Plus, // +
    Minus, // -
    Star, // *
    Power, // **
    Slash, // /
    LParen, // (
    RParen, // )
    Comma, // ,
    Assign, // =
    Equal, // ==
    Semicolon, // ;
    Colon, // :
    Period, // .

    // Keywords
    Function, // function
    If, // if
    While, // while
    Begin, // begin
    End, // end

    Eof,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Begin
            | TokenKind::End
        )
    }

    /// Source spelling of fixed tokens, or a description for the open classes.
    pub fn as_literal(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",

            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Power => "**",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Period => ".",

            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::While => "while",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",

            TokenKind::Eof => "end of input",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

pub fn str_to_keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "function" => TokenKind::Function,
        "if" => TokenKind::If,
        "while" => TokenKind::While,
        "begin" => TokenKind::Begin,
        "end" => TokenKind::End,
        _ => return None
    })
}

/// A classified piece of source text. `line` and `column` are 1-based and point
/// at the first character of the token, `end_line` and `end_column` just past
/// its last one; for string literals `text` holds the decoded contents without
/// quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub kind: TokenKind,
    pub span: SrcSpan,
}

impl Token {
    /// Token ending on its starting line, one column per character of `text`.
    pub fn new(text: impl Into<String>, line: u32, column: u32, kind: TokenKind, span: SrcSpan) -> Self {
        let text = text.into();
        let end_column = column + text.chars().count() as u32;

        Self {
            text,
            line,
            column,
            end_line: line,
            end_column,
            kind,
            span,
        }
    }

    pub fn ending_at(mut self, line: u32, column: u32) -> Self {
        self.end_line = line;
        self.end_column = column;
        self
    }

    pub fn eof(line: u32, column: u32, at: u32) -> Self {
        Self::new("", line, column, TokenKind::Eof, SrcSpan { start: at, end: at })
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// How the token reads in a diagnostic: "an identifier `foo`", "`;`", ...
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("the identifier `{}`", self.text),
            TokenKind::Number => format!("the number `{}`", self.text),
            TokenKind::String => format!("the string {:?}", self.text),
            TokenKind::Eof => "the end of input".to_string(),
            kind if kind.is_keyword() => format!("the keyword `{}`", kind.as_literal()),
            kind => format!("`{}`", kind.as_literal()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{:?}", self.text),
            TokenKind::Eof => write!(f, "<eof>"),
            _ => write!(f, "{}", self.text),
        }
    }
}
