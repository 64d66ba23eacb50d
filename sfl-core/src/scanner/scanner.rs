use super::error::{LexError, LexErrorType};
use super::token::{str_to_keyword, Token, TokenKind};
use crate::utils::prelude::SrcSpan;

pub type LexResult = std::result::Result<Token, LexError>;

/// Characters that may continue a word; a word may not start with a digit.
pub fn is_word_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, '_' | '?' | '!')
}

fn is_whitespace(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[derive(Debug)]
pub struct Scanner<T: Iterator<Item = char>> {
	position: u32,
	line: u32,
	col: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
	failed: bool,
}

impl<T: Iterator<Item = char>> Scanner<T> {
	pub fn new(mut input: T) -> Self {
		let ch = input.next();
		let next_ch = input.next();

		Self {
			position: 0,
			line: 1,
			col: 1,
			ch,
			next_ch,
			input,
			failed: false,
		}
	}

	/// Next token, `None` once the input is exhausted or after the first error.
	pub fn next_token(&mut self) -> Option<LexResult> {
		if self.failed {
			return None;
		}

		self.skip_trivia();

		let ch = self.ch?;

		let result = match ch {
			c if is_word_char(c) && !c.is_ascii_digit() => Ok(self.lex_word()),
			c if c.is_ascii_digit() || c == '.' => self.lex_number(),
			'*' if self.next_ch == Some('*') => Ok(self.eat_chars(2, TokenKind::Power)),
			'=' if self.next_ch == Some('=') => Ok(self.eat_chars(2, TokenKind::Equal)),
			'+' => Ok(self.eat_chars(1, TokenKind::Plus)),
			'-' => Ok(self.eat_chars(1, TokenKind::Minus)),
			'*' => Ok(self.eat_chars(1, TokenKind::Star)),
			'/' => Ok(self.eat_chars(1, TokenKind::Slash)),
			'(' => Ok(self.eat_chars(1, TokenKind::LParen)),
			')' => Ok(self.eat_chars(1, TokenKind::RParen)),
			'=' => Ok(self.eat_chars(1, TokenKind::Assign)),
			';' => Ok(self.eat_chars(1, TokenKind::Semicolon)),
			':' => Ok(self.eat_chars(1, TokenKind::Colon)),
			',' => Ok(self.eat_chars(1, TokenKind::Comma)),
			'"' => self.lex_string(),
			c => {
				let start = self.position as usize;
				Err(self.error_at(
					LexErrorType::UnexpectedToken { tok: c },
					(self.line, self.col),
					SrcSpan::from(start, start + c.len_utf8())
				))
			}
		};

		if result.is_err() {
			self.failed = true;
		}

		Some(result)
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		if let Some(c) = ch {
			self.position += c.len_utf8() as u32;

			if c == '\n' {
				self.line += 1;
				self.col = 1;
			} else {
				self.col += 1;
			}
		}

		self.ch = self.next_ch;
		self.next_ch = self.input.next();

		ch
	}

	fn skip_trivia(&mut self) {
		loop {
			match self.ch {
				Some(c) if is_whitespace(c) => {
					self.next_char();
				},
				Some('#') => self.skip_comment(),
				_ => break
			}
		}
	}

	// Runs through the terminating newline, or to the end of input.
	fn skip_comment(&mut self) {
		while let Some(c) = self.next_char() {
			if c == '\n' {
				break;
			}
		}
	}

	fn eat_chars(&mut self, count: usize, kind: TokenKind) -> Token {
		let (line, col, start) = (self.line, self.col, self.position);

		for _ in 0..count {
			self.next_char();
		}

		self.token(kind.as_literal(), (line, col), kind, start)
	}

	fn lex_word(&mut self) -> Token {
		let (line, col, start) = (self.line, self.col, self.position);
		let mut word = String::new();

		while let Some(ch) = self.ch {
			if !is_word_char(ch) {
				break;
			}
			word.push(ch);
			self.next_char();
		}

		let kind = str_to_keyword(&word).unwrap_or(TokenKind::Identifier);

		self.token(word, (line, col), kind, start)
	}

	fn lex_number(&mut self) -> LexResult {
		let (line, col, start) = (self.line, self.col, self.position);
		let mut value = String::new();
		let mut has_period = false;

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => {
					value.push(ch);
					self.next_char();
				},
				Some('.') => {
					self.next_char();

					if has_period {
						return Err(self.error_at(
							LexErrorType::MultipleDecimalPoints,
							(line, col),
							SrcSpan { start, end: self.position }
						));
					}

					has_period = true;
					value.push('.');
				},
				_ => break
			}
		}

		let span = SrcSpan { start, end: self.position };

		if value == "." {
			return Err(self.error_at(LexErrorType::LonePeriod, (line, col), span));
		}

		Ok(self.token(value, (line, col), TokenKind::Number, start))
	}

	fn lex_string(&mut self) -> LexResult {
		let (line, col, start) = (self.line, self.col, self.position);
		let mut value = String::new();

		self.next_char(); // opening quote

		loop {
			match self.next_char() {
				Some('"') => break,
				Some('\\') => match self.next_char() {
					Some('t') => value.push('\t'),
					Some('n') => value.push('\n'),
					Some(escaped) => value.push(escaped),
					None => return Err(self.unterminated(line, col, start)),
				},
				Some(ch) => value.push(ch),
				None => return Err(self.unterminated(line, col, start)),
			}
		}

		Ok(self.token(value, (line, col), TokenKind::String, start))
	}

	// Token from `start` up to the cursor, which sits just past its last character.
	fn token(&self, text: impl Into<String>, (line, col): (u32, u32), kind: TokenKind, start: u32) -> Token {
		Token::new(text, line, col, kind, SrcSpan { start, end: self.position })
			.ending_at(self.line, self.col)
	}

	fn unterminated(&self, line: u32, col: u32, start: u32) -> LexError {
		self.error_at(
			LexErrorType::UnterminatedString,
			(line, col),
			SrcSpan { start, end: self.position }
		)
	}

	fn error_at(&self, error: LexErrorType, (line, col): (u32, u32), span: SrcSpan) -> LexError {
		LexError { error, line, col, span }
	}
}

impl<T: Iterator<Item = char>> Iterator for Scanner<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_token()
	}
}

/// Scans the whole of `src`, stopping at the first malformed token.
pub fn scan(src: &str) -> Result<Vec<Token>, LexError> {
	let tokens = Scanner::new(src.chars()).collect::<Result<Vec<Token>, LexError>>()?;

	log::debug!("scanned {} tokens from {} bytes", tokens.len(), src.len());

	Ok(tokens)
}
