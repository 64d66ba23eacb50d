use sfl_core::scanner::prelude::Scanner;

use crate::repl::{read_input, Input};

/// Read Lex Print Loop.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let line = match read_input(&stdin)? {
			Input::Exit => return Ok(()),
			Input::Line(line) => line,
		};

		for result in Scanner::new(line.chars()) {
			match result {
				Ok(token) => println!("{:?} {} @{}:{}", token.kind, token, token.line, token.column),
				Err(err) => {
					let (message, messages) = err.details();
					println!("[at {}:{}] Lexical error: {}", err.line, err.col, message);
					if !messages.is_empty() {
						println!("{}", messages.join("\n"));
					}
				}
			}
		}
	}
}
