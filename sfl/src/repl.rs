use std::{io::Write, path::Path};

use sfl_core::{environment::prelude::Environment, run_in};

use crate::cli::print_error;

pub(crate) const PROMPT: &str = ">> ";

pub(crate) enum Input {
	Line(String),
	Exit,
}

/// Prompts and reads one line; `.exit` or end of input ends the session.
pub(crate) fn read_input(stdin: &std::io::Stdin) -> std::io::Result<Input> {
	let mut input = String::new();

	print!("{PROMPT}");
	std::io::stdout().flush()?;

	if stdin.read_line(&mut input)? == 0 {
		println!();
		return Ok(Input::Exit);
	}

	let input = input.trim_end_matches(['\n', '\r']);

	Ok(match input {
		".exit" => Input::Exit,
		_ => Input::Line(input.to_string()),
	})
}

/// Read Eval Print Loop over one environment that lives for the session.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let mut env = Environment::new();

	loop {
		let line = match read_input(&stdin)? {
			Input::Exit => return Ok(()),
			Input::Line(line) if line.trim().is_empty() => continue,
			Input::Line(line) => line,
		};

		let mut stdout = std::io::stdout();

		match run_in(Path::new("<repl>"), &line, &mut env, &mut stdout) {
			Ok(()) => println!(),
			Err(err) => print_error(&err),
		}
	}
}
