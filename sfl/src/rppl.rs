use std::path::Path;

use sfl_core::compile;

use crate::{cli::print_error, repl::{read_input, Input}};

/// Read Parse Print Loop.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let line = match read_input(&stdin)? {
			Input::Exit => return Ok(()),
			Input::Line(line) => line,
		};

		match compile(Path::new("<rppl>"), &line) {
			Ok(ast) => {
				println!("{ast}");
				print!("{}", ast.tree_string());
			},
			Err(err) => print_error(&err),
		}
	}
}
