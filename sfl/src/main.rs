mod cli;
mod logger;
mod repl;
mod rlpl;
mod rppl;

use std::{path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use cli::{print_environment, print_error, print_failed, print_finished, print_running};
use sfl_core::{
    compile, read_source, run_source,
    scanner::prelude::scan,
    utils::prelude::Error
};

#[derive(Parser)]
#[command(version, about = "Scanner, parser and interpreter for SFL programs")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); SFL_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Scans, parses and runs a program
    Run {
        /// Path of source file; read from stdin when omitted
        path: Option<PathBuf>,
        /// Line that ends a program read from stdin
        #[arg(long, default_value = "EOF")]
        sentinel: String,
        /// Print the final variable bindings to stderr
        #[arg(long, default_value_t = false)]
        print_env: bool,
        /// Do not print status lines
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Prints the tokens of a source file
    Scan {
        /// Path of source file
        path: PathBuf,
    },
    /// Prints the syntax tree of a source file
    Parse {
        /// Path of source file
        path: PathBuf,
        /// Print an indented tree instead of the bracket form
        #[arg(long, default_value_t = false)]
        tree: bool,
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level(cli.verbose));

    let result = match cli.command {
        Command::Run { path, sentinel, print_env, quiet } => run(path, &sentinel, print_env, quiet),
        Command::Scan { path } => scan_file(&path),
        Command::Parse { path, tree } => parse_file(&path, tree),
        Command::Repl => repl::start().map_err(Error::from),
        Command::Rlpl => rlpl::start().map_err(Error::from),
        Command::Rppl => rppl::start().map_err(Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn load(path: Option<&Path>, sentinel: &str) -> Result<(PathBuf, String), Error> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let src = read_source(path, std::io::BufReader::new(file), None)?;

            Ok((path.to_path_buf(), src))
        },
        None => {
            let path = PathBuf::from("<stdin>");
            let src = read_source(&path, std::io::stdin().lock(), Some(sentinel))?;

            Ok((path, src))
        }
    }
}

fn run(path: Option<PathBuf>, sentinel: &str, print_env: bool, quiet: bool) -> Result<(), Error> {
    let (path, src) = load(path.as_deref(), sentinel)?;

    if !quiet {
        print_running(&path.display().to_string());
    }
    let start = Instant::now();

    let mut stdout = std::io::stdout();
    let result = run_source(&path, &src, &mut stdout);

    if !quiet {
        match &result {
            Ok(_) => print_finished(start.elapsed()),
            Err(_) => print_failed(start.elapsed()),
        }
    }

    let env = result?;
    log::info!("{} variables bound at exit", env.len());

    if print_env {
        print_environment(&env);
    }

    Ok(())
}

fn scan_file(path: &Path) -> Result<(), Error> {
    let (path, src) = load(Some(path), "")?;

    let tokens = scan(&src).map_err(|error| Error::Lex { path, src: src.clone(), error })?;

    for token in tokens {
        println!("{:<12} {:<16} {}:{}", format!("{:?}", token.kind), token.to_string(), token.line, token.column);
    }

    Ok(())
}

fn parse_file(path: &Path, tree: bool) -> Result<(), Error> {
    let (path, src) = load(Some(path), "")?;
    let ast = compile(&path, &src)?;

    if tree {
        print!("{}", ast.tree_string());
    } else {
        println!("{ast}");
    }

    Ok(())
}
