//! Lox CLI
//!
//! Tokenizes Lox source files.

use std::io::{self, BufWriter};
use std::path::Path;

use lox_diagnostic::TerminalEmitter;
use loxc::{
    init_tracing, read_source, run_tokenize, Command, CommandError, TokenizeOptions,
    EXIT_FAILURE,
};

const TOKENIZE_USAGE: &str = "Usage: lox tokenize <file.lox> [--quiet]";

const USAGE: &str = "\
Lox tokenizer

Usage: lox <command> [options]

Commands:
  tokenize <file.lox>  Print the token stream of a file
  help                 Show this help message
  version              Show version information

Tokenize options:
  --quiet, -q          Only report errors; do not print tokens

Exit status:
  0   no lexical errors
  65  the file contained lexical errors
  1   usage error or unreadable file

Examples:
  lox tokenize main.lox
  lox tokenize main.lox --quiet   # Check a file for lexical errors
  RUST_LOG=lox_lexer=debug lox tokenize main.lox
";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(CommandError::MissingCommand | CommandError::MissingPath) => {
            eprintln!("{TOKENIZE_USAGE}");
            std::process::exit(EXIT_FAILURE);
        }
        Err(err @ CommandError::UnknownCommand(_)) => {
            eprintln!("{err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(EXIT_FAILURE);
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{TOKENIZE_USAGE}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    match command {
        Command::Tokenize { path, options } => {
            std::process::exit(tokenize_file(&path, options));
        }
        Command::Help => {
            print!("{USAGE}");
        }
        Command::Version => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
        }
    }
}

fn tokenize_file(path: &Path, options: TokenizeOptions) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return EXIT_FAILURE;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut emitter = TerminalEmitter::stderr();
    match run_tokenize(&source, options, &mut out, &mut emitter) {
        Ok(code) => code,
        // A closed pipe on stdout is not worth a message.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => EXIT_FAILURE,
        Err(err) => {
            eprintln!("error: writing tokens: {err}");
            EXIT_FAILURE
        }
    }
}
