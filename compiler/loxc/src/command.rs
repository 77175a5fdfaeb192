//! Command-line parsing.
//!
//! The argument list is small enough to match by hand:
//!
//! ```text
//! lox tokenize <file> [--quiet]
//! lox help | --help | -h
//! lox version | --version | -V
//! ```

use std::path::PathBuf;

/// Output toggles for `tokenize`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TokenizeOptions {
    /// Suppress token lines. Diagnostics and the exit code are unchanged.
    pub quiet: bool,
}

/// A parsed invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Tokenize {
        path: PathBuf,
        options: TokenizeOptions,
    },
    Help,
    Version,
}

/// Why the arguments could not be turned into a [`Command`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("missing command")]
    MissingCommand,
    #[error("missing file path")]
    MissingPath,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl Command {
    /// Parse `args` as returned by `std::env::args`, program name first.
    pub fn from_args(args: &[String]) -> Result<Command, CommandError> {
        let Some(command) = args.get(1) else {
            return Err(CommandError::MissingCommand);
        };

        match command.as_str() {
            "tokenize" => parse_tokenize(&args[2..]),
            "help" | "--help" | "-h" => Ok(Command::Help),
            "version" | "--version" | "-V" => Ok(Command::Version),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_tokenize(rest: &[String]) -> Result<Command, CommandError> {
    let mut path = None;
    let mut options = TokenizeOptions::default();

    for arg in rest {
        if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CommandError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(CommandError::MissingPath)?;
    Ok(Command::Tokenize { path, options })
}
