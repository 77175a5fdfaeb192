//! Lox CLI driver.
//!
//! Everything the `lox` binary does lives here so it can be tested without
//! spawning a process:
//!
//! ```text
//! args ──► Command::from_args ──► read_source ──► run_tokenize ──► exit code
//! ```
//!
//! Diagnostics go through a [`DiagnosticEmitter`](lox_diagnostic::DiagnosticEmitter)
//! before any token is written, so stderr always carries every error even if
//! stdout is closed early.

mod command;
mod load;
mod tokenize;

pub use command::{Command, CommandError, TokenizeOptions};
pub use load::{read_source, LoadError};
pub use tokenize::run_tokenize;

use std::sync::Once;

/// Exit status of a clean run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for usage errors and unreadable input.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when the source contained lexical errors (`EX_DATAERR`).
pub const EXIT_LEX_ERROR: i32 = 65;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lox_lexer=debug lox tokenize file.lox`. Logs go to stderr so
/// the token stream on stdout is never interleaved with them. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
