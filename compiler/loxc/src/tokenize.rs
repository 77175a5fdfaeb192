//! The `tokenize` command.

use std::io::{self, Write};

use lox_diagnostic::DiagnosticEmitter;

use crate::{TokenizeOptions, EXIT_LEX_ERROR, EXIT_SUCCESS};

/// Tokenize `source`, report its errors, and print its tokens.
///
/// Token lines are written byte for byte, so lexemes and string literals
/// from non-UTF-8 source come out unchanged.
///
/// Every diagnostic is emitted (and the emitter flushed) before the first
/// token line is written. Returns the process exit status: `65` if the scan
/// recorded any error, `0` otherwise.
pub fn run_tokenize(
    source: &[u8],
    options: TokenizeOptions,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> io::Result<i32> {
    let output = lox_lexer::tokenize(source);

    let diagnostics: Vec<_> = output.diagnostics().collect();
    emitter.emit_all(&diagnostics);
    emitter.flush();

    if !options.quiet {
        for token in &output.tokens {
            token.write_line(out)?;
        }
        out.flush()?;
    }

    Ok(if output.had_error() {
        EXIT_LEX_ERROR
    } else {
        EXIT_SUCCESS
    })
}
