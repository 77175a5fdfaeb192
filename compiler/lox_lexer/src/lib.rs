//! Tokenizer for Lox.
//!
//! [`tokenize`] turns source bytes into a flat token list terminated by a
//! single `EOF` token, collecting every lexical error on the way instead of
//! stopping at the first one.
//!
//! # Pipeline
//!
//! At each position the scanner tries, in order: newline, whitespace,
//! comment, string, number, identifier/keyword, operator. The first
//! recognizer that consumes input wins. Operators are found by longest match
//! in a shared trie; keywords are resolved after the full identifier has
//! been scanned. Anything nothing accepts is reported as an unexpected
//! character and skipped.

mod driver;
mod keywords;
mod lex_error;
mod matchers;
mod operators;

pub use lex_error::{LexError, NumberError};
pub use operators::{operator_trie, operators};

use lox_diagnostic::Diagnostic;
use lox_ir::Token;

use crate::matchers::ScanState;

/// Result of scanning one source buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput<'src> {
    /// Tokens in source order, always ending with exactly one `EOF`.
    pub tokens: Vec<Token<'src>>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
    had_error: bool,
}

impl LexOutput<'_> {
    /// Whether any lexical error was recorded.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The errors as renderable diagnostics, in source order.
    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(LexError::to_diagnostic)
    }
}

/// Tokenize `source`.
///
/// Accepts any byte buffer (`&str`, `&[u8]`, `Vec<u8>`); the source does not
/// have to be valid UTF-8. Never fails: errors are collected in
/// [`LexOutput::errors`] and scanning resumes after the offending span.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.as_ref().len()))]
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> LexOutput<'_> {
    let mut state = ScanState::new(source.as_ref(), operator_trie());
    driver::run(&mut state);

    let ScanState {
        cursor,
        mut tokens,
        errors,
        ..
    } = state;
    tokens.push(Token::eof(cursor.line()));

    tracing::debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        lines = cursor.line(),
        "tokenized"
    );

    LexOutput {
        tokens,
        errors,
        had_error: cursor.had_error(),
    }
}

#[cfg(test)]
mod tests;
