//! Token types for the Lox tokenizer.

mod kind;

pub use kind::TokenKind;

use std::fmt;
use std::io::{self, Write};

use crate::Literal;

/// One classified lexeme.
///
/// `lexeme` is the exact source bytes the token was scanned from (empty for
/// [`TokenKind::Eof`]). Source is not required to be UTF-8, so lexemes are
/// byte slices. `line` is 1-based and counts the `\n` bytes before the
/// token's first byte.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src [u8],
    pub literal: Literal<'src>,
    pub line: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src [u8], literal: Literal<'src>, line: u32) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// Create a token that carries no decoded value.
    #[inline]
    pub fn bare(kind: TokenKind, lexeme: &'src [u8], line: u32) -> Self {
        Token::new(kind, lexeme, Literal::None, line)
    }

    /// The end-of-input sentinel appended after every scan.
    pub fn eof(line: u32) -> Self {
        Token::bare(TokenKind::Eof, b"", line)
    }

    /// Write the output line `<KIND> <lexeme> <literal>\n`.
    ///
    /// Lexeme and string literal bytes are copied through unchanged, so the
    /// line reproduces the source exactly even when it is not UTF-8.
    pub fn write_line(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.kind.name().as_bytes())?;
        out.write_all(b" ")?;
        out.write_all(self.lexeme)?;
        out.write_all(b" ")?;
        self.literal.write_to(out)?;
        out.write_all(b"\n")
    }
}

/// Renders the output line format: `<KIND> <lexeme> <literal>`.
///
/// The EOF token renders as `EOF  null` because its lexeme is empty. Invalid
/// UTF-8 is shown as `U+FFFD`; use [`Token::write_line`] for exact bytes.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind,
            String::from_utf8_lossy(self.lexeme),
            self.literal
        )
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} @ line {}",
            self.kind,
            String::from_utf8_lossy(self.lexeme),
            self.literal,
            self.line
        )
    }
}

#[cfg(test)]
mod tests;
