//! Lexer error types.
//!
//! Every variant is recoverable: the scanner records it, sets the cursor's
//! error flag and keeps going. `Display` renders the message part of the
//! diagnostic line; the line prefix is added by the emitter.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};

/// A lexical error, located by line.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A `"` with no closing quote before EOF. `line` is where the string
    /// started, not where the scan gave up.
    #[error("Unterminated string.")]
    UnterminatedString { line: u32 },

    /// A number lexeme that does not denote a representable value.
    #[error("{reason}: {lexeme}")]
    InvalidNumber {
        line: u32,
        lexeme: String,
        reason: NumberError,
    },

    /// A byte no matcher accepts. Each stray byte is reported on its own,
    /// including every byte of a multi-byte UTF-8 sequence.
    #[error("Unexpected character: {}", shown_byte(.byte))]
    UnexpectedCharacter { line: u32, byte: u8 },
}

/// Why a number lexeme was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NumberError {
    /// Overflows to infinity, or a non-zero literal that underflows to zero
    /// or a subnormal.
    #[error("Number literal out of range")]
    OutOfRange,
    /// Not parseable as a float at all.
    #[error("Invalid number format (stod failed)")]
    Malformed,
}

/// Printable ASCII as itself, anything else as `\xNN`.
struct ShownByte(u8);

fn shown_byte(byte: &u8) -> ShownByte {
    ShownByte(*byte)
}

impl fmt::Display for ShownByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "{}", char::from(self.0))
        } else {
            write!(f, "\\x{:02x}", self.0)
        }
    }
}

impl LexError {
    /// Line the error is reported at.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedString { line }
            | LexError::InvalidNumber { line, .. }
            | LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexError::InvalidNumber { .. } => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_line(self.line())
            .with_message(self.to_string())
    }
}
