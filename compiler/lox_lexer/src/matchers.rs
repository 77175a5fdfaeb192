//! The matcher pipeline.
//!
//! Each matcher looks at the byte under the cursor and either declines
//! (returns `false`, cursor untouched) or consumes a span (returns `true`),
//! emitting at most one token or one error. The driver tries them in
//! [`PIPELINE`] order and stops at the first one that consumes.

use lox_ir::{Literal, Token, TokenKind};
use lox_lexer_core::{Cursor, LexemeTrie};

use crate::keywords;
use crate::lex_error::{LexError, NumberError};

/// Everything a matcher reads or writes during one scan.
pub(crate) struct ScanState<'src> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) operators: &'src LexemeTrie<TokenKind>,
    pub(crate) tokens: Vec<Token<'src>>,
    pub(crate) errors: Vec<LexError>,
}

impl<'src> ScanState<'src> {
    pub(crate) fn new(source: &'src [u8], operators: &'src LexemeTrie<TokenKind>) -> Self {
        ScanState {
            cursor: Cursor::new(source),
            operators,
            // Roughly one token per four bytes of typical source.
            tokens: Vec::with_capacity(source.len() / 4 + 1),
            errors: Vec::new(),
        }
    }

    #[inline]
    fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    /// Record a recoverable error and set the cursor's error flag.
    pub(crate) fn report(&mut self, error: LexError) {
        tracing::trace!(line = error.line(), code = %error.code(), "{error}");
        self.cursor.mark_error();
        self.errors.push(error);
    }
}

/// A single recognizer. Returns `true` if it consumed input.
pub(crate) type Matcher = for<'src> fn(&mut ScanState<'src>) -> bool;

/// Matchers in priority order.
pub(crate) const PIPELINE: [Matcher; 7] = [
    newline,
    whitespace,
    comment,
    string_literal,
    number_literal,
    identifier_or_keyword,
    operator,
];

// ─── Trivia ────────────────────────────────────────────────────

pub(crate) fn newline(state: &mut ScanState<'_>) -> bool {
    if state.cursor.current() != b'\n' {
        return false;
    }
    state.cursor.advance();
    true
}

/// Non-newline whitespace as classified by C `isspace`.
#[inline]
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

pub(crate) fn whitespace(state: &mut ScanState<'_>) -> bool {
    state.cursor.eat_while(is_blank) > 0
}

pub(crate) fn comment(state: &mut ScanState<'_>) -> bool {
    if !state.cursor.starts_with(b"//") {
        return false;
    }
    state.cursor.eat_until_newline_or_eof();
    true
}

// ─── Literals ──────────────────────────────────────────────────

/// `"..."` with no escape processing. Newlines inside the string are kept.
pub(crate) fn string_literal(state: &mut ScanState<'_>) -> bool {
    if state.cursor.current() != b'"' {
        return false;
    }
    let start = state.cursor.pos();
    let line = state.cursor.line();
    state.cursor.advance();

    loop {
        match state.cursor.skip_to_string_delim() {
            b'"' => {
                let body = state.cursor.slice_from(start + 1);
                state.cursor.advance();
                let lexeme = state.cursor.slice_from(start);
                state.push(Token::new(
                    TokenKind::String,
                    lexeme,
                    Literal::String(body),
                    line,
                ));
                return true;
            }
            b'\n' => state.cursor.advance(),
            _ => {
                state.report(LexError::UnterminatedString { line });
                return true;
            }
        }
    }
}

/// Digits, optionally followed by `.` and more digits. A trailing `.` with
/// no digit after it is left for the operator matcher.
pub(crate) fn number_literal(state: &mut ScanState<'_>) -> bool {
    if !state.cursor.current().is_ascii_digit() {
        return false;
    }
    let start = state.cursor.pos();
    let line = state.cursor.line();
    state.cursor.eat_while(|b| b.is_ascii_digit());
    if state.cursor.current() == b'.' && state.cursor.peek().is_ascii_digit() {
        state.cursor.advance();
        state.cursor.eat_while(|b| b.is_ascii_digit());
    }
    let lexeme = state.cursor.slice_from(start);

    match parse_number(lexeme) {
        Ok(value) => state.push(Token::new(
            TokenKind::Number,
            lexeme,
            Literal::Number(value),
            line,
        )),
        Err(reason) => state.report(LexError::InvalidNumber {
            line,
            lexeme: String::from_utf8_lossy(lexeme).into_owned(),
            reason,
        }),
    }
    true
}

/// Parse a decimal number lexeme into an `f64`.
///
/// Values that overflow to infinity are out of range, as are non-zero
/// lexemes that underflow to zero or land in the subnormal range.
pub(crate) fn parse_number(lexeme: &[u8]) -> Result<f64, NumberError> {
    let value: f64 = std::str::from_utf8(lexeme)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(NumberError::Malformed)?;
    if value.is_infinite() {
        return Err(NumberError::OutOfRange);
    }
    let underflowed = value.abs() < f64::MIN_POSITIVE
        && lexeme.iter().any(|b| matches!(b, b'1'..=b'9'));
    if underflowed {
        return Err(NumberError::OutOfRange);
    }
    Ok(value)
}

// ─── Words and Operators ───────────────────────────────────────

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

pub(crate) fn identifier_or_keyword(state: &mut ScanState<'_>) -> bool {
    if !is_ident_start(state.cursor.current()) {
        return false;
    }
    let start = state.cursor.pos();
    let line = state.cursor.line();
    state.cursor.eat_while(is_ident_continue);
    let text = state.cursor.slice_from(start);
    let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
    state.push(Token::bare(kind, text, line));
    true
}

/// Longest registered operator at the cursor.
pub(crate) fn operator(state: &mut ScanState<'_>) -> bool {
    let Some(found) = state.operators.longest_match(state.cursor.remaining()) else {
        return false;
    };
    let start = state.cursor.pos();
    let line = state.cursor.line();
    state.cursor.advance_n(found.len);
    let lexeme = state.cursor.slice_from(start);
    state.push(Token::bare(found.kind, lexeme, line));
    true
}
