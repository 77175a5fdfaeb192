//! Reserved keyword resolution.
//!
//! Keywords are resolved *after* the identifier scanner has found the full
//! identifier boundary, so `iffy` stays an identifier even though it starts
//! with `if`. The lookup uses the identifier's length as a first-pass filter
//! (keywords are 2-6 chars), then matches the keywords of that length.

use lox_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for an ordinary identifier.
/// Matching is case-sensitive: `If` is an identifier.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            b"if" => Some(TokenKind::If),
            b"or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            b"and" => Some(TokenKind::And),
            b"for" => Some(TokenKind::For),
            b"fun" => Some(TokenKind::Fun),
            b"nil" => Some(TokenKind::Nil),
            b"var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"this" => Some(TokenKind::This),
            b"true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            b"class" => Some(TokenKind::Class),
            b"false" => Some(TokenKind::False),
            b"print" => Some(TokenKind::Print),
            b"super" => Some(TokenKind::Super),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
