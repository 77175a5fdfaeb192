//! Lox IR - token-level types.
//!
//! This crate contains the data the tokenizer hands to its callers:
//! - [`TokenKind`]: the closed set of token categories
//! - [`Token`]: one classified lexeme with its decoded literal and line
//! - [`Literal`]: the decoded value of a string or number lexeme
//!
//! Tokens borrow their lexemes from the source text, so a token stream is
//! only as long-lived as the buffer it was scanned from.

mod literal;
mod token;

pub use literal::{format_number, Literal};
pub use token::{Token, TokenKind};
