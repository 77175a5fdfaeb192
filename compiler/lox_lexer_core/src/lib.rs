//! Low-level scanning primitives for the Lox tokenizer.
//!
//! This crate knows nothing about Lox token kinds. It provides:
//! - [`Cursor`]: byte position, line counter and monotonic error flag over an
//!   immutable source view
//! - [`LexemeTrie`]: arena-backed prefix tree for longest-match recognition
//!   of fixed lexemes
//!
//! The tokenizer proper (`lox_lexer`) layers keyword resolution, literal
//! decoding and diagnostics on top of these.

mod cursor;
mod trie;

pub use cursor::Cursor;
pub use trie::{LexemeTrie, TrieMatch};
