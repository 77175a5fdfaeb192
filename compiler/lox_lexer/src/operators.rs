//! Operator table and the shared operator trie.

use std::sync::OnceLock;

use lox_ir::TokenKind;
use lox_lexer_core::LexemeTrie;

static OPERATOR_TRIE: OnceLock<LexemeTrie<TokenKind>> = OnceLock::new();

/// Every operator lexeme with its kind, in `TokenKind` order.
pub fn operators() -> impl Iterator<Item = (&'static str, TokenKind)> {
    TokenKind::ALL
        .into_iter()
        .filter(|kind| kind.is_operator())
        .filter_map(|kind| Some((kind.lexeme()?, kind)))
}

/// The process-wide operator trie.
///
/// Built on first use, then shared read-only by every scan (including scans
/// running on other threads).
pub fn operator_trie() -> &'static LexemeTrie<TokenKind> {
    OPERATOR_TRIE.get_or_init(|| {
        let trie: LexemeTrie<TokenKind> = operators().collect();
        tracing::debug!(operators = trie.len(), "operator trie built");
        trie
    })
}
