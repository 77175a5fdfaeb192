//! Arena-backed prefix tree for longest-match recognition of fixed lexemes.
//!
//! All nodes live in one `Vec`; child links are [`NodeId`] indices keyed by
//! the next input byte. Insertion only ever appends nodes, so the structure
//! is a tree by construction and needs no per-node allocation beyond the
//! child maps.

use rustc_hash::FxHashMap;

/// Index of a node in the trie arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node<K> {
    children: FxHashMap<u8, NodeId>,
    /// Set iff the path from the root to this node spells a registered lexeme.
    kind: Option<K>,
}

impl<K> Node<K> {
    fn new() -> Self {
        Node {
            children: FxHashMap::default(),
            kind: None,
        }
    }
}

/// A successful longest-match lookup.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TrieMatch<K> {
    /// Length of the matched lexeme in bytes (always at least 1).
    pub len: usize,
    /// Tag registered for the matched lexeme.
    pub kind: K,
}

/// Prefix tree mapping fixed byte sequences to a tag.
///
/// Built once, then only read. Lookups take `&self`, so a single trie can be
/// shared across threads when `K: Sync`.
#[derive(Clone, Debug)]
pub struct LexemeTrie<K> {
    nodes: Vec<Node<K>>,
    lexemes: usize,
}

impl<K: Copy> LexemeTrie<K> {
    /// Create an empty trie (a lone root).
    pub fn new() -> Self {
        LexemeTrie {
            nodes: vec![Node::new()],
            lexemes: 0,
        }
    }

    /// Register `lexeme` with tag `kind`.
    ///
    /// Re-inserting a lexeme replaces its tag. Empty lexemes are ignored: the
    /// root never completes a match.
    pub fn insert(&mut self, lexeme: &str, kind: K) {
        if lexeme.is_empty() {
            return;
        }
        let mut node = NodeId::ROOT;
        for &byte in lexeme.as_bytes() {
            node = match self.nodes[node.index()].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.push_node();
                    self.nodes[node.index()].children.insert(byte, child);
                    child
                }
            };
        }
        if self.nodes[node.index()].kind.replace(kind).is_none() {
            self.lexemes += 1;
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "operator tables hold a few dozen nodes, far below u32::MAX"
    )]
    fn push_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new());
        id
    }

    /// Find the longest registered lexeme that prefixes `text`.
    ///
    /// Walks one byte per edge and remembers the last terminal node passed,
    /// so `==` wins over `=` even though both are registered, and a dead end
    /// after a terminal (`<` followed by an unregistered byte) still reports
    /// the shorter match. Returns `None` when no registered lexeme prefixes
    /// `text`.
    pub fn longest_match(&self, text: &[u8]) -> Option<TrieMatch<K>> {
        let mut node = &self.nodes[NodeId::ROOT.index()];
        let mut best = None;
        for (i, byte) in text.iter().enumerate() {
            let Some(&child) = node.children.get(byte) else {
                break;
            };
            node = &self.nodes[child.index()];
            if let Some(kind) = node.kind {
                best = Some(TrieMatch { len: i + 1, kind });
            }
        }
        best
    }

    /// Number of registered lexemes.
    pub fn len(&self) -> usize {
        self.lexemes
    }

    /// Returns `true` if no lexeme has been registered.
    pub fn is_empty(&self) -> bool {
        self.lexemes == 0
    }
}

impl<K: Copy> Default for LexemeTrie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K: Copy> FromIterator<(&'a str, K)> for LexemeTrie<K> {
    fn from_iter<I: IntoIterator<Item = (&'a str, K)>>(iter: I) -> Self {
        let mut trie = LexemeTrie::new();
        for (lexeme, kind) in iter {
            trie.insert(lexeme, kind);
        }
        trie
    }
}
