//! Prefix tree over lowercase words.
//!
//! # Implementation details
//! - **Edges**: each node maps a `char` to its child in an `ordermap::OrderMap`,
//!   so traversal replays edges in the order they were first created.
//! - **Hashing**: edges are single `char`s, hashed with FNV (`fnv::FnvBuildHasher`).
//! - **Words**: a node's `is_word` flag marks the end of a stored word; the
//!   root carries no character.

use core::fmt;

use fnv::FnvBuildHasher;
use ordermap::OrderMap;

type Children = OrderMap<char, TrieNode, FnvBuildHasher>;

#[derive(Default)]
struct TrieNode {
    is_word: bool,
    children: Children,
}

/// Frees descendants from an explicit stack, so one long word does not turn
/// into one stack frame per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> =
            core::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(core::mem::take(&mut node.children).into_values());
        }
    }
}

/// Copies bottom-up: a node is rebuilt once all of its children are.
///
/// # Pseudo Code:
/// ```text
/// work = [Visit(self)]; built = []
/// while work not empty:
///     Visit(node) -> work.push(Build(node)); work.push(Visit(child)) for children reversed
///     Build(node) -> kids = last len(node.children) entries of built
///                    built.push(node with edges zipped onto kids)
/// ```
impl Clone for TrieNode {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a TrieNode),
            Build(&'a TrieNode),
        }

        let mut work = vec![Step::Visit(self)];
        let mut built: Vec<TrieNode> = Vec::new();
        while let Some(step) = work.pop() {
            match step {
                Step::Visit(node) => {
                    work.push(Step::Build(node));
                    work.extend(node.children.values().rev().map(Step::Visit));
                }
                Step::Build(node) => {
                    let kids = built.split_off(built.len() - node.children.len());
                    built.push(TrieNode {
                        is_word: node.is_word,
                        children: node.children.keys().copied().zip(kids).collect(),
                    });
                }
            }
        }
        built.pop().unwrap_or_default()
    }
}

/// A set of words stored as shared-prefix paths. Words are case-folded to
/// lowercase on every operation.
#[derive(Clone, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word` (lowercased). Returns `true` if it was not already stored.
    /// The empty word is ignored.
    pub fn add(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.words += 1;
        true
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// A stored word counts as a prefix of itself. The empty prefix matches
    /// whenever the trie holds at least one word.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        // Every node hangs off a path that ends in a word, so reaching the
        // node is enough.
        !self.is_empty() && self.find(prefix).is_some()
    }

    /// Returns `true` if exactly `word` was added.
    pub fn includes(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_word)
    }

    /// Number of stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.words = 0;
    }

    /// Edge characters in pre-order, children in insertion order.
    ///
    /// For `"apple"` then `"ape"` this yields `a p p l e e`.
    pub fn iter(&self) -> Chars<'_> {
        Chars {
            stack: vec![self.root.children.iter()],
        }
    }

    /// Stored words in pre-order (shorter words before their extensions).
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![self.root.children.iter()],
            prefix: String::new(),
        }
    }

    fn find(&self, text: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in text.to_lowercase().chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

// --- Iterators ---

pub struct Chars<'a> {
    stack: Vec<ordermap::map::Iter<'a, char, TrieNode>>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some((&c, child)) => {
                    self.stack.push(child.children.iter());
                    return Some(c);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub struct Words<'a> {
    stack: Vec<ordermap::map::Iter<'a, char, TrieNode>>,
    /// Characters on the path to the child iterator on top of `stack`.
    prefix: String,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some((&c, child)) => {
                    self.prefix.push(c);
                    self.stack.push(child.children.iter());
                    if child.is_word {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = char;
    type IntoIter = Chars<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

// --- Tests ---
