//! Prefix trie backing the completion path.
//!
//! Nodes live in a flat arena (`Vec<Node>`) and point at children through
//! indices, so there are no deep ownership chains to tear down and the
//! whole structure stays `Send + Sync` once building is done. The root is
//! always index 0.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Node {
    children: HashMap<char, usize>,
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
        }
    }

    /// Inserts a word. Re-inserting the same word is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut current = 0usize;
        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[current].children.insert(ch, idx);
                    idx
                }
            };
        }
        self.nodes[current].terminal = true;
    }

    /// Collects up to `cap` stored words starting with `prefix`.
    ///
    /// A word counts as a completion of itself. If any character of the
    /// prefix has no edge, no completion exists and the result is empty.
    ///
    /// Once `cap` words are held, a shorter find replaces the first held
    /// word that is longer than it, scanning in collection order. Shorter
    /// completions are the likelier intent ("app" is probably "apple",
    /// not "apparatchik"), but this keeps only an approximation of the
    /// `cap` shortest: which equal-length words survive depends on child
    /// iteration order, which is unspecified. Callers sort what they get.
    pub fn completions(&self, prefix: &str, cap: usize) -> Vec<String> {
        let mut node = 0usize;
        for ch in prefix.chars() {
            match self.nodes[node].children.get(&ch) {
                Some(&idx) => node = idx,
                None => return Vec::new(),
            }
        }

        let mut words = Vec::with_capacity(cap);
        let mut path = prefix.to_string();
        self.collect(node, &mut path, &mut words, cap);
        words
    }

    fn collect(&self, node: usize, path: &mut String, words: &mut Vec<String>, cap: usize) {
        let n = &self.nodes[node];
        if n.terminal {
            if words.len() < cap {
                words.push(path.clone());
            } else if let Some(held) = words.iter_mut().find(|held| held.len() > path.len()) {
                *held = path.clone();
            }
        }
        for (&ch, &child) in &n.children {
            path.push(ch);
            self.collect(child, path, words, cap);
            path.pop();
        }
    }
}
