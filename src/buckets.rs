//! Length buckets over the length-sorted word vector.
//!
//! Because the corpus is sorted by length, all words of one length form a
//! contiguous run. One linear scan records where each run begins and ends,
//! and the correction path later slices a candidate window out of the
//! vector instead of scanning the whole corpus.
//!
//! The bookkeeping has deliberate quirks, kept because downstream behavior
//! depends on them:
//! - entries are only recorded at length transitions, so the smallest
//!   length has no `first` entry and the largest has no `last` entry;
//! - `last[len]` is the index of the first word *longer* than `len`, so a
//!   window sliced through it includes one word of the next length run.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct LengthBuckets {
    first: HashMap<usize, usize>,
    last: HashMap<usize, usize>,
}

impl LengthBuckets {
    /// Scans a length-sorted word slice and records run boundaries.
    pub fn build(words: &[String]) -> Self {
        let mut first = HashMap::new();
        let mut last = HashMap::new();
        let mut run_len = 1usize;

        for (i, word) in words.iter().enumerate() {
            if word.len() > run_len {
                last.insert(run_len, i);
                run_len = word.len();
                first.insert(run_len, i);
            }
        }
        Self { first, last }
    }

    /// Start index for words of `len`; absent lengths fall back to 0.
    pub fn first_of(&self, len: usize) -> usize {
        self.first.get(&len).copied().unwrap_or(0)
    }

    /// Index of the first word longer than `len`, if any run ended there.
    pub fn last_of(&self, len: usize) -> Option<usize> {
        self.last.get(&len).copied()
    }

    /// Candidate window: words from the start of the `lower_len` run
    /// through the recorded end of the `upper_len` run, inclusive.
    ///
    /// When no run boundary was recorded at `upper_len` (no word is longer
    /// than it), the window extends to the end of the corpus. An inverted
    /// pair of bounds yields an empty window; nothing here can panic.
    pub fn window<'a>(&self, words: &'a [String], lower_len: usize, upper_len: usize) -> &'a [String] {
        let start = self.first_of(lower_len);
        let end = match self.last_of(upper_len) {
            Some(idx) => (idx + 1).min(words.len()),
            None => words.len(),
        };
        if start >= end { &[] } else { &words[start..end] }
    }
}
