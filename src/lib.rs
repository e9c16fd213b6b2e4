//! Real-time word suggestion: completion when the input is a live prefix,
//! spelling correction when it is not.
//!
//! Build a [`Corpus`] from any word source, wrap it in a [`Suggester`],
//! and ask for suggestions per typed token:
//!
//! ```
//! use autosuggest::{Corpus, Suggester};
//!
//! let corpus = Corpus::from_words(["cat", "cats", "car"], 0);
//! let suggester = Suggester::with_defaults(corpus);
//!
//! assert_eq!(suggester.suggest("ca"), ["car", "cat", "cats"]);
//! ```
//!
//! Completions come from a prefix trie and prefer shorter words; when the
//! trie dead-ends, candidates of similar length are ranked by Levenshtein
//! distance with a QWERTY key-distance tie-break. Either way the answer is
//! at most three words, and every failure mode is an empty list.

mod buckets;
mod corpus;
mod distance;
mod engine;
mod keyboard;
mod trie;

pub use corpus::{Corpus, CorpusError, MAX_WORD_LEN};
pub use distance::{ScoredWord, compare_all, edit_distance, keyboard_distance};
pub use engine::{EngineOptions, Suggester, WindowLowerBound};
