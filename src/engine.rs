//! The suggestion engine: completion first, correction as the fallback.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buckets::LengthBuckets;
use crate::corpus::{Corpus, CorpusError, MAX_WORD_LEN};
use crate::distance;
use crate::trie::Trie;

/// Where the correction candidate window starts.
///
/// Two policies exist because observed deployments disagreed; neither is
/// canonical, so the choice is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowLowerBound {
    /// Start at the first word with the query's exact length.
    LengthBucket,
    /// For queries longer than 5 characters, start two lengths lower so
    /// slightly shorter words stay reachable as corrections.
    RelaxedShorter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Queries at or above this length get an empty answer.
    pub max_word_len: usize,
    /// Cap on returned suggestions, completion and correction alike.
    pub max_suggestions: usize,
    /// The candidate window's upper length is the query length plus this.
    pub window_slack: usize,
    /// Corrections are discarded wholesale when the best candidate's edit
    /// distance exceeds this.
    pub max_edit_distance: usize,
    pub lower_bound: WindowLowerBound,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_word_len: MAX_WORD_LEN,
            max_suggestions: 3,
            window_slack: 4,
            max_edit_distance: 5,
            lower_bound: WindowLowerBound::LengthBucket,
        }
    }
}

/// Completion/correction engine over an immutable corpus.
///
/// All index structures are built once in [`new`]; afterwards every method
/// takes `&self`, holds no interior mutability, and performs no I/O, so a
/// `Suggester` can serve any number of concurrent readers unsynchronized.
///
/// [`new`]: Suggester::new
#[derive(Debug)]
pub struct Suggester {
    corpus: Corpus,
    trie: Trie,
    buckets: LengthBuckets,
    options: EngineOptions,
}

impl Suggester {
    pub fn new(corpus: Corpus, options: EngineOptions) -> Self {
        let mut trie = Trie::new();
        for word in corpus.words() {
            trie.insert(word);
        }
        let buckets = LengthBuckets::build(corpus.words());
        Self {
            corpus,
            trie,
            buckets,
            options,
        }
    }

    pub fn with_defaults(corpus: Corpus) -> Self {
        Self::new(corpus, EngineOptions::default())
    }

    /// Builds straight from a word file in the collaborator format.
    pub fn from_text_file(path: &str, options: EngineOptions) -> Result<Self, CorpusError> {
        Ok(Self::new(Corpus::from_text_file(path)?, options))
    }

    /// Up to `max_suggestions` suggestions for one typed token.
    ///
    /// The query is lowercased and otherwise taken as-is: characters with
    /// no trie edge simply yield no completions, and characters off the
    /// keyboard layout score zero. Completions win whenever any exist,
    /// since an incomplete word is likelier than a misspelled one; only a
    /// dead-end prefix falls through to correction. Every failure mode
    /// returns an empty list.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.to_ascii_lowercase();
        if query.len() >= self.options.max_word_len {
            return Vec::new();
        }

        let completions = self.complete(&query);
        if !completions.is_empty() {
            return completions;
        }
        self.correct(&query)
    }

    /// Suggestions for a batch of tokens, processed in parallel.
    pub fn suggest_batch(&self, queries: &[String]) -> Vec<Vec<String>> {
        queries.par_iter().map(|q| self.suggest(q)).collect()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn complete(&self, query: &str) -> Vec<String> {
        let mut found = self.trie.completions(query, self.options.max_suggestions);
        found.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        found
    }

    fn correct(&self, query: &str) -> Vec<String> {
        let lower_len = match self.options.lower_bound {
            WindowLowerBound::LengthBucket => query.len(),
            WindowLowerBound::RelaxedShorter if query.len() > 5 => query.len() - 2,
            WindowLowerBound::RelaxedShorter => query.len(),
        };
        let upper_len = query.len() + self.options.window_slack;
        let window = self.buckets.window(self.corpus.words(), lower_len, upper_len);

        let mut scored = distance::compare_all(query, window);
        scored.sort_unstable_by(|a, b| {
            a.edit
                .cmp(&b.edit)
                .then_with(|| a.keyboard.total_cmp(&b.keyboard))
                .then_with(|| a.word.cmp(&b.word))
        });
        scored.truncate(self.options.max_suggestions);

        // one threshold check on the best candidate guards the whole list
        if let Some(best) = scored.first() {
            if best.edit > self.options.max_edit_distance {
                return Vec::new();
            }
        }
        scored.into_iter().map(|s| s.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester(words: &[&str]) -> Suggester {
        Suggester::with_defaults(Corpus::from_words(words.iter().copied(), 0))
    }

    #[test]
    fn test_completion_sorted_by_length_then_lexicographic() {
        let s = suggester(&["cat", "cats", "car"]);
        assert_eq!(s.suggest("ca"), ["car", "cat", "cats"]);
    }

    #[test]
    fn test_completion_beats_correction() {
        // "hel" is a live prefix, so correction never runs
        let s = suggester(&["hello", "help", "held"]);
        assert_eq!(s.suggest("hel"), ["held", "help", "hello"]);
    }

    #[test]
    fn test_correction_fallback_on_dead_prefix() {
        let s = suggester(&["hello", "help", "world"]);
        let found = s.suggest("helo");
        assert!(found.contains(&"hello".to_string()));
        // help is edit distance 1 and a closer key slip than hello
        assert_eq!(found[0], "help");
    }

    #[test]
    fn test_correction_ranked_by_edit_then_keyboard() {
        // both are edit distance 1 from "dad", so key distance decides:
        // s is right next to d, b is a row down and two columns over,
        // and that ordering beats the lexicographic one
        let s = suggester(&["bad", "sad"]);
        assert_eq!(s.suggest("dad"), ["sad", "bad"]);
    }

    #[test]
    fn test_correction_rejected_when_too_dissimilar() {
        let s = suggester(&["abcdefghij"]);
        assert_eq!(s.suggest("zzzz"), Vec::<String>::new());
    }

    #[test]
    fn test_overlong_query_is_rejected() {
        // the length gate is strict: 43 chars still answers, 44 never does
        let longest_valid = "c".repeat(MAX_WORD_LEN - 1);
        let s = suggester(&[longest_valid.as_str()]);
        assert_eq!(s.suggest(&longest_valid), [longest_valid.clone()]);
        assert!(s.suggest(&"c".repeat(MAX_WORD_LEN)).is_empty());
    }

    #[test]
    fn test_empty_corpus_yields_no_suggestions() {
        let s = suggester(&[]);
        assert!(s.suggest("anything").is_empty());
        assert!(s.suggest("").is_empty());
    }

    #[test]
    fn test_query_is_case_normalized() {
        let s = suggester(&["cat", "cats", "car"]);
        assert_eq!(s.suggest("CA"), ["car", "cat", "cats"]);
    }

    #[test]
    fn test_never_more_than_cap() {
        let s = suggester(&["aa", "ab", "ac", "ad", "ae"]);
        assert_eq!(s.suggest("a").len(), 3);
        let t = suggester(&["hello", "hella", "helli", "hellu", "helly"]);
        assert_eq!(t.suggest("xellq").len(), 3);
    }

    #[test]
    fn test_relaxed_lower_bound_reaches_shorter_words() {
        // "helpqq" dead-ends after "help"; the obvious fix is two
        // characters shorter than the query
        let corpus = Corpus::from_words(["help", "yellow", "zigzag"], 0);

        let relaxed = Suggester::new(
            corpus.clone(),
            EngineOptions {
                lower_bound: WindowLowerBound::RelaxedShorter,
                ..EngineOptions::default()
            },
        );
        assert_eq!(relaxed.suggest("helpqq")[0], "help");

        // the bucketed policy starts the window at length 6 and never
        // sees the length-4 word at all
        let bucketed = Suggester::with_defaults(corpus);
        assert!(!bucketed.suggest("helpqq").contains(&"help".to_string()));
    }

    #[test]
    fn test_batch_matches_single_queries() {
        let s = suggester(&["cat", "cats", "car", "hello", "help"]);
        let queries: Vec<String> = ["ca", "helo", "zzz"].iter().map(|q| q.to_string()).collect();
        let batch = s.suggest_batch(&queries);
        for (query, result) in queries.iter().zip(&batch) {
            assert_eq!(result, &s.suggest(query));
        }
    }

    #[test]
    fn test_options_default_values() {
        let options = EngineOptions::default();
        assert_eq!(options.max_word_len, 44);
        assert_eq!(options.max_suggestions, 3);
        assert_eq!(options.window_slack, 4);
        assert_eq!(options.max_edit_distance, 5);
        assert_eq!(options.lower_bound, WindowLowerBound::LengthBucket);
    }
}
