//! Word store: normalization, ordering, and persistence.
//!
//! The word-acquisition side of the system hands over an ordered sequence
//! of words plus an integer cache-validity token recording how much of the
//! acquisition work the file reflects. Everything here is rebuilt into the
//! one ordering the lookup structures need: length ascending.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Words at or above this length are discarded on ingest and queries at or
/// above it are answered with an empty suggestion list.
pub const MAX_WORD_LEN: usize = 44;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("word file is missing its cache-validity token line")]
    MissingToken,
    #[error("invalid cache-validity token {0:?}")]
    InvalidToken(String),
    #[error("invalid corpus snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// An immutable, normalized word list sorted by length ascending.
///
/// Ties within a length run are kept in lexicographic order; nothing
/// downstream depends on that secondary order, it just makes rebuilds
/// reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    token: u64,
    words: Vec<String>,
}

fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    if word.is_empty() || word.len() >= MAX_WORD_LEN {
        return None;
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

impl Corpus {
    /// Builds a corpus from any word sequence.
    ///
    /// Words are lowercased; anything empty, over-long, or containing a
    /// non-letter is dropped. Duplicates collapse to one entry.
    pub fn from_words<I, S>(words: I, token: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        out.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        out.dedup();
        Self { token, words: out }
    }

    /// Reads the collaborator's word-file format: line 1 is the integer
    /// cache-validity token, every further line one word.
    ///
    /// Files on disk are ordered by `(first letter, length)`; the load
    /// always re-sorts, so the on-disk order is interchange-only.
    pub fn from_text_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();
        let token_line = lines.next().ok_or(CorpusError::MissingToken)?;
        let token: u64 = token_line
            .trim()
            .parse()
            .map_err(|_| CorpusError::InvalidToken(token_line.to_string()))?;
        Ok(Self::from_words(lines, token))
    }

    /// Writes the word-file format back out, ordered by
    /// `(first letter, length)` as the acquisition side expects to find it.
    pub fn save_text_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CorpusError> {
        let mut by_letter = self.words.clone();
        by_letter.sort_unstable_by(|a, b| {
            a.as_bytes()[0]
                .cmp(&b.as_bytes()[0])
                .then_with(|| a.len().cmp(&b.len()))
                .then_with(|| a.cmp(b))
        });

        let mut out = String::with_capacity(self.words.len() * 8 + 16);
        out.push_str(&self.token.to_string());
        out.push('\n');
        for word in &by_letter {
            out.push_str(word);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Loads a JSON snapshot previously written by [`save_snapshot_file`].
    ///
    /// The snapshot is re-normalized on load, so a hand-edited file cannot
    /// smuggle in words that `from_words` would reject.
    ///
    /// [`save_snapshot_file`]: Corpus::save_snapshot_file
    pub fn from_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        let raw: Corpus = serde_json::from_str(&content)?;
        Ok(Self::from_words(raw.words, raw.token))
    }

    /// Writes a JSON snapshot for fast reloads.
    pub fn save_snapshot_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CorpusError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// The words, length ascending.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
