//! String distance metrics used to rank correction candidates.

use crate::keyboard;
use rayon::prelude::*;

/// Levenshtein distance: minimum number of single-character insertions,
/// deletions, and substitutions turning `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    let bb = b.as_bytes();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if ac == bb[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Positional keyboard distance between two words.
///
/// Characters are compared pairwise up to the shorter word's length; each
/// pair adds the Euclidean distance between its keys, and pairs with a
/// character off the layout add nothing. A length mismatch adds
/// `|len(a) - len(b)| / 2`. Cheap and deliberately not alignment-aware: a
/// single early insertion shifts every later pair.
pub fn keyboard_distance(a: &str, b: &str) -> f64 {
    let mut total = 0.0;
    for (ac, bc) in a.chars().zip(b.chars()) {
        if let Some(d) = keyboard::key_distance(ac, bc) {
            total += d;
        }
    }
    let (la, lb) = (a.chars().count() as f64, b.chars().count() as f64);
    total + (la - lb).abs() / 2.0
}

/// A correction candidate with both of its scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub edit: usize,
    pub keyboard: f64,
}

/// Score every candidate against `query` with both metrics.
///
/// No filtering happens here; ranking and cutoffs are the caller's call.
/// Candidates are scored in parallel, output order matches input order.
pub fn compare_all(query: &str, candidates: &[String]) -> Vec<ScoredWord> {
    candidates
        .par_iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            edit: edit_distance(query, word),
            keyboard: keyboard_distance(query, word),
        })
        .collect()
}
