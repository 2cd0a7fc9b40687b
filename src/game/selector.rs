//! Word selection without repeats

use std::collections::{BTreeSet, HashSet};

use rand::Rng;

/// Words used when a language has an empty word list
pub const FALLBACK_WORDS: [&str; 2] = ["test", "empty"];

/// Pick a random lowercase word from `corpus` that is not in `used`, and record it as used.
///
/// An empty corpus falls back to [`FALLBACK_WORDS`]. When every candidate has
/// already been used, `used` is cleared first so words start cycling again.
pub fn pick_word<R: Rng>(
    corpus: &BTreeSet<String>,
    used: &mut HashSet<String>,
    rng: &mut R,
) -> String {
    let mut candidates: Vec<String> = corpus
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if candidates.is_empty() {
        tracing::warn!("word list is empty, using fallback words");
        candidates = FALLBACK_WORDS.iter().map(|w| w.to_string()).collect();
    }

    if candidates.iter().all(|word| used.contains(word)) {
        tracing::debug!(words = candidates.len(), "all words used, starting over");
        used.clear();
    }

    // At least one candidate is unused here, so rejection sampling terminates
    loop {
        let word = &candidates[rng.random_range(0..candidates.len())];
        if used.insert(word.clone()) {
            return word.clone();
        }
    }
}
