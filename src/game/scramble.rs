//! Letter scrambling

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the characters of `word` into a different order.
///
/// Words with no distinct rearrangement (empty, one character, or a single
/// repeated character) come back unchanged.
pub fn scramble<R: Rng>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if !has_distinct_permutation(&original) {
        return word.to_string();
    }

    let mut letters = original.clone();
    loop {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
        // Reshuffle on the identity permutation
    }
}

fn has_distinct_permutation(letters: &[char]) -> bool {
    match letters.split_first() {
        Some((first, rest)) => rest.iter().any(|c| c != first),
        None => false,
    }
}
