//! Entropy-based scoring of a guess
//!
//! Each letter of a guess is treated as a three-outcome experiment (exact,
//! elsewhere, absent) whose probabilities come from a `LetterProfile`. The score
//! of a word is the sum of those entropies.

use super::profile::{LetterProfile, LetterStats};
use crate::core::{ALPHABET_LEN, Word, letter_index};

/// Shannon entropy in bits of a discrete distribution
///
/// H = -Σ p * log₂(p), outcomes with zero probability contribute nothing.
///
/// # Examples
/// ```
/// use wordle_stats_solver::solver::entropy::shannon_entropy;
///
/// assert!((shannon_entropy(&[0.25, 0.25, 0.25, 0.25]) - 2.0).abs() < 1e-9);
/// assert!(shannon_entropy(&[1.0, 0.0]).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Entropy of the feedback for one letter slot
///
/// `repetition` is how many copies of the letter appeared earlier in the guess.
#[must_use]
pub fn letter_entropy(stats: &LetterStats, position: usize, repetition: usize) -> f64 {
    let occurs = stats.occurs_at_least(repetition);
    let exact = occurs * stats.at_position(position);
    let elsewhere = occurs - exact;
    let absent = 1.0 - occurs;
    shannon_entropy(&[exact, elsewhere, absent])
}

/// Expected information of guessing `word`, estimated from `profile`
///
/// Letters unknown to the profile contribute nothing.
#[must_use]
pub fn score(word: &Word, profile: &LetterProfile) -> f64 {
    let mut seen = [0usize; ALPHABET_LEN];
    let mut total = 0.0;

    for (position, &letter) in word.chars().iter().enumerate() {
        let idx = letter_index(letter);
        if let Some(stats) = profile.stats(letter) {
            total += letter_entropy(stats, position, seen[idx]);
        }
        seen[idx] += 1;
    }

    total
}
