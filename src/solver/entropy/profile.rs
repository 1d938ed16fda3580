//! Letter statistics over a reference word list
//!
//! For every letter the profile stores how likely it is to sit at each slot given
//! that it occurs, and how likely a word is to hold it at least once, twice, or
//! three or more times.

use crate::core::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;

/// Per-word weights keyed by word text
///
/// When weights are supplied, words missing from the map weigh nothing.
pub type Weights = FxHashMap<String, f64>;

/// Repetition buckets: at least 1, at least 2, at least 3 occurrences
pub const REPEAT_BUCKETS: usize = 3;

/// Statistics of a single letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStats {
    repeat: [f64; REPEAT_BUCKETS],
    position: [f64; WORD_LEN],
}

impl LetterStats {
    /// Probability that a word holds more than `repetition` copies of the letter
    ///
    /// `repetition` is zero-based; anything past the last bucket reads the last bucket.
    #[must_use]
    pub fn occurs_at_least(&self, repetition: usize) -> f64 {
        self.repeat[repetition.min(REPEAT_BUCKETS - 1)]
    }

    /// Probability of the letter sitting at `position`, given that it occurs
    #[must_use]
    pub fn at_position(&self, position: usize) -> f64 {
        self.position[position]
    }
}

/// Letter statistics derived from a reference list
///
/// Rebuilt from scratch every round; it has no life of its own.
#[derive(Debug, Clone, Default)]
pub struct LetterProfile {
    letters: FxHashMap<u8, LetterStats>,
    total_weight: f64,
}

impl LetterProfile {
    /// Compute the profile of `words`, optionally weighted
    ///
    /// # Examples
    /// ```
    /// use wordle_stats_solver::core::Word;
    /// use wordle_stats_solver::solver::entropy::LetterProfile;
    ///
    /// let words = vec![Word::new("apple").unwrap(), Word::new("angle").unwrap()];
    /// let profile = LetterProfile::build(&words, None);
    ///
    /// let p = profile.stats(b'p').unwrap();
    /// assert!((p.occurs_at_least(0) - 0.5).abs() < 1e-9);
    /// assert!((p.occurs_at_least(1) - 0.5).abs() < 1e-9);
    /// assert!(profile.stats(b'z').is_none());
    /// ```
    pub fn build<I>(words: I, weights: Option<&Weights>) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Word>,
    {
        let mut position_weight = [[0.0f64; WORD_LEN]; ALPHABET_LEN];
        let mut repeat_weight = [[0.0f64; REPEAT_BUCKETS]; ALPHABET_LEN];
        let mut total_weight = 0.0;

        for word in words {
            let word = word.borrow();
            let weight = weights.map_or(1.0, |w| w.get(word.text()).copied().unwrap_or(0.0));
            if weight <= 0.0 {
                continue;
            }
            total_weight += weight;

            let mut seen = [0usize; ALPHABET_LEN];
            for (position, &letter) in word.chars().iter().enumerate() {
                let idx = letter_index(letter);
                position_weight[idx][position] += weight;
                if seen[idx] < REPEAT_BUCKETS {
                    repeat_weight[idx][seen[idx]] += weight;
                }
                seen[idx] += 1;
            }
        }

        let mut letters = FxHashMap::default();
        if total_weight > 0.0 {
            let weights_by_letter = position_weight.iter().zip(&repeat_weight);
            for (idx, (positions, repeats)) in weights_by_letter.enumerate() {
                let occur_weight = repeats[0];
                if occur_weight <= 0.0 {
                    continue;
                }
                letters.insert(
                    b'a' + idx as u8,
                    LetterStats {
                        repeat: repeats.map(|w| w / total_weight),
                        position: positions.map(|w| w / occur_weight),
                    },
                );
            }
        }

        Self {
            letters,
            total_weight,
        }
    }

    /// Statistics of `letter`, or `None` if no weighted word holds it
    #[must_use]
    pub fn stats(&self, letter: u8) -> Option<&LetterStats> {
        self.letters.get(&letter)
    }

    /// Sum of the weights of the words the profile was built from
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// True when built from an empty (or zero-weight) list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
