//! Accumulated knowledge about the target
//!
//! A `ConstraintSet` holds four kinds of facts learned from feedback:
//! - exact positions: a letter is pinned to a slot
//! - must exist: a letter occurs at least N times
//! - must not exist: a letter occurs at most N times
//! - excluded positions: a letter is known not to sit in some slots

use super::filter::Filtered;
use crate::core::{ALPHABET_LEN, Annotation, Feedback, WORD_LEN, Word, letter_index};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;

/// Bitmask of slots, bit `i` = position `i`
type PositionMask = u8;

/// Positive and negative facts about letters and positions
///
/// Starts empty and only gains information as feedback is merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    exact_positions: [Option<u8>; WORD_LEN],
    must_exist: FxHashMap<u8, u8>,
    must_not_exist: FxHashMap<u8, u8>,
    excluded_positions: FxHashMap<u8, PositionMask>,
}

impl ConstraintSet {
    /// A constraint set that every word satisfies
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive the constraints carried by a single round of feedback
    ///
    /// Letters marked `Absent` while also credited elsewhere in the same guess are
    /// capped at their credited count and excluded from the absent slots, rather
    /// than treated as missing from the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_stats_solver::constraints::ConstraintSet;
    /// use wordle_stats_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("allot").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let constraints = ConstraintSet::from_feedback(&Feedback::compute(&guess, &target));
    ///
    /// assert_eq!(constraints.exact_letter(0), Some(b'a'));
    /// assert_eq!(constraints.min_count(b'l'), Some(1));
    /// assert_eq!(constraints.max_count(b'l'), Some(1));
    /// assert_eq!(constraints.max_count(b'o'), Some(0));
    /// ```
    #[must_use]
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let mut set = Self::default();
        let mut absent = [0u8; ALPHABET_LEN];
        let credited = feedback.credited_counts();

        for (i, (&letter, &annotation)) in feedback
            .word()
            .chars()
            .iter()
            .zip(feedback.annotations())
            .enumerate()
        {
            match annotation {
                Annotation::Exact => set.exact_positions[i] = Some(letter),
                Annotation::Misplaced => set.exclude(letter, i),
                Annotation::Absent => {
                    absent[letter_index(letter)] += 1;
                    if credited[letter_index(letter)] > 0 {
                        set.exclude(letter, i);
                    }
                }
            }
        }

        for &letter in feedback.word().chars() {
            let idx = letter_index(letter);
            if credited[idx] > 0 {
                set.must_exist.insert(letter, credited[idx]);
            }
            if absent[idx] > 0 {
                // count in guess minus count marked absent
                set.must_not_exist.insert(letter, credited[idx]);
            }
        }

        set
    }

    /// Combine accumulated constraints with a freshly derived round
    ///
    /// - upper bounds keep the tightest value seen
    /// - lower bounds keep the strongest value seen; a later count replaces an
    ///   earlier one only when it says more
    /// - a slot pinned once stays pinned to the same letter
    /// - excluded slots accumulate per letter
    #[must_use]
    pub fn merge(&self, newer: &Self) -> Self {
        let mut merged = self.clone();

        for (&letter, &max) in &newer.must_not_exist {
            merged
                .must_not_exist
                .entry(letter)
                .and_modify(|current| *current = (*current).min(max))
                .or_insert(max);
        }

        for (&letter, &min) in &newer.must_exist {
            merged
                .must_exist
                .entry(letter)
                .and_modify(|current| *current = (*current).max(min))
                .or_insert(min);
        }

        for (slot, pin) in merged.exact_positions.iter_mut().zip(newer.exact_positions) {
            if slot.is_none() {
                *slot = pin;
            }
        }

        for (&letter, &mask) in &newer.excluded_positions {
            for position in positions(mask) {
                if merged.exact_positions[position] != Some(letter) {
                    merged.exclude(letter, position);
                }
            }
        }

        merged
    }

    /// Whether `word` satisfies every constraint
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let pinned_ok = self
            .exact_positions
            .iter()
            .enumerate()
            .all(|(i, &pin)| pin.is_none_or(|letter| word.char_at(i) == letter));
        if !pinned_ok {
            return false;
        }

        let excluded_ok = self
            .excluded_positions
            .iter()
            .all(|(&letter, &mask)| positions(mask).all(|i| word.char_at(i) != letter));
        if !excluded_ok {
            return false;
        }

        let counts = word.letter_counts();
        self.must_exist
            .iter()
            .all(|(&letter, &min)| counts[letter_index(letter)] >= min)
            && self
                .must_not_exist
                .iter()
                .all(|(&letter, &max)| counts[letter_index(letter)] <= max)
    }

    /// Lazily filter `words`, keeping those that satisfy every constraint
    ///
    /// The returned sequence can be iterated any number of times.
    pub fn filter<I>(&self, words: I) -> Filtered<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Borrow<Word>,
    {
        Filtered::new(self, words.into_iter())
    }

    /// True when no constraint has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact_positions.iter().all(Option::is_none)
            && self.must_exist.is_empty()
            && self.must_not_exist.is_empty()
            && self.excluded_positions.is_empty()
    }

    /// Letter pinned at `position`, if any
    #[must_use]
    pub fn exact_letter(&self, position: usize) -> Option<u8> {
        self.exact_positions.get(position).copied().flatten()
    }

    /// Minimum occurrence count known for `letter`
    #[must_use]
    pub fn min_count(&self, letter: u8) -> Option<u8> {
        self.must_exist.get(&letter).copied()
    }

    /// Maximum occurrence count allowed for `letter`
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<u8> {
        self.must_not_exist.get(&letter).copied()
    }

    /// Slots where `letter` is known not to be, in ascending order
    pub fn excluded_positions(&self, letter: u8) -> impl Iterator<Item = usize> {
        positions(self.excluded_positions.get(&letter).copied().unwrap_or(0))
    }

    fn exclude(&mut self, letter: u8, position: usize) {
        *self.excluded_positions.entry(letter).or_insert(0) |= 1 << position;
    }
}

fn positions(mask: PositionMask) -> impl Iterator<Item = usize> {
    (0..WORD_LEN).filter(move |&i| mask & (1 << i) != 0)
}
