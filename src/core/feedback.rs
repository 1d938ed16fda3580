//! Per-letter feedback for a guess
//!
//! Each slot of a guess receives one of three annotations:
//! - `Absent` (0): letter not in the target, or all its occurrences already credited
//! - `Misplaced` (1): letter in the target at another position
//! - `Exact` (2): letter in the target at this position

use super::word::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use crate::error::SolverError;
use std::fmt;

/// Feedback value for a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    Absent,
    Misplaced,
    Exact,
}

impl Annotation {
    /// Parse a single feedback symbol
    ///
    /// Accepts digits (`0`/`1`/`2`) and letters (`-`/`Y`/`G`).
    ///
    /// # Errors
    /// Returns `SolverError::InvalidAnnotation` for any other symbol.
    pub fn from_symbol(symbol: char, position: usize) -> Result<Self, SolverError> {
        match symbol {
            '2' | 'G' | 'g' => Ok(Self::Exact),
            '1' | 'Y' | 'y' => Ok(Self::Misplaced),
            '0' | '-' | '_' | '.' => Ok(Self::Absent),
            _ => Err(SolverError::InvalidAnnotation { symbol, position }),
        }
    }

    /// Digit form used when reading and writing feedback
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Misplaced => '1',
            Self::Exact => '2',
        }
    }
}

/// A guess together with its annotations
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    word: Word,
    annotations: [Annotation; WORD_LEN],
}

impl Feedback {
    /// Create feedback from already known annotations
    #[must_use]
    pub const fn new(word: Word, annotations: [Annotation; WORD_LEN]) -> Self {
        Self { word, annotations }
    }

    /// All-`Exact` feedback for `word`
    #[must_use]
    pub const fn solved(word: Word) -> Self {
        Self::new(word, [Annotation::Exact; WORD_LEN])
    }

    /// Compute the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target's letter pool
    /// 2. Second pass, left to right: mark misplaced while the pool still holds the letter
    /// 3. Everything left is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_stats_solver::core::{Annotation, Feedback, Word};
    ///
    /// let guess = Word::new("allot").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::compute(&guess, &target);
    ///
    /// use Annotation::{Absent, Exact, Misplaced};
    /// assert_eq!(feedback.annotations(), &[Exact, Misplaced, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        if guess == target {
            return Self::solved(guess.clone());
        }

        let mut result: [Option<Annotation>; WORD_LEN] = [None; WORD_LEN];
        let mut available = target.letter_counts();

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                *slot = Some(Annotation::Exact);
                available[letter_index(letter)] -= 1;
            }
        }

        for (i, slot) in result.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let count = &mut available[letter_index(guess.char_at(i))];
            if *count > 0 {
                *slot = Some(Annotation::Misplaced);
                *count -= 1;
            }
        }

        let annotations = result.map(|a| a.unwrap_or(Annotation::Absent));
        Self::new(guess.clone(), annotations)
    }

    /// Build feedback for `word` from a 5-symbol string such as `"20100"` or `"G-Y--"`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` when the symbol count is not 5 and
    /// `SolverError::InvalidAnnotation` for unknown symbols.
    pub fn parse(word: Word, symbols: &str) -> Result<Self, SolverError> {
        let symbols: Vec<char> = symbols.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(SolverError::InvalidInput(format!(
                "expected {WORD_LEN} feedback symbols, got {}",
                symbols.len()
            )));
        }

        let mut annotations = [Annotation::Absent; WORD_LEN];
        for (i, (slot, &symbol)) in annotations.iter_mut().zip(&symbols).enumerate() {
            *slot = Annotation::from_symbol(symbol, i)?;
        }

        Ok(Self::new(word, annotations))
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Annotation per letter slot
    #[inline]
    #[must_use]
    pub const fn annotations(&self) -> &[Annotation; WORD_LEN] {
        &self.annotations
    }

    /// True iff every slot is `Exact`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.annotations.iter().all(|&a| a == Annotation::Exact)
    }

    /// Digit string such as `"20100"`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.annotations.iter().map(|a| a.digit()).collect()
    }

    /// Slots credited as `Exact` or `Misplaced`, per letter
    #[must_use]
    pub fn credited_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for (&letter, &annotation) in self.word.chars().iter().zip(&self.annotations) {
            if annotation != Annotation::Absent {
                counts[letter_index(letter)] += 1;
            }
        }
        counts
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.to_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Annotation::{Absent, Exact, Misplaced};

    fn compute(guess: &str, target: &str) -> Feedback {
        Feedback::compute(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn same_word_is_solved() {
        for word in ["crane", "apple", "aaaaa", "hover"] {
            let feedback = compute(word, word);
            assert!(feedback.is_solved());
            assert_eq!(feedback.to_symbols(), "22222");
        }
    }

    #[test]
    fn allot_against_apple() {
        // Only one 'l' in the target, credited to the leftmost 'l' of the guess
        let feedback = compute("allot", "apple");
        assert_eq!(
            feedback.annotations(),
            &[Exact, Misplaced, Absent, Absent, Absent]
        );
        assert!(!feedback.is_solved());
    }

    #[test]
    fn all_absent() {
        let feedback = compute("abcde", "fghij");
        assert_eq!(feedback.annotations(), &[Absent; WORD_LEN]);
    }

    #[test]
    fn exact_takes_priority_over_misplaced() {
        // ROBOT vs FLOOR: second O is exact, first O only misplaced
        let feedback = compute("robot", "floor");
        assert_eq!(
            feedback.annotations(),
            &[Misplaced, Misplaced, Absent, Exact, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_misplaced() {
        // SPEED vs ERASE: target holds two E's, both credited
        let feedback = compute("speed", "erase");
        assert_eq!(
            feedback.annotations(),
            &[Misplaced, Absent, Misplaced, Misplaced, Absent]
        );
    }

    #[test]
    fn credited_never_exceeds_target_count() {
        let pairs = [
            ("allot", "apple"),
            ("speed", "erase"),
            ("eerie", "where"),
            ("lolly", "hello"),
            ("aaaaa", "apple"),
            ("geese", "sheet"),
        ];
        for (guess, target) in pairs {
            let feedback = compute(guess, target);
            let credited = feedback.credited_counts();
            let available = Word::new(target).unwrap().letter_counts();
            for (c, a) in credited.iter().zip(&available) {
                assert!(c <= a, "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn parse_digits_and_letters() {
        let word = Word::new("allot").unwrap();
        let digits = Feedback::parse(word.clone(), "21000").unwrap();
        let letters = Feedback::parse(word, "GY---").unwrap();
        assert_eq!(digits, letters);
        assert_eq!(digits.to_symbols(), "21000");
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        let word = Word::new("allot").unwrap();
        let err = Feedback::parse(word, "21x00").unwrap_err();
        assert!(matches!(
            err,
            SolverError::InvalidAnnotation {
                symbol: 'x',
                position: 2
            }
        ));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let word = Word::new("allot").unwrap();
        let err = Feedback::parse(word, "2100").unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(_)));
    }
}
