//! Guess ordering strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::{LetterProfile, Ranked, Weights, rank, score_spread};
use crate::core::Word;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Default score spread (bits) below which the entropy strategy falls back to the full vocabulary
pub const DEFAULT_MIN_GAIN_DIFF: f64 = 0.5;

/// Default seed for the naive strategy's shuffle
pub const DEFAULT_SEED: u64 = 1919;

/// State of a solving attempt after a round of feedback
pub struct Round<'s, 'a> {
    /// Full vocabulary the solver was built with
    pub vocabulary: &'a [Word],
    /// Words still consistent with every constraint, in current order
    pub candidates: &'s [&'a Word],
    /// Words already played in this attempt
    pub guessed: &'s [Word],
    /// Guesses the budget still allows
    pub guesses_left: usize,
    pub weights: Option<&'s Weights>,
}

/// Ordered guesses for the next round
#[derive(Debug, Clone, Default)]
pub struct GuessOrdering<'a> {
    pub ranked: Vec<Ranked<'a>>,
    /// Whether the ordering ranks the whole vocabulary instead of the candidates
    pub fallback: bool,
}

/// A way of ordering guesses
pub trait Strategy {
    /// Ordering of the vocabulary for the first guess
    fn opening<'a>(&self, vocabulary: &'a [Word], weights: Option<&Weights>) -> Vec<Ranked<'a>>;

    /// Ordering for the next guess after a round of feedback
    fn next_ordering<'a>(&self, round: &Round<'_, 'a>) -> GuessOrdering<'a>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Letter-statistics entropy ranking (default)
    Entropy(EntropyStrategy),
    /// Seeded shuffle, filtered each round
    Naive(NaiveStrategy),
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "naive". Defaults to entropy if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "naive" | "random" => Self::Naive(NaiveStrategy::default()),
            _ => Self::Entropy(EntropyStrategy::default()),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy::default())
    }
}

impl Strategy for StrategyType {
    fn opening<'a>(&self, vocabulary: &'a [Word], weights: Option<&Weights>) -> Vec<Ranked<'a>> {
        match self {
            Self::Entropy(s) => s.opening(vocabulary, weights),
            Self::Naive(s) => s.opening(vocabulary, weights),
        }
    }

    fn next_ordering<'a>(&self, round: &Round<'_, 'a>) -> GuessOrdering<'a> {
        match self {
            Self::Entropy(s) => s.next_ordering(round),
            Self::Naive(s) => s.next_ordering(round),
        }
    }
}

/// Rank candidates by letter-statistics entropy
///
/// When many candidates remain, the guess budget cannot cover them one by one,
/// and their scores barely differ, the whole vocabulary is ranked instead so that
/// the next guess splits the candidates as much as possible.
#[derive(Debug, Clone, Copy)]
pub struct EntropyStrategy {
    /// Score spread (bits) at or below which candidates count as indistinguishable
    pub min_gain_diff: f64,
}

impl EntropyStrategy {
    #[must_use]
    pub const fn new(min_gain_diff: f64) -> Self {
        Self { min_gain_diff }
    }

    /// Whether the candidates are too many and too alike to play one by one
    ///
    /// Candidates the weights know nothing about all score zero. Ranking the
    /// vocabulary against such a profile cannot split them, so they are played in order.
    fn should_fall_back(
        self,
        round: &Round<'_, '_>,
        profile: &LetterProfile,
        ranked: &[Ranked<'_>],
    ) -> bool {
        let remaining = round.candidates.len();
        remaining > 2
            && remaining > round.guesses_left
            && !profile.is_empty()
            && score_spread(ranked) <= self.min_gain_diff
    }
}

impl Default for EntropyStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_GAIN_DIFF)
    }
}

impl Strategy for EntropyStrategy {
    fn opening<'a>(&self, vocabulary: &'a [Word], weights: Option<&Weights>) -> Vec<Ranked<'a>> {
        let profile = LetterProfile::build(vocabulary, weights);
        rank(vocabulary, &profile)
    }

    fn next_ordering<'a>(&self, round: &Round<'_, 'a>) -> GuessOrdering<'a> {
        let profile = LetterProfile::build(round.candidates.iter().copied(), round.weights);
        let ranked = rank(round.candidates.iter().copied(), &profile);

        if !self.should_fall_back(round, &profile, &ranked) {
            return GuessOrdering {
                ranked,
                fallback: false,
            };
        }

        debug!(
            "{} candidates within {:.3} bits and {} guesses left, ranking the full vocabulary",
            round.candidates.len(),
            score_spread(&ranked),
            round.guesses_left
        );
        let unguessed = round
            .vocabulary
            .iter()
            .filter(|word| !round.guessed.contains(word));
        GuessOrdering {
            ranked: rank(unguessed, &profile),
            fallback: true,
        }
    }
}

/// Play candidates in a fixed pseudo-random order
#[derive(Debug, Clone, Copy)]
pub struct NaiveStrategy {
    pub seed: u64,
}

impl NaiveStrategy {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Strategy for NaiveStrategy {
    fn opening<'a>(&self, vocabulary: &'a [Word], _weights: Option<&Weights>) -> Vec<Ranked<'a>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut words: Vec<&'a Word> = vocabulary.iter().collect();
        words.shuffle(&mut rng);
        words.into_iter().map(|word| (word, 0.0)).collect()
    }

    fn next_ordering<'a>(&self, round: &Round<'_, 'a>) -> GuessOrdering<'a> {
        GuessOrdering {
            ranked: round.candidates.iter().map(|&word| (word, 0.0)).collect(),
            fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUND: &[&str] = &[
        "bound", "found", "hound", "mound", "pound", "round", "sound", "wound",
    ];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn round<'s, 'a>(
        vocabulary: &'a [Word],
        candidates: &'s [&'a Word],
        guessed: &'s [Word],
        guesses_left: usize,
    ) -> Round<'s, 'a> {
        Round {
            vocabulary,
            candidates,
            guessed,
            guesses_left,
            weights: None,
        }
    }

    #[test]
    fn from_name_selects_strategy() {
        assert!(matches!(StrategyType::from_name("naive"), StrategyType::Naive(_)));
        assert!(matches!(StrategyType::from_name("entropy"), StrategyType::Entropy(_)));
        assert!(matches!(StrategyType::from_name("bogus"), StrategyType::Entropy(_)));
    }

    #[test]
    fn entropy_opening_ranks_whole_vocabulary() {
        let vocabulary = words(&["eerie", "crane", "slate", "fuzzy"]);
        let opening = EntropyStrategy::default().opening(&vocabulary, None);
        assert_eq!(opening.len(), vocabulary.len());
        assert!(opening.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn entropy_ranks_candidates_when_budget_suffices() {
        let vocabulary = words(&[OUND, &["bumph"][..]].concat());
        let candidates: Vec<&Word> = vocabulary[..8].iter().collect();
        let strategy = EntropyStrategy::default();
        let ordering = strategy.next_ordering(&round(&vocabulary, &candidates, &[], 10));

        assert!(!ordering.fallback);
        assert_eq!(ordering.ranked.len(), 8);
    }

    #[test]
    fn entropy_falls_back_when_candidates_are_indistinguishable() {
        // -ound words only differ in the first letter, each seen once
        let vocabulary = words(&[OUND, &["whomp", "fresh"][..]].concat());
        let candidates: Vec<&Word> = vocabulary[..8].iter().collect();
        let guessed = words(&["fresh"]);
        let strategy = EntropyStrategy::default();
        let ordering = strategy.next_ordering(&round(&vocabulary, &candidates, &guessed, 3));

        assert!(ordering.fallback);
        assert_eq!(ordering.ranked.len(), vocabulary.len() - 1);
        assert!(ordering.ranked.iter().all(|(w, _)| w.text() != "fresh"));
        // a word hitting several first letters beats any single candidate
        assert_eq!(ordering.ranked[0].0.text(), "whomp");
    }

    #[test]
    fn entropy_never_falls_back_with_two_candidates() {
        let vocabulary = words(&["bound", "found", "whomp"]);
        let candidates: Vec<&Word> = vocabulary[..2].iter().collect();
        let strategy = EntropyStrategy::default();
        let ordering = strategy.next_ordering(&round(&vocabulary, &candidates, &[], 1));
        assert!(!ordering.fallback);
    }

    #[test]
    fn entropy_plays_candidates_the_weights_ignore() {
        let vocabulary = words(&[&["crane", "zonal"][..], OUND].concat());
        let weights: Weights = [("crane", 1.0), ("zonal", 0.25)]
            .into_iter()
            .map(|(word, weight)| (word.to_string(), weight))
            .collect();
        let candidates: Vec<&Word> = vocabulary[2..].iter().collect();
        let stuck = Round {
            weights: Some(&weights),
            ..round(&vocabulary, &candidates, &[], 3)
        };

        let ordering = EntropyStrategy::default().next_ordering(&stuck);
        assert!(!ordering.fallback);
        for &(_, score) in &ordering.ranked {
            assert!(score.abs() < f64::EPSILON);
        }

        let order: Vec<&str> = ordering.ranked.iter().map(|(w, _)| w.text()).collect();
        let expected: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn naive_opening_is_a_seeded_permutation() {
        let vocabulary = words(&["crane", "slate", "irate", "trace", "fuzzy", "apple"]);
        let first = NaiveStrategy::new(7).opening(&vocabulary, None);
        let second = NaiveStrategy::new(7).opening(&vocabulary, None);

        assert_eq!(first, second);
        assert_eq!(first.len(), vocabulary.len());
        for word in &vocabulary {
            assert!(first.iter().any(|(w, _)| *w == word));
        }
    }

    #[test]
    fn naive_keeps_candidate_order() {
        let vocabulary = words(&["crane", "slate", "irate"]);
        let candidates: Vec<&Word> = vec![&vocabulary[2], &vocabulary[0]];
        let strategy = NaiveStrategy::default();
        let ordering = strategy.next_ordering(&round(&vocabulary, &candidates, &[], 6));
        let order: Vec<&str> = ordering.ranked.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, vec!["irate", "crane"]);
    }
}
