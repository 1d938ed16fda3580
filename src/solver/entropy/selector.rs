//! Ordering of candidate guesses by score

use super::calculator::score;
use super::profile::LetterProfile;
use crate::core::Word;
use rayon::prelude::*;

/// A word with its score
pub type Ranked<'a> = (&'a Word, f64);

/// Score every word against `profile` and order them best first
///
/// The result is a permutation of the input. Equal scores keep their input order.
///
/// # Examples
/// ```
/// use wordle_stats_solver::core::Word;
/// use wordle_stats_solver::solver::entropy::{LetterProfile, rank};
///
/// let pool = vec![
///     Word::new("eerie").unwrap(),
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
/// let profile = LetterProfile::build(&pool, None);
/// let ranked = rank(&pool, &profile);
///
/// assert_eq!(ranked.len(), 3);
/// assert!(ranked[0].1 >= ranked[2].1);
/// ```
pub fn rank<'a, I>(words: I, profile: &LetterProfile) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a Word>,
{
    let words: Vec<&'a Word> = words.into_iter().collect();
    let mut ranked: Vec<Ranked<'a>> = words
        .par_iter()
        .map(|&word| (word, score(word, profile)))
        .collect();

    // stable: ties stay in input order
    ranked.sort_by(|(_, s1), (_, s2)| s2.total_cmp(s1));
    ranked
}

/// Difference between the highest and lowest score, 0 for fewer than two words
#[must_use]
pub fn score_spread(ranked: &[Ranked<'_>]) -> f64 {
    let mut scores = ranked.iter().map(|&(_, s)| s);
    let Some(first) = scores.next() else {
        return 0.0;
    };
    let (min, max) = scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
    max - min
}
