//! Opening word ranking report

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Solver, Strategy};

/// One entry of the opening ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    /// 1-based position in the opening ordering
    pub rank: usize,
    pub word: String,
    pub score: f64,
}

/// The best `count` opening words
#[must_use]
pub fn top_words<S: Strategy>(solver: &Solver<'_, S>, count: usize) -> Vec<RankedWord> {
    solver
        .opening()
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, &(word, score))| RankedWord {
            rank: i + 1,
            word: word.text().to_string(),
            score,
        })
        .collect()
}

/// Position and score of `word` in the opening ordering
///
/// Returns `None` if the word is not in the vocabulary.
///
/// # Errors
///
/// Returns `InvalidInput` if `word` is not a valid word.
pub fn word_rank<S: Strategy>(
    solver: &Solver<'_, S>,
    word: &str,
) -> Result<Option<RankedWord>, SolverError> {
    let word = Word::new(word)?;
    Ok(solver
        .opening()
        .iter()
        .position(|&(w, _)| *w == word)
        .map(|i| RankedWord {
            rank: i + 1,
            word: word.text().to_string(),
            score: solver.opening()[i].1,
        }))
}
