//! Main Wordle solver interface

use super::entropy::{Ranked, Weights};
use super::session::{DEFAULT_MAX_TRIES, Session};
use super::strategy::{Round, Strategy};
use crate::constraints::ConstraintSet;
use crate::core::{Feedback, Word};
use crate::error::SolverError;
use log::{debug, info};

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guess budget the solver plans for; the session enforces its own
    pub max_guesses: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_TRIES,
        }
    }
}

/// One round of a solving attempt
#[derive(Debug, Clone)]
pub struct GuessStep {
    /// Feedback for the word actually played
    pub feedback: Feedback,
    /// Score of the played word in the ordering it was taken from
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Whether the word came from a full-vocabulary fallback ordering
    pub fallback: bool,
}

/// Main Wordle solver
///
/// Drives a session with the given strategy. Each attempt owns its constraints
/// and candidate list, so one solver can serve many attempts, also in parallel.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    vocabulary: &'a [Word],
    weights: Option<&'a Weights>,
    config: SolverConfig,
    opening: Vec<Ranked<'a>>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver and rank the vocabulary for the opening guess
    ///
    /// # Parameters
    /// - `strategy`: The guess ordering strategy to use
    /// - `vocabulary`: Every word that may be guessed or be the target
    /// - `weights`: Optional per-word weights for letter statistics
    /// - `config`: Solver settings
    pub fn new(
        strategy: S,
        vocabulary: &'a [Word],
        weights: Option<&'a Weights>,
        config: SolverConfig,
    ) -> Self {
        let opening = strategy.opening(vocabulary, weights);
        info!(
            "ranked {} words for the opening guess (best: {})",
            opening.len(),
            opening.first().map_or("-", |(w, _)| w.text())
        );

        Self {
            strategy,
            vocabulary,
            weights,
            config,
            opening,
        }
    }

    /// Ordering used for the first guess of every attempt
    #[must_use]
    pub fn opening(&self) -> &[Ranked<'a>] {
        &self.opening
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Play until the session is solved and return the number of guesses used
    ///
    /// # Errors
    /// - `ExhaustedCandidates` when no word is consistent with the feedback
    /// - any error raised by the session, such as `TriesExceeded`
    pub fn solve<T: Session + ?Sized>(&self, session: &mut T) -> Result<usize, SolverError> {
        self.solve_traced(session).map(|steps| steps.len())
    }

    /// Like [`Solver::solve`], recording every round
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_traced<T: Session + ?Sized>(
        &self,
        session: &mut T,
    ) -> Result<Vec<GuessStep>, SolverError> {
        let attempt = self.attempt(session);
        attempt.outcome.map(|()| attempt.steps)
    }

    /// Play until the session is solved or an error ends the attempt
    ///
    /// Unlike [`Solver::solve_traced`], the rounds played are kept on failure.
    pub fn attempt<T: Session + ?Sized>(&self, session: &mut T) -> Attempt {
        let mut steps = Vec::new();
        let outcome = self.run(session, &mut steps);
        Attempt { steps, outcome }
    }

    fn run<T: Session + ?Sized>(
        &self,
        session: &mut T,
        steps: &mut Vec<GuessStep>,
    ) -> Result<(), SolverError> {
        let mut constraints = ConstraintSet::empty();
        let mut candidates: Vec<&'a Word> = self.opening.iter().map(|&(w, _)| w).collect();
        let mut ordering = self.opening.clone();
        let mut fallback = false;
        let mut guessed: Vec<Word> = Vec::new();

        while !session.is_solved() {
            let feedback = Self::play_ordering(session, &ordering, steps.len())?;
            let played = feedback.word();
            let score = ordering
                .iter()
                .find(|(w, _)| *w == played)
                .map_or(0.0, |&(_, s)| s);

            constraints = constraints.merge(&ConstraintSet::from_feedback(&feedback));
            let candidates_before = candidates.len();
            candidates = constraints
                .filter(candidates.iter().copied())
                .collect_words();
            guessed.push(played.clone());

            debug!(
                "guess {}: {} -> {} candidates left of {}",
                guessed.len(),
                feedback,
                candidates.len(),
                candidates_before
            );

            steps.push(GuessStep {
                score,
                candidates_before,
                candidates_after: candidates.len(),
                fallback,
                feedback,
            });

            if session.is_solved() {
                break;
            }
            if candidates.is_empty() {
                return Err(SolverError::ExhaustedCandidates {
                    guesses: steps.len(),
                });
            }

            let next = self.strategy.next_ordering(&Round {
                vocabulary: self.vocabulary,
                candidates: &candidates,
                guessed: &guessed,
                guesses_left: self.config.max_guesses.saturating_sub(guessed.len()),
                weights: self.weights,
            });
            ordering = next.ranked;
            fallback = next.fallback;
        }

        Ok(())
    }

    /// Offer the ordering to the session, best first, until it plays a word
    fn play_ordering<T: Session + ?Sized>(
        session: &mut T,
        ordering: &[Ranked<'a>],
        guesses: usize,
    ) -> Result<Feedback, SolverError> {
        for &(suggested, _) in ordering {
            match session.guess(suggested) {
                Err(SolverError::Skipped) => debug!("{suggested} skipped"),
                result => return result,
            }
        }
        Err(SolverError::ExhaustedCandidates { guesses })
    }
}

/// Rounds of one solving attempt and how it ended
#[derive(Debug)]
pub struct Attempt {
    pub steps: Vec<GuessStep>,
    pub outcome: Result<(), SolverError>,
}

impl Attempt {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Word that solved the game, if any
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.steps
            .last()
            .filter(|step| self.is_solved() && step.feedback.is_solved())
            .map(|step| step.feedback.word())
    }
}
