//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Attempt, Solver, Strategy, TargetSession};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_tries: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_tries: crate::solver::DEFAULT_MAX_TRIES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub attempt: Attempt,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.attempt.is_solved()
    }
}

/// Solve a specific word using the given solver
///
/// The target does not have to be in the solver's vocabulary; if it is not, the
/// attempt ends with `ExhaustedCandidates`.
///
/// # Errors
///
/// Returns `InvalidInput` if the target is not a valid word. Failures during the
/// attempt are reported in the result, not as an error.
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<'_, S>,
) -> Result<SolveResult, SolverError> {
    let target = Word::new(config.target.as_str())?;
    let mut session = TargetSession::new(target.clone(), config.max_tries);
    let attempt = solver.attempt(&mut session);

    Ok(SolveResult { target, attempt })
}
