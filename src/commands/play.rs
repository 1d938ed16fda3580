//! Human-fed solving: the solver suggests, the player reports feedback

use crate::error::SolverError;
use crate::solver::{Attempt, InteractiveSession, Solver, Strategy};
use std::io::{BufRead, Write};

/// Play one game, reading feedback from `input`
pub fn play_game<S, R, W>(
    solver: &Solver<'_, S>,
    input: &mut R,
    output: &mut W,
    max_tries: usize,
) -> Attempt
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let mut session = InteractiveSession::new(input, output, max_tries);
    solver.attempt(&mut session)
}

/// Ask whether to play another word
///
/// # Errors
///
/// Returns `SolverError::Io` if the prompt cannot be written or read.
pub fn ask_play_again<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<bool, SolverError> {
    write!(output, "Play another word? [y/N] ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
