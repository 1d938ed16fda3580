//! Error types for the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Everything that can end a solving attempt
///
/// All variants but `Skipped` are fatal for the attempt that raised them. Batch
/// drivers record the error and move on to the next target.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Malformed word or feedback string (wrong length, bad characters)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Feedback symbol outside the Exact / Misplaced / Absent alphabet
    #[error("invalid annotation {symbol:?} at position {position}")]
    InvalidAnnotation { symbol: char, position: usize },

    /// Filtering left nothing to guess while the session is still unsolved
    #[error(
        "no candidates left after {guesses} guesses: feedback is inconsistent or the target is not in the vocabulary"
    )]
    ExhaustedCandidates { guesses: usize },

    /// The session refused a guess beyond its budget
    #[error("exceeded the maximal number of tries ({max_tries})")]
    TriesExceeded { max_tries: usize },

    /// The session passed on the suggestion and wants the next ranked word
    #[error("suggestion skipped")]
    Skipped,

    #[error("failed to read feedback")]
    Io(#[from] std::io::Error),
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_error_becomes_invalid_input() {
        let err: SolverError = WordError::InvalidLength(3).into();
        assert!(matches!(err, SolverError::InvalidInput(ref msg) if msg.contains("got 3")));
    }

    #[test]
    fn messages_name_the_problem() {
        let err = SolverError::InvalidAnnotation {
            symbol: 'x',
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid annotation 'x' at position 2");

        let err = SolverError::TriesExceeded { max_tries: 6 };
        assert!(err.to_string().contains('6'));
    }
}
