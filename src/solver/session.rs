//! Game sessions the solver plays against
//!
//! A session evaluates guesses and knows whether the game is solved. It also owns
//! the guess budget: asking for more guesses than allowed is an error.

use crate::core::{Feedback, Word};
use crate::error::SolverError;
use log::warn;
use std::io::{self, BufRead, Write};

/// Default number of guesses a session accepts
pub const DEFAULT_MAX_TRIES: usize = 6;

/// Something that evaluates guesses
pub trait Session {
    /// Play `word` and return the feedback for it
    ///
    /// The feedback names the word actually played, which may differ from `word`
    /// for human-driven sessions.
    ///
    /// # Errors
    /// Returns `SolverError::TriesExceeded` once the guess budget is spent, and
    /// `SolverError::Skipped` to be offered the next ranked word instead.
    fn guess(&mut self, word: &Word) -> Result<Feedback, SolverError>;

    /// Whether a guess has produced all-exact feedback
    fn is_solved(&self) -> bool;
}

/// Session with a known target, evaluated automatically
#[derive(Debug, Clone)]
pub struct TargetSession {
    target: Word,
    max_tries: usize,
    guesses: Vec<Word>,
    solved: bool,
}

impl TargetSession {
    #[must_use]
    pub const fn new(target: Word, max_tries: usize) -> Self {
        Self {
            target,
            max_tries,
            guesses: Vec::new(),
            solved: false,
        }
    }

    /// Words guessed so far, in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn has_more_guesses(&self) -> bool {
        self.guesses.len() < self.max_tries
    }
}

impl Session for TargetSession {
    fn guess(&mut self, word: &Word) -> Result<Feedback, SolverError> {
        if !self.has_more_guesses() {
            return Err(SolverError::TriesExceeded {
                max_tries: self.max_tries,
            });
        }

        self.guesses.push(word.clone());
        let feedback = Feedback::compute(word, &self.target);
        self.solved |= feedback.is_solved();
        Ok(feedback)
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Session fed by a human who plays the suggestions in a real game
///
/// Each suggestion is written to `output`; a line of feedback is read from
/// `input`. A line is one of:
/// - five symbols for the suggested word, e.g. `20100` or `G-Y--`
/// - `<word> <symbols>` when another word was played instead
/// - `win` when the suggestion was correct
/// - `next` to skip the suggestion and see the next ranked word
pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
    max_tries: usize,
    tries: usize,
    solved: bool,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub const fn new(input: R, output: W, max_tries: usize) -> Self {
        Self {
            input,
            output,
            max_tries,
            tries: 0,
            solved: false,
        }
    }

    fn read_feedback(&mut self, suggested: &Word) -> Result<Feedback, SolverError> {
        loop {
            write!(
                self.output,
                "Guess {}/{}: {}\nFeedback: ",
                self.tries + 1,
                self.max_tries,
                suggested.text().to_uppercase()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "feedback input closed");
                return Err(eof.into());
            }

            match parse_feedback_line(suggested, &line) {
                Ok(feedback) => return Ok(feedback),
                Err(SolverError::Skipped) => return Err(SolverError::Skipped),
                Err(err) => {
                    warn!("rejected feedback line {:?}: {err}", line.trim());
                    writeln!(self.output, "  {err}, please try again")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Session for InteractiveSession<R, W> {
    fn guess(&mut self, word: &Word) -> Result<Feedback, SolverError> {
        if self.tries >= self.max_tries {
            return Err(SolverError::TriesExceeded {
                max_tries: self.max_tries,
            });
        }

        let feedback = self.read_feedback(word)?;
        self.tries += 1;
        self.solved |= feedback.is_solved();
        Ok(feedback)
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Parse one line of human feedback for the suggested word
///
/// # Errors
/// Returns `InvalidInput` or `InvalidAnnotation` for malformed lines, and
/// `Skipped` for a request to see the next suggestion.
pub fn parse_feedback_line(suggested: &Word, line: &str) -> Result<Feedback, SolverError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [cmd] if matches!(cmd.to_lowercase().as_str(), "win" | "solved" | "yes") => {
            Ok(Feedback::solved(suggested.clone()))
        }
        [cmd] if matches!(cmd.to_lowercase().as_str(), "next" | "n" | "skip") => {
            Err(SolverError::Skipped)
        }
        [symbols] => Feedback::parse(suggested.clone(), symbols),
        [played, symbols] => Feedback::parse(Word::new(*played)?, symbols),
        _ => Err(SolverError::InvalidInput(
            "expected feedback symbols, optionally preceded by the word played".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Annotation;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn target_session_solves_on_exact_guess() {
        let mut session = TargetSession::new(word("apple"), DEFAULT_MAX_TRIES);
        assert!(!session.is_solved());

        let feedback = session.guess(&word("allot")).unwrap();
        assert!(!feedback.is_solved());
        assert!(!session.is_solved());

        let feedback = session.guess(&word("apple")).unwrap();
        assert!(feedback.is_solved());
        assert!(session.is_solved());
        assert_eq!(session.guesses().len(), 2);
    }

    #[test]
    fn target_session_enforces_budget() {
        let mut session = TargetSession::new(word("apple"), 2);
        session.guess(&word("crane")).unwrap();
        session.guess(&word("slate")).unwrap();
        assert!(!session.has_more_guesses());

        let err = session.guess(&word("apple")).unwrap_err();
        assert!(matches!(err, SolverError::TriesExceeded { max_tries: 2 }));
    }

    #[test]
    fn parse_line_for_suggested_word() {
        let feedback = parse_feedback_line(&word("allot"), "21000\n").unwrap();
        assert_eq!(feedback.word().text(), "allot");
        assert_eq!(feedback.annotations()[0], Annotation::Exact);
    }

    #[test]
    fn parse_line_with_other_word() {
        let feedback = parse_feedback_line(&word("allot"), "crane --G-Y").unwrap();
        assert_eq!(feedback.word().text(), "crane");
        assert_eq!(feedback.to_symbols(), "00201");
    }

    #[test]
    fn parse_line_win() {
        let feedback = parse_feedback_line(&word("hover"), "WIN").unwrap();
        assert!(feedback.is_solved());
    }

    #[test]
    fn parse_line_next_skips() {
        for line in ["next", "N\n", " skip "] {
            assert!(matches!(
                parse_feedback_line(&word("hover"), line),
                Err(SolverError::Skipped)
            ));
        }
    }

    #[test]
    fn parse_line_rejects_garbage() {
        assert!(parse_feedback_line(&word("hover"), "").is_err());
        assert!(parse_feedback_line(&word("hover"), "a b c").is_err());
        assert!(matches!(
            parse_feedback_line(&word("hover"), "20x00"),
            Err(SolverError::InvalidAnnotation { symbol: 'x', .. })
        ));
    }

    #[test]
    fn interactive_session_reprompts_on_bad_input() {
        let input = b"nonsense\n20100\n" as &[u8];
        let mut output = Vec::new();
        let mut session = InteractiveSession::new(input, &mut output, DEFAULT_MAX_TRIES);

        let feedback = session.guess(&word("hover")).unwrap();
        assert_eq!(feedback.to_symbols(), "20100");
        assert!(!session.is_solved());

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Guess 1/6: HOVER").count(), 2);
    }

    #[test]
    fn interactive_session_skip_keeps_the_try() {
        let input = b"next\n00000\n" as &[u8];
        let mut output = Vec::new();
        let mut session = InteractiveSession::new(input, &mut output, DEFAULT_MAX_TRIES);

        let err = session.guess(&word("hover")).unwrap_err();
        assert!(matches!(err, SolverError::Skipped));

        let feedback = session.guess(&word("crane")).unwrap();
        assert_eq!(feedback.word().text(), "crane");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Guess 1/6: HOVER"));
        assert!(printed.contains("Guess 1/6: CRANE"));
    }

    #[test]
    fn interactive_session_eof_is_an_error() {
        let mut session = InteractiveSession::new(b"" as &[u8], Vec::new(), DEFAULT_MAX_TRIES);
        assert!(matches!(session.guess(&word("hover")), Err(SolverError::Io(_))));
    }
}
