//! Core domain types for Wordle
//!
//! Words and the feedback computed for a guess against a target. Everything here
//! is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Annotation, Feedback};
pub(crate) use word::{ALPHABET_LEN, letter_index};
pub use word::{WORD_LEN, Word, WordError};
