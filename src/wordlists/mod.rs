//! Word lists for Wordle solving
//!
//! Provides the embedded default vocabulary and loaders for word and frequency
//! files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
