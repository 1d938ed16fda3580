//! Entropy-based ranking of guesses
//!
//! Builds letter statistics over a reference list and scores guesses by the
//! expected information their per-letter feedback carries.

mod calculator;
mod profile;
mod selector;

pub use calculator::{letter_entropy, score, shannon_entropy};
pub use profile::{LetterProfile, LetterStats, REPEAT_BUCKETS, Weights};
pub use selector::{Ranked, rank, score_spread};
