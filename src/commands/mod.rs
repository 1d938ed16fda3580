//! Command implementations

pub mod play;
pub mod rank;
pub mod simulate;
pub mod solve;

pub use play::{ask_play_again, play_game};
pub use rank::{RankedWord, top_words, word_rank};
pub use simulate::{
    SimulationConfig, SimulationStatistics, TargetResult, compute_statistics, run_simulation,
    select_targets, unreachable_targets, write_jsonl,
};
pub use solve::{SolveConfig, SolveResult, solve_word};
