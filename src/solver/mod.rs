//! Wordle solving algorithms
//!
//! The solving loop, the sessions it plays against and the strategies that order
//! its guesses.

mod engine;
pub mod entropy;
pub mod session;
pub mod strategy;

pub use engine::{Attempt, GuessStep, Solver, SolverConfig};
pub use session::{DEFAULT_MAX_TRIES, InteractiveSession, Session, TargetSession};
pub use strategy::{EntropyStrategy, GuessOrdering, NaiveStrategy, Round, Strategy, StrategyType};
