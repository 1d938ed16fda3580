//! Wordle Solver
//!
//! A Wordle solving engine that ranks guesses by the entropy of per-letter
//! feedback, estimated from letter statistics of the words still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_stats_solver::core::Word;
//! use wordle_stats_solver::solver::{EntropyStrategy, Solver, SolverConfig, TargetSession};
//!
//! let vocabulary: Vec<Word> = ["crane", "slate", "hover", "apple"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let config = SolverConfig::default();
//! let solver = Solver::new(EntropyStrategy::default(), &vocabulary, None, config);
//! let mut session = TargetSession::new(Word::new("hover").unwrap(), 6);
//!
//! let guesses = solver.solve(&mut session).unwrap();
//! assert!(guesses <= 4);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Constraint accumulation and candidate filtering
pub mod constraints;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
