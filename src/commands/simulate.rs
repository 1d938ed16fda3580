//! Batch simulation over many targets
//!
//! Runs the solver against a list of target words and gathers statistics.
//! Attempts are independent, so they run in parallel.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Attempt, Solver, Strategy, TargetSession};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise}";

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Shuffle the targets with this seed before applying `limit`
    pub seed: Option<u64>,
    /// Only play the first `limit` targets
    pub limit: Option<usize>,
    /// Guess budget of every session
    pub max_tries: usize,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            limit: None,
            max_tries: crate::solver::DEFAULT_MAX_TRIES,
            show_progress: false,
        }
    }
}

/// Result of playing one target
#[derive(Debug)]
pub struct TargetResult {
    pub target: Word,
    pub attempt: Attempt,
    pub duration: Duration,
}

impl TargetResult {
    /// Guesses charged to this attempt; a failure costs one more than the budget
    #[must_use]
    pub fn charged_guesses(&self, max_tries: usize) -> usize {
        if self.attempt.is_solved() {
            self.attempt.steps.len()
        } else {
            max_tries + 1
        }
    }

    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.attempt.steps.iter().any(|step| step.fallback)
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Number of solved targets per guess count
    pub guess_distribution: BTreeMap<usize, usize>,
    /// Average guesses, counting failures as `max_tries + 1`
    pub average_guesses: f64,
    pub max_tries: usize,
    /// Attempts where at least one guess came from a full-vocabulary fallback ordering
    pub fallback_attempts: usize,
    /// Failed targets with their error
    pub failures: Vec<(String, String)>,
    /// Solved targets that took the most guesses, worst first
    pub worst_words: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Pick the targets to play
///
/// The order is kept unless a seed is given, in which case the targets are
/// shuffled deterministically. `limit` is applied after shuffling.
#[must_use]
pub fn select_targets(words: &[Word], seed: Option<u64>, limit: Option<usize>) -> Vec<Word> {
    let mut targets = words.to_vec();
    if let Some(seed) = seed {
        targets.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    targets.truncate(limit.unwrap_or(targets.len()));
    targets
}

/// Targets missing from the vocabulary
///
/// The solver only guesses vocabulary words, so these can never be solved.
#[must_use]
pub fn unreachable_targets<'t>(vocabulary: &[Word], targets: &'t [Word]) -> Vec<&'t Word> {
    let known: FxHashSet<&Word> = vocabulary.iter().collect();
    targets
        .iter()
        .filter(|target| !known.contains(target))
        .collect()
}

/// Run the solver on every target
///
/// Errors of individual attempts are recorded in their result.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<'_, S>,
    targets: &[Word],
    config: &SimulationConfig,
) -> Vec<TargetResult> {
    info!("simulating {} targets", targets.len());

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<TargetResult> = targets
        .par_iter()
        .map(|target| {
            let start = Instant::now();
            let mut session = TargetSession::new(target.clone(), config.max_tries);
            let attempt = solver.attempt(&mut session);
            if let Err(err) = &attempt.outcome {
                warn!("failed to solve {target}: {err}");
            }
            pb.inc(1);

            TargetResult {
                target: target.clone(),
                attempt,
                duration: start.elapsed(),
            }
        })
        .collect();

    pb.finish_and_clear();
    results
}

/// Summarize simulation results
#[must_use]
pub fn compute_statistics(
    results: &[TargetResult],
    max_tries: usize,
    total_time: Duration,
) -> SimulationStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut charged = 0;

    for result in results {
        charged += result.charged_guesses(max_tries);
        match &result.attempt.outcome {
            Ok(()) => {
                *guess_distribution
                    .entry(result.attempt.steps.len())
                    .or_insert(0) += 1;
            }
            Err(err) => failures.push((result.target.text().to_string(), err.to_string())),
        }
    }

    let solved = results.len() - failures.len();

    let average_guesses = if results.is_empty() {
        0.0
    } else {
        charged as f64 / results.len() as f64
    };

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.attempt.is_solved())
        .map(|r| (r.target.text().to_string(), r.attempt.steps.len()))
        .filter(|&(_, n)| n >= 5)
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    SimulationStatistics {
        total_words: results.len(),
        solved,
        failed: failures.len(),
        guess_distribution,
        average_guesses,
        max_tries,
        fallback_attempts: results.iter().filter(|r| r.used_fallback()).count(),
        failures,
        worst_words,
        total_time,
    }
}

#[derive(Serialize)]
struct RoundRecord<'r> {
    guess: &'r str,
    feedback: String,
    remaining: usize,
    fallback: bool,
}

#[derive(Serialize)]
struct AttemptRecord<'r> {
    target: &'r str,
    guesses: Vec<RoundRecord<'r>>,
    solved: bool,
    error: Option<String>,
}

impl<'r> From<&'r TargetResult> for AttemptRecord<'r> {
    fn from(result: &'r TargetResult) -> Self {
        let outcome = &result.attempt.outcome;
        Self {
            target: result.target.text(),
            guesses: result
                .attempt
                .steps
                .iter()
                .map(|step| RoundRecord {
                    guess: step.feedback.word().text(),
                    feedback: step.feedback.to_symbols(),
                    remaining: step.candidates_after,
                    fallback: step.fallback,
                })
                .collect(),
            solved: outcome.is_ok(),
            error: outcome.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Write one JSON object per target
///
/// # Errors
///
/// Returns `SolverError::Io` if writing fails.
pub fn write_jsonl<W: Write>(results: &[TargetResult], mut writer: W) -> Result<(), SolverError> {
    for result in results {
        serde_json::to_writer(&mut writer, &AttemptRecord::from(result))
            .map_err(io::Error::from)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
