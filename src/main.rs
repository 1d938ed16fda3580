//! Wordle Solver - CLI
//!
//! Suggests guesses ranked by letter-statistics entropy, solves known targets and
//! simulates whole word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use wordle_stats_solver::{
    commands::{
        SimulationConfig, SolveConfig, ask_play_again, compute_statistics, play_game,
        run_simulation, select_targets, solve_word, top_words, unreachable_targets, word_rank,
        write_jsonl,
    },
    core::Word,
    output::{
        print_attempt_outcome, print_rank_report, print_simulation_statistics, print_solve_result,
    },
    solver::{
        DEFAULT_MAX_TRIES, EntropyStrategy, NaiveStrategy, Solver, SolverConfig, Strategy,
        StrategyType, entropy::Weights,
        strategy::{DEFAULT_MIN_GAIN_DIFF, DEFAULT_SEED},
    },
    wordlists::{
        WORDS,
        loader::{
            load_frequencies, load_from_file, sort_by_frequency, weights_from_frequencies,
            words_from_slice,
        },
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_stats_solver",
    about = "Wordle solver ranking guesses by letter-statistics entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default) or naive
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// JSON file mapping words to frequencies, used to weight letter statistics
    #[arg(short = 'f', long, global = true)]
    freqs: Option<PathBuf>,

    /// Guess budget of every game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_TRIES)]
    max_guesses: usize,

    /// Score spread (bits) at or below which the entropy strategy ranks the whole vocabulary
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_GAIN_DIFF)]
    min_gain_diff: f64,

    /// Seed of the naive strategy's shuffle
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a real game: enter the feedback for each suggestion (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver on many targets and report statistics
    Simulate {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Shuffle targets with this seed before applying the limit
        #[arg(long)]
        shuffle: Option<u64>,

        /// Write one JSON line per target to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Answer list to draw targets from, one word per line (default: the word list)
        #[arg(short, long)]
        targets: Option<PathBuf>,
    },

    /// Show the best opening words, or the rank of one word
    Rank {
        /// Word to look up
        word: Option<String>,

        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

/// Word list, weights and frequencies shared by all commands
struct Vocabulary {
    words: Vec<Word>,
    weights: Option<Weights>,
}

fn load_vocabulary(words_path: Option<&Path>, freqs_path: Option<&Path>) -> Result<Vocabulary> {
    let mut words = match words_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    anyhow::ensure!(!words.is_empty(), "the word list is empty");

    let weights = match freqs_path {
        Some(path) => {
            let frequencies = load_frequencies(path)
                .with_context(|| format!("failed to load frequencies {}", path.display()))?;
            sort_by_frequency(&mut words, &frequencies);
            Some(weights_from_frequencies(&frequencies))
        }
        None => None,
    };

    Ok(Vocabulary { words, weights })
}

fn build_strategy(cli: &Cli) -> StrategyType {
    match StrategyType::from_name(&cli.strategy) {
        StrategyType::Entropy(_) => StrategyType::Entropy(EntropyStrategy::new(cli.min_gain_diff)),
        StrategyType::Naive(_) => StrategyType::Naive(NaiveStrategy::new(cli.seed)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let vocabulary = load_vocabulary(cli.words.as_deref(), cli.freqs.as_deref())?;
    let config = SolverConfig {
        max_guesses: cli.max_guesses,
    };
    let solver = Solver::new(
        build_strategy(&cli),
        &vocabulary.words,
        vocabulary.weights.as_ref(),
        config,
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play_command(&solver),
        Commands::Solve { word, verbose } => solve_command(&solver, &word, verbose),
        Commands::Simulate {
            limit,
            shuffle,
            output,
            targets,
        } => simulate_command(
            &solver,
            targets.as_deref(),
            limit,
            shuffle,
            output.as_deref(),
        ),
        Commands::Rank { word, count } => rank_command(&solver, word.as_deref(), count),
    }
}

fn solve_command<S: Strategy>(solver: &Solver<'_, S>, word: &str, verbose: bool) -> Result<()> {
    let config = SolveConfig {
        target: word.to_string(),
        max_tries: solver.config().max_guesses,
    };
    let result = solve_word(&config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn simulate_command<S: Strategy + Sync>(
    solver: &Solver<'_, S>,
    targets_path: Option<&Path>,
    limit: Option<usize>,
    shuffle: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let config = SimulationConfig {
        seed: shuffle,
        limit,
        max_tries: solver.config().max_guesses,
        show_progress: true,
    };
    let answers = match targets_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load target list {}", path.display()))?,
        None => solver.vocabulary().to_vec(),
    };
    let unreachable = unreachable_targets(solver.vocabulary(), &answers);
    if !unreachable.is_empty() {
        println!(
            "{} {} targets are not in the word list and cannot be solved",
            "warning:".yellow().bold(),
            unreachable.len()
        );
    }
    let targets = select_targets(&answers, config.seed, config.limit);

    println!("🎯 Testing {} words...", targets.len());
    let start = Instant::now();
    let results = run_simulation(solver, &targets, &config);
    let stats = compute_statistics(&results, config.max_tries, start.elapsed());
    print_simulation_statistics(&stats);

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_jsonl(&results, BufWriter::new(file))?;
        println!("\nResults written to {}", path.display());
    }
    Ok(())
}

fn rank_command<S: Strategy>(
    solver: &Solver<'_, S>,
    word: Option<&str>,
    count: usize,
) -> Result<()> {
    let vocabulary_size = solver.vocabulary().len();
    match word {
        Some(word) => match word_rank(solver, word)? {
            Some(entry) => print_rank_report(&[entry], vocabulary_size),
            None => println!("{} is not in the word list", word.to_uppercase().red()),
        },
        None => print_rank_report(&top_words(solver, count), vocabulary_size),
    }
    Ok(())
}

fn play_command<S: Strategy>(solver: &Solver<'_, S>) -> Result<()> {
    println!(
        "\n{}",
        "Wordle Solver - Interactive Mode".bright_cyan().bold()
    );
    println!("After each suggestion, enter the feedback for it:");
    println!("  - 2/G for green (correct position)");
    println!("  - 1/Y for yellow (wrong position)");
    println!("  - 0/- for gray (not in word)");
    println!("  - '<word> <feedback>' if you played another word");
    println!("  - 'next' to skip the suggestion");
    println!("  - 'win' if the suggestion was right\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let attempt = play_game(solver, &mut input, &mut output, solver.config().max_guesses);
        print_attempt_outcome(&attempt);

        if !ask_play_again(&mut input, &mut output)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!();
    }
}
