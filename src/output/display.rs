//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, feedback_to_emoji};
use crate::commands::{RankedWord, SimulationStatistics, SolveResult};
use crate::solver::{Attempt, GuessStep};
use colored::Colorize;

fn print_step(turn: usize, step: &GuessStep, verbose: bool) {
    let fallback = if step.fallback {
        " (fallback)".bright_black().to_string()
    } else {
        String::new()
    };
    println!(
        "\nTurn {turn}: {} {}{fallback}",
        colored_tiles(&step.feedback),
        feedback_to_emoji(&step.feedback)
    );

    if verbose {
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
        println!("  Score:      {:.3} bits", step.score);
    }
}

/// Print how an attempt ended
pub fn print_attempt_outcome(attempt: &Attempt) {
    println!();
    match &attempt.outcome {
        Ok(()) => println!(
            "{}",
            format!("✅ Solved in {} guesses!", attempt.steps.len())
                .green()
                .bold()
        ),
        Err(err) => println!(
            "{}",
            format!("❌ Failed after {} guesses: {err}", attempt.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.attempt.steps.iter().enumerate() {
        print_step(i + 1, step, verbose);
    }

    print_attempt_outcome(&result.attempt);
}

/// Print the opening ranking
pub fn print_rank_report(entries: &[RankedWord], vocabulary_size: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({vocabulary_size} words)",
        "OPENING RANKING".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let best = entries.first().map_or(0.0, |entry| entry.score);
    for entry in entries {
        let bar = create_progress_bar(entry.score, best, 30);
        println!(
            "  {:>5}. {}  [{}] {}",
            entry.rank,
            entry.word.to_uppercase().bright_yellow(),
            bar.green(),
            format!("{:.3} bits", entry.score).bright_white()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {} {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold(),
        format!("(failures count as {})", stats.max_tries + 1).bright_black()
    );
    println!("  Used a fallback:     {}", stats.fallback_attempts);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (word, error) in stats.failures.iter().take(10) {
            println!("  {}: {error}", word.to_uppercase().red());
        }
    }
}
