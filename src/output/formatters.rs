//! Formatting utilities for terminal output

use crate::core::{Annotation, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .annotations()
        .iter()
        .map(|annotation| match annotation {
            Annotation::Absent => '⬜',
            Annotation::Misplaced => '🟨',
            Annotation::Exact => '🟩',
        })
        .collect()
}

/// Render the guessed word with one colored tile per letter
#[must_use]
pub fn colored_tiles(feedback: &Feedback) -> String {
    feedback
        .word()
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.annotations())
        .map(|(letter, annotation)| tile(letter, *annotation).to_string())
        .collect()
}

fn tile(letter: char, annotation: Annotation) -> ColoredString {
    let text = format!(" {letter} ");
    match annotation {
        Annotation::Exact => text.black().on_green().bold(),
        Annotation::Misplaced => text.black().on_yellow().bold(),
        Annotation::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::compute(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn emoji_all_gray() {
        assert_eq!(feedback_to_emoji(&feedback("fuzzy", "crane")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_green() {
        assert_eq!(feedback_to_emoji(&feedback("crane", "crane")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(feedback_to_emoji(&feedback("allot", "apple")), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn tiles_contain_every_letter() {
        colored::control::set_override(false);
        assert_eq!(
            colored_tiles(&feedback("hover", "crane")),
            " H  O  V  E  R "
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
