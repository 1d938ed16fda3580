//! Word list loading utilities
//!
//! Provides functions to load word lists and word frequencies from files or use
//! the embedded list.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::entropy::Weights;
use log::{info, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::Path;

/// Word frequencies as stored on disk: a JSON object mapping word to frequency
pub type Frequencies = FxHashMap<String, f64>;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are ignored. Lines that are not valid words are
/// skipped with a warning, duplicates are dropped keeping the first occurrence.
///
/// # Errors
///
/// Returns `SolverError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_stats_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!("skipping line {}: {trimmed:?}: {err}", line_no + 1);
                    None
                }
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_stats_solver::wordlists::loader::words_from_slice;
/// use wordle_stats_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a JSON frequency map
///
/// # Errors
///
/// Returns `SolverError::Io` if the file cannot be read and `InvalidInput` if it
/// is not a JSON object of numbers.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<Frequencies, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let frequencies: Frequencies = serde_json::from_str(&content)
        .map_err(|e| SolverError::InvalidInput(format!("{}: {e}", path.display())))?;
    info!(
        "loaded {} word frequencies from {}",
        frequencies.len(),
        path.display()
    );
    Ok(frequencies)
}

/// Turn frequencies into rank-based weights
///
/// Words are ordered by frequency, most frequent first, and the word at rank `r`
/// of `n` weighs `(1 - r/n)²`. Equal frequencies are ordered alphabetically.
#[must_use]
pub fn weights_from_frequencies(frequencies: &Frequencies) -> Weights {
    let mut by_frequency: Vec<(&String, f64)> = frequencies
        .iter()
        .map(|(word, &freq)| (word, freq))
        .collect();
    by_frequency.sort_by(|(w1, f1), (w2, f2)| f2.total_cmp(f1).then_with(|| w1.cmp(w2)));

    let n = by_frequency.len() as f64;
    by_frequency
        .into_iter()
        .enumerate()
        .map(|(rank, (word, _))| {
            let weight = (1.0 - rank as f64 / n).powi(2);
            (word.to_lowercase(), weight)
        })
        .collect()
}

/// Order words by frequency, most frequent first; unknown words go last
///
/// The sort is stable, so words with equal frequency keep their order.
pub fn sort_by_frequency(words: &mut [Word], frequencies: &Frequencies) {
    words.sort_by(|a, b| {
        let fa = frequencies.get(a.text()).map_or(f64::NEG_INFINITY, |&f| f);
        let fb = frequencies.get(b.text()).map_or(f64::NEG_INFINITY, |&f| f);
        fb.total_cmp(&fa)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn frequencies(entries: &[(&str, f64)]) -> Frequencies {
        entries.iter().map(|&(w, f)| (w.to_string(), f)).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_word_list_skips_comments_blanks_and_duplicates() {
        let words = parse_word_list("# header\ncrane\n\n  Slate \nab12c\ncrane\nhover\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "hover"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, SolverError::Io(_)));
    }

    #[test]
    fn load_frequencies_from_json() {
        let path = std::env::temp_dir().join(format!("freqs-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"crane": 0.5, "slate": 2.0}}"#).unwrap();
        drop(file);

        let freqs = load_frequencies(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(freqs.len(), 2);
        assert!((freqs["slate"] - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_frequencies_rejects_malformed_json() {
        let path = std::env::temp_dir().join(format!("bad-freqs-{}.json", std::process::id()));
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load_frequencies(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, SolverError::InvalidInput(_)));
    }

    #[test]
    fn weights_decrease_with_rank() {
        let freqs = frequencies(&[
            ("crane", 1.0),
            ("slate", 9.0),
            ("hover", 4.0),
            ("fuzzy", 0.1),
        ]);
        let weights = weights_from_frequencies(&freqs);

        assert!((weights["slate"] - 1.0).abs() < 1e-12);
        assert!((weights["hover"] - 0.5625).abs() < 1e-12);
        assert!((weights["crane"] - 0.25).abs() < 1e-12);
        assert!((weights["fuzzy"] - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn weights_of_empty_frequencies() {
        assert!(weights_from_frequencies(&Frequencies::default()).is_empty());
    }

    #[test]
    fn sort_by_frequency_puts_unknown_last() {
        let freqs = frequencies(&[("crane", 1.0), ("slate", 9.0)]);
        let mut words = words_from_slice(&["fuzzy", "crane", "slate"]);
        sort_by_frequency(&mut words, &freqs);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["slate", "crane", "fuzzy"]);
    }
}
