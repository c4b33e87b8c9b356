//! Text statistics: counts, averages and the most common words.

use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Hardcoded sentence regex pattern should always compile"));

const STRIP_CHARS: &[char] = &['.', ',', '!', '?', '"', ';', ':', '(', ')', '[', ']', '{', '}'];

pub const PREVIEW_CHARS: usize = 500;
const TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub total_characters: usize,
    pub total_characters_no_spaces: usize,
    pub total_spaces: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub total_sentences: usize,
    pub total_paragraphs: usize,
    pub total_lines: usize,
    pub avg_words_per_sentence: f64,
    pub avg_characters_per_word: f64,
    pub top_words: Vec<(String, usize)>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round2(numerator as f64 / denominator as f64)
    }
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase().trim_matches(STRIP_CHARS).to_string()
}

/// Compute statistics for `text`.
pub fn analyze(text: &str) -> TextStats {
    let total_characters = text.chars().count();
    let total_spaces = text.chars().filter(|c| *c == ' ').count();
    let total_characters_no_spaces = total_characters - total_spaces;

    let words: Vec<&str> = text.split_whitespace().collect();
    let total_sentences = SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let total_paragraphs = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();
    let total_lines = text.split('\n').count();

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for word in &words {
        let normalized = normalize_word(word);
        if normalized.is_empty() {
            continue;
        }
        *counts.entry(normalized).or_insert(0) += 1;
    }
    let unique_words = counts.len();
    let mut top_words: Vec<(String, usize)> = counts.into_iter().collect();
    top_words.sort_by(|a, b| b.1.cmp(&a.1));
    top_words.truncate(TOP_WORDS);

    TextStats {
        total_characters,
        total_characters_no_spaces,
        total_spaces,
        total_words: words.len(),
        unique_words,
        total_sentences,
        total_paragraphs,
        total_lines,
        avg_words_per_sentence: ratio(words.len(), total_sentences),
        avg_characters_per_word: ratio(total_characters_no_spaces, words.len()),
        top_words,
    }
}

/// Read a file as UTF-8, falling back to Latin-1 for legacy encodings.
pub fn read_with_fallback(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KitError::NotFound(format!("File {} not found.", path.display()))
        } else {
            KitError::Io(e)
        }
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!(path = %path.display(), "not UTF-8, decoding as Latin-1");
            Ok(err.into_bytes().iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// First `limit` characters, with a marker when the text was cut.
pub fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push_str("\n\n... (text truncated, use --full to see all)");
    cut
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl TextStats {
    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_characters", self.total_characters.to_string()),
            ("total_characters_no_spaces", self.total_characters_no_spaces.to_string()),
            ("total_spaces", self.total_spaces.to_string()),
            ("total_words", self.total_words.to_string()),
            ("unique_words", self.unique_words.to_string()),
            ("total_sentences", self.total_sentences.to_string()),
            ("total_paragraphs", self.total_paragraphs.to_string()),
            ("total_lines", self.total_lines.to_string()),
            ("avg_words_per_sentence", self.avg_words_per_sentence.to_string()),
            ("avg_characters_per_word", self.avg_characters_per_word.to_string()),
        ]
    }

    /// Counts and averages in a fixed-width layout.
    pub fn render_basic(&self) -> String {
        let rule = "─".repeat(50);
        let mut out = String::new();
        let _ = writeln!(out, "BASIC STATISTICS:\n{rule}");
        let rows = [
            ("Total characters (with spaces):", thousands(self.total_characters)),
            ("Total characters (without spaces):", thousands(self.total_characters_no_spaces)),
            ("Total spaces:", thousands(self.total_spaces)),
            ("Total words:", thousands(self.total_words)),
            ("Unique words:", thousands(self.unique_words)),
            ("Total sentences:", thousands(self.total_sentences)),
            ("Total paragraphs:", thousands(self.total_paragraphs)),
            ("Total lines:", thousands(self.total_lines)),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "{label:<35}{value}");
        }
        let _ = writeln!(out, "\nAVERAGES:\n{}", "─".repeat(20));
        let _ = writeln!(out, "{:<35}{}", "Average words per sentence:", self.avg_words_per_sentence);
        let _ = writeln!(out, "{:<35}{}", "Average characters per word:", self.avg_characters_per_word);
        out
    }

    /// Every field plus the top-word table.
    pub fn render_detailed(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "DETAILED TEXT ANALYSIS RESULTS\n{}\n", "═".repeat(60));
        let _ = writeln!(out, "BASIC STATISTICS:\n{}", "─".repeat(25));
        for (key, value) in self.scalar_fields() {
            let _ = writeln!(out, "{:<30}: {:>10}", title_case_key(key), value);
        }
        let _ = writeln!(out, "\nTOP {} MOST COMMON WORDS:\n{}", TOP_WORDS, "─".repeat(35));
        for (word, count) in &self.top_words {
            let _ = writeln!(out, "{word:<20} : {count:>3} times");
        }
        out
    }

    /// Plain-text report naming the analysed source.
    pub fn write_report(&self, path: &Path, source: &str) -> Result<()> {
        let mut out = String::new();
        let _ = writeln!(out, "TEXT ANALYSIS RESULTS\n{}", "=".repeat(50));
        let _ = writeln!(out, "File analyzed: {source}\n");
        for (key, value) in self.scalar_fields() {
            let _ = writeln!(out, "{key}: {value}");
        }
        let _ = writeln!(out, "\nTop {TOP_WORDS} most common words:");
        for (word, count) in &self.top_words {
            let _ = writeln!(out, "  {word}: {count}");
        }
        kit_core::file_system::ensure_parent_dir(path)?;
        fs::write(path, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_a_small_document() {
        let stats = analyze("One two. Three!\n\nFour");
        assert_eq!(stats.total_characters, 21);
        assert_eq!(stats.total_spaces, 2);
        assert_eq!(stats.total_characters_no_spaces, 19);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.unique_words, 4);
        assert_eq!(stats.total_sentences, 3);
        assert_eq!(stats.total_paragraphs, 2);
        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.avg_words_per_sentence, 1.33);
        assert_eq!(stats.avg_characters_per_word, 4.75);
    }

    #[test]
    fn top_words_strip_punctuation() {
        let stats = analyze("Cats, cats! CATS? dogs (dogs) bird");
        assert_eq!(stats.top_words[0], ("cats".to_string(), 3));
        assert_eq!(stats.top_words[1], ("dogs".to_string(), 2));
        assert_eq!(stats.unique_words, 3);
    }

    #[test]
    fn empty_text_has_zero_averages() {
        let stats = analyze("");
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.total_sentences, 0);
        assert_eq!(stats.avg_words_per_sentence, 0.0);
        assert_eq!(stats.avg_characters_per_word, 0.0);
        assert_eq!(stats.total_lines, 1);
    }

    #[test]
    fn latin1_files_are_decoded() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("legacy.txt");
        fs::write(&path, [b'c', b'a', b'f', 0xE9]).expect("should write");
        assert_eq!(read_with_fallback(&path).expect("should decode"), "café");
    }

    #[test]
    fn preview_marks_truncation() {
        let long = "x".repeat(600);
        let cut = preview(&long, PREVIEW_CHARS);
        assert!(cut.starts_with(&"x".repeat(500)));
        assert!(cut.contains("truncated"));
        assert_eq!(preview("short", PREVIEW_CHARS), "short");
    }

    #[test]
    fn renderings_include_key_figures() {
        let stats = analyze("alpha beta alpha");
        assert!(stats.render_basic().contains("Total words:"));
        let detailed = stats.render_detailed();
        assert!(detailed.contains("Total Words"));
        assert!(detailed.contains("alpha"));
    }

    #[test]
    fn report_file_lists_fields() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("out").join("report.txt");
        analyze("a b a").write_report(&path, "input.txt").expect("should write");
        let content = fs::read_to_string(&path).expect("should read");
        assert!(content.contains("File analyzed: input.txt"));
        assert!(content.contains("total_words: 3"));
        assert!(content.contains("  a: 2"));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(1234567), "1,234,567");
        assert_eq!(thousands(999), "999");
    }
}
