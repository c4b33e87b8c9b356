//! Word frequency counting.

use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("Hardcoded word regex pattern should always compile"));

/// Count lowercase words, most frequent first.
///
/// Words with equal counts keep the order in which they first appear.
/// `limit` keeps only the top N entries.
pub fn word_frequency(text: &str, limit: Option<usize>) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for m in WORD.find_iter(&lowered) {
        *counts.entry(m.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    if let Some(n) = limit {
        ranked.truncate(n);
    }
    ranked
}

/// Parse a user-supplied limit: blank means "all", otherwise a positive integer.
pub fn parse_limit(input: &str) -> Result<Option<usize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(KitError::validation(
            "Please enter a valid positive number. Limit must be a positive number.",
        )),
        Ok(n) => Ok(Some(n)),
    }
}

/// Strip the quotes terminals add around dragged-in paths.
pub fn normalize_path_input(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Read a UTF-8 text file, trimmed.
pub fn read_text(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(KitError::NotFound(format!(
            "The file {} was not found.",
            path.display()
        ))),
        Err(e) => Err(KitError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_case_insensitively() {
        let result = word_frequency("The cat and the hat. THE end!", None);
        assert_eq!(result[0], ("the".to_string(), 3));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let result = word_frequency("beta alpha beta alpha gamma", None);
        assert_eq!(
            result,
            vec![
                ("beta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("gamma".to_string(), 1)
            ]
        );
    }

    #[test]
    fn limit_truncates() {
        let result = word_frequency("a a a b b c", Some(2));
        assert_eq!(result, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn punctuation_only_has_no_words() {
        assert!(word_frequency("... !!! ???", None).is_empty());
    }

    #[test]
    fn limit_parsing() {
        assert_eq!(parse_limit("").expect("blank is all"), None);
        assert_eq!(parse_limit(" 7 ").expect("should parse"), Some(7));
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("-3").is_err());
        assert!(parse_limit("ten").is_err());
    }

    #[test]
    fn quoted_paths_are_unwrapped() {
        assert_eq!(normalize_path_input("\"/tmp/a b.txt\""), PathBuf::from("/tmp/a b.txt"));
        assert_eq!(normalize_path_input("'notes.txt'"), PathBuf::from("notes.txt"));
        assert_eq!(normalize_path_input(" plain.txt "), PathBuf::from("plain.txt"));
    }

    #[test]
    fn read_text_trims_and_reports_missing() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("in.txt");
        fs::write(&path, "\n  words here \n").expect("should write");
        assert_eq!(read_text(&path).expect("should read"), "words here");

        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, KitError::NotFound(_)));
    }
}
