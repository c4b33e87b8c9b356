//! `kit words`

use super::prompt;
use crate::error::CliResult;
use kit_core::{kit_println, KitError};
use kit_messages::{msg, MESSAGES};
use kit_text::frequency::{normalize_path_input, parse_limit, read_text, word_frequency};
use std::path::PathBuf;

pub fn handle_words(
    text: Option<String>,
    file: Option<PathBuf>,
    limit: Option<usize>,
) -> CliResult<()> {
    let interactive = text.is_none() && file.is_none();
    let source = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text(&path)?,
        (None, None) => ask_for_text()?,
    };

    let limit = match limit {
        Some(0) => return Err(KitError::validation(MESSAGES.text.words_limit_invalid).into()),
        Some(n) => Some(n),
        None if interactive => prompt::ask_parsed(MESSAGES.text.words_limit_prompt, parse_limit)?,
        None => None,
    };

    let ranked = word_frequency(&source, limit);
    if ranked.is_empty() {
        kit_println!("{}", MESSAGES.text.words_none);
        return Ok(());
    }

    kit_println!(
        "{}",
        msg!(MESSAGES.text.words_header, count = ranked.len().to_string())
    );
    let width = ranked
        .iter()
        .map(|(w, _)| w.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, (word, count)) in ranked.iter().enumerate() {
        kit_println!("{:>3}. {:<width$}  {}", rank + 1, word, count, width = width);
    }
    Ok(())
}

/// Typed text, or the contents of a file when the answer is blank.
fn ask_for_text() -> CliResult<String> {
    let text = prompt::ask_line(MESSAGES.text.words_text_prompt)?;
    if !text.is_empty() {
        return Ok(text);
    }
    prompt::ask_parsed(MESSAGES.text.words_file_prompt, |raw| {
        read_text(&normalize_path_input(raw))
    })
}
