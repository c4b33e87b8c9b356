//! Terminal prompts shared by the interactive tools.

use crate::error::CliResult;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use kit_core::error::Result as KitResult;

/// Ask until `parse` accepts the answer. Rejections are shown inline and
/// the question is repeated. Blank answers reach `parse` too.
pub fn ask_parsed<T>(prompt: &str, parse: impl Fn(&str) -> KitResult<T>) -> CliResult<T> {
    let theme = ColorfulTheme::default();
    let raw: String = Input::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse(&raw)?)
}

/// Free-form line; may be empty.
pub fn ask_line(prompt: &str) -> CliResult<String> {
    let theme = ColorfulTheme::default();
    let line: String = Input::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(line.trim().to_string())
}

pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick one of `items`; returns its index.
pub fn choose<S: ToString>(prompt: &str, items: &[S]) -> CliResult<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// A number from free-form input, allowing thousands separators.
pub fn parse_number(input: &str) -> KitResult<f64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| kit_core::KitError::validation("Please enter a valid number."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_accept_separators() {
        assert_eq!(parse_number(" 1,250.5 ").expect("should parse"), 1250.5);
        assert!(parse_number("abc").unwrap_err().is_validation());
        assert!(parse_number("inf").is_err());
    }
}
