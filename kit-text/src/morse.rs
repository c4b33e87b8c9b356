//! International Morse code.
//!
//! Encoded letters are separated by one space and words by three.
//! Decoding accepts any run of two or more spaces, or ` / `, as a word gap.

use kit_core::error::{KitError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

const TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('@', ".--.-."),
    ('&', ".-..."),
    ('(', "-.--."),
    (')', "-.--.-"),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('\'', ".----."),
    ('*', "-..-"),
];

static TO_MORSE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| TABLE.iter().copied().collect());

// `X` and `*` share a code; the first entry in the table wins when decoding.
static FROM_MORSE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (ch, code) in TABLE {
        map.entry(*code).or_insert(*ch);
    }
    map
});

const LETTER_GAP: &str = " ";
const WORD_GAP: &str = "   ";

/// Encode text. Characters without a Morse code are dropped.
pub fn encode(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(KitError::validation("Input text cannot be empty"));
    }

    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(|ch| {
                    let code = TO_MORSE.get(&ch.to_ascii_uppercase()).copied();
                    if code.is_none() {
                        debug!(character = %ch, "no Morse code, skipping");
                    }
                    code
                })
                .collect::<Vec<_>>()
                .join(LETTER_GAP)
        })
        .filter(|w| !w.is_empty())
        .collect();

    Ok(words.join(WORD_GAP))
}

/// Decode Morse code into uppercase text.
pub fn decode(code: &str) -> Result<String> {
    if code.trim().is_empty() {
        return Err(KitError::validation("Input Morse code cannot be empty"));
    }

    let normalized = code.trim().replace('/', "  ");
    let mut words = Vec::new();
    for word in normalized.split("  ") {
        let word = word.trim();
        if word.is_empty() {
            continue;
        }
        let mut decoded = String::new();
        for symbol in word.split_whitespace() {
            match FROM_MORSE.get(symbol) {
                Some(ch) => decoded.push(*ch),
                None => {
                    return Err(KitError::Validation(format!(
                        "Invalid Morse code character: '{symbol}'"
                    )))
                }
            }
        }
        words.push(decoded);
    }

    Ok(words.join(" "))
}
