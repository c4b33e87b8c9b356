//! Canned-phrase chat bot.
//!
//! Input is compared against every known phrase with a character-level
//! similarity ratio; the best phrase at or above the threshold answers.

use chrono::{Local, NaiveTime};
use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use similar::TextDiff;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Response text that is replaced with the current time.
pub const TIME_SENTINEL: &str = "GET_TIME";

/// Reply used when nothing is similar enough.
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand you.";

const FAREWELLS: [&str; 3] = ["quit", "exit", "bye"];

const DEFAULT_RESPONSES: &str = include_str!("../data/responses.json");

/// The phrase a reply came from and how close the match was.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub similarity: f64,
}

impl Reply {
    pub fn is_time_request(&self) -> bool {
        self.text == TIME_SENTINEL
    }
}

pub struct ChatBot {
    name: String,
    responses: IndexMap<String, String>,
    threshold: f64,
}

impl ChatBot {
    pub fn new(name: impl Into<String>, responses: IndexMap<String, String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            responses,
            threshold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phrase_count(&self) -> usize {
        self.responses.len()
    }

    /// Find the response whose phrase is most similar to `input`.
    ///
    /// Phrases are scanned in file order and a later phrase only replaces
    /// the current best when strictly more similar.
    pub fn best_reply(&self, input: &str) -> Result<Reply> {
        if input.trim().is_empty() {
            return Err(KitError::validation("Input cannot be empty"));
        }

        let mut best = Reply {
            text: FALLBACK_REPLY.to_string(),
            similarity: 0.0,
        };
        for (phrase, response) in &self.responses {
            let score = similarity(input, phrase);
            if score > best.similarity && score >= self.threshold {
                best = Reply {
                    text: response.clone(),
                    similarity: score,
                };
            }
        }

        debug!(similarity = best.similarity, "chat reply chosen");
        Ok(best)
    }

    /// Turn a reply into display text, resolving the time sentinel.
    pub fn render(&self, reply: &Reply) -> String {
        render_at(reply, Local::now().time())
    }
}

/// Like [`ChatBot::render`] with an explicit clock reading.
pub fn render_at(reply: &Reply, now: NaiveTime) -> String {
    if reply.is_time_request() {
        format!("The time is {}", now.format("%H:%M"))
    } else {
        reply.text.clone()
    }
}

/// Case-insensitive character similarity: `2 * matches / total length`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    f64::from(TextDiff::from_chars(a.as_str(), b.as_str()).ratio())
}

/// True when the user wants to leave the conversation.
pub fn is_farewell(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    FAREWELLS.contains(&lowered.as_str())
}

/// Load a phrase -> response JSON object, keeping file order.
pub fn load_responses(path: &Path) -> Result<IndexMap<String, String>> {
    if !path.exists() {
        return Err(KitError::NotFound(format!(
            "Response file '{}' not found",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        KitError::Serialization(format!("Invalid JSON format in '{}': {}", path.display(), e))
    })
}

/// The built-in phrase set.
pub fn default_responses() -> Result<IndexMap<String, String>> {
    Ok(serde_json::from_str(DEFAULT_RESPONSES)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bot() -> ChatBot {
        let mut responses = IndexMap::new();
        responses.insert("hello".to_string(), "Hi!".to_string());
        responses.insert("help".to_string(), "Ask me anything.".to_string());
        responses.insert("what time is it".to_string(), TIME_SENTINEL.to_string());
        ChatBot::new("ChatBob", responses, 0.6)
    }

    #[test]
    fn similarity_is_case_insensitive_ratio() {
        assert_eq!(similarity("Hello", "hello"), 1.0);
        assert!((similarity("hello", "hallo") - 0.8).abs() < 1e-6);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn closest_phrase_wins() {
        let reply = bot().best_reply("helo").expect("should reply");
        assert_eq!(reply.text, "Hi!");
        assert!(reply.similarity > 0.8);
    }

    #[test]
    fn below_threshold_falls_back() {
        let reply = bot().best_reply("qwerty zxcv").expect("should reply");
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.similarity, 0.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = bot().best_reply("   ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn time_sentinel_is_rendered() {
        let reply = bot().best_reply("what time is it?").expect("should reply");
        assert!(reply.is_time_request());
        let now = NaiveTime::from_hms_opt(9, 5, 0).expect("valid time");
        assert_eq!(render_at(&reply, now), "The time is 09:05");
    }

    #[test]
    fn farewells_are_recognised() {
        assert!(is_farewell("Bye"));
        assert!(is_farewell("  exit "));
        assert!(!is_farewell("goodbye for now"));
    }

    #[test]
    fn builtin_responses_parse() {
        let responses = default_responses().expect("embedded JSON should parse");
        assert!(responses.contains_key("hello"));
        assert!(responses.values().any(|v| v == TIME_SENTINEL));
    }

    #[test]
    fn loading_reports_missing_and_invalid_files() {
        let dir = TempDir::new().expect("should create temp dir");
        let missing = load_responses(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(missing, KitError::NotFound(_)));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[1, 2").expect("should write");
        let invalid = load_responses(&bad).unwrap_err();
        assert!(matches!(invalid, KitError::Serialization(_)));
    }

    #[test]
    fn file_order_is_preserved() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("responses.json");
        fs::write(&path, r#"{"zeta": "z", "alpha": "a"}"#).expect("should write");
        let responses = load_responses(&path).expect("should load");
        let keys: Vec<_> = responses.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
