//! Configuration structure for the shared `config.yaml`.
//!
//! Each tool owns one section. File locations are optional: when unset
//! they resolve inside the user data directory at use time, so a saved
//! config never pins machine-specific paths.

use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use kit_core::user_paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root structure for the kit configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KitConfig {
    /// Chat bot settings
    #[serde(default)]
    pub chat: ChatSettings,

    /// Currency converter settings
    #[serde(default)]
    pub currency: CurrencySettings,

    /// Password manager settings
    #[serde(default)]
    pub vault: VaultSettings,

    /// Standalone password generator settings
    #[serde(default)]
    pub passgen: PassgenSettings,

    /// Pomodoro timer settings
    #[serde(default)]
    pub pomodoro: PomodoroSettings,

    /// Flash card settings
    #[serde(default)]
    pub flashcards: FlashcardSettings,

    /// US states quiz settings
    #[serde(default)]
    pub states: StatesSettings,

    /// Website status checker settings
    #[serde(default)]
    pub web: WebSettings,

    /// Keys this version does not know about, kept on rewrite
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl KitConfig {
    /// Reject values no tool can work with.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if !(0.0..=1.0).contains(&self.chat.similarity_threshold) {
            problems.push("chat.similarity_threshold must be between 0 and 1".to_string());
        }
        if self.chat.name.trim().is_empty() {
            problems.push("chat.name must not be empty".to_string());
        }
        if self.currency.api_timeout_secs == 0 {
            problems.push("currency.api_timeout_secs must be positive".to_string());
        }
        if self.vault.max_attempts == 0 {
            problems.push("vault.max_attempts must be at least 1".to_string());
        }
        if self.vault.generator.length < 4 {
            problems.push("vault.generator.length must be at least 4".to_string());
        }
        if !self.vault.generator.any_class() {
            problems.push("vault.generator must enable at least one character class".to_string());
        }
        if self.passgen.length < 4 {
            problems.push("passgen.length must be at least 4".to_string());
        }
        if self.pomodoro.work_min == 0
            || self.pomodoro.short_break_min == 0
            || self.pomodoro.long_break_min == 0
        {
            problems.push("pomodoro durations must be positive".to_string());
        }
        if self.flashcards.recent_window == 0 {
            problems.push("flashcards.recent_window must be at least 1".to_string());
        }
        if self.flashcards.milestone_every == 0 {
            problems.push("flashcards.milestone_every must be at least 1".to_string());
        }
        if self.states.time_limit_secs == 0 {
            problems.push("states.time_limit_secs must be positive".to_string());
        }
        if self.web.timeout_secs == 0 {
            problems.push("web.timeout_secs must be positive".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(KitError::Config(problems.join("; ")))
        }
    }
}

fn default_true() -> bool {
    true
}

fn resolve(path: &Option<PathBuf>, default_name: &str) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.clone()),
        None => Ok(user_paths::data_file(default_name)?),
    }
}

/// Chat bot settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSettings {
    /// Name the bot introduces itself with
    #[serde(default = "default_chat_name")]
    pub name: String,

    /// Minimum similarity ratio for a canned phrase to match
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// JSON file of phrase -> response; the built-in set is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses_file: Option<PathBuf>,
}

fn default_chat_name() -> String {
    "ChatBob".to_string()
}

fn default_similarity_threshold() -> f64 {
    0.6
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            name: default_chat_name(),
            similarity_threshold: default_similarity_threshold(),
            responses_file: None,
        }
    }
}

/// Currency converter settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencySettings {
    /// Live rates endpoint; offline mode when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub api_timeout_secs: u64,

    /// Fallback rates file (default: `<data dir>/rates.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<PathBuf>,
}

fn default_api_timeout() -> u64 {
    5
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            api_url: None,
            api_timeout_secs: default_api_timeout(),
            rates_file: None,
        }
    }
}

impl CurrencySettings {
    pub fn rates_path(&self) -> Result<PathBuf> {
        resolve(&self.rates_file, "rates.json")
    }
}

/// Character classes used when the vault generates a password
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    #[serde(default = "default_vault_length")]
    pub length: usize,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub digits: bool,
    #[serde(default = "default_true")]
    pub symbols: bool,
}

fn default_vault_length() -> usize {
    12
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: default_vault_length(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GeneratorSettings {
    pub fn any_class(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.symbols
    }
}

/// Password manager settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaultSettings {
    /// Vault file (default: `<data dir>/vault.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Master password attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Password generation defaults
    #[serde(default)]
    pub generator: GeneratorSettings,
}

fn default_max_attempts() -> u32 {
    3
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            data_file: None,
            max_attempts: default_max_attempts(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl VaultSettings {
    pub fn data_path(&self) -> Result<PathBuf> {
        resolve(&self.data_file, "vault.json")
    }
}

/// Standalone password generator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassgenSettings {
    #[serde(default = "default_passgen_length")]
    pub length: usize,
    #[serde(default = "default_passgen_count")]
    pub count: usize,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub symbols: bool,
}

fn default_passgen_length() -> usize {
    20
}

fn default_passgen_count() -> usize {
    10
}

impl Default for PassgenSettings {
    fn default() -> Self {
        Self {
            length: default_passgen_length(),
            count: default_passgen_count(),
            uppercase: true,
            symbols: true,
        }
    }
}

/// Pomodoro timer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PomodoroSettings {
    #[serde(default = "default_work_min")]
    pub work_min: u64,
    #[serde(default = "default_short_break_min")]
    pub short_break_min: u64,
    #[serde(default = "default_long_break_min")]
    pub long_break_min: u64,

    /// Daily stats file (default: `<data dir>/pomodoro.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_file: Option<PathBuf>,
}

fn default_work_min() -> u64 {
    25
}

fn default_short_break_min() -> u64 {
    5
}

fn default_long_break_min() -> u64 {
    30
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_min: default_work_min(),
            short_break_min: default_short_break_min(),
            long_break_min: default_long_break_min(),
            stats_file: None,
        }
    }
}

impl PomodoroSettings {
    pub fn stats_path(&self) -> Result<PathBuf> {
        resolve(&self.stats_file, "pomodoro.json")
    }
}

/// Flash card settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashcardSettings {
    /// Directory holding language pairs and progress (default: `<data dir>/flashcards`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// How many recent picks random selection avoids
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,

    /// Up to this many candidates, cards are walked in order instead of drawn
    #[serde(default = "default_sequential_limit")]
    pub sequential_limit: usize,

    /// Congratulate every N learned words
    #[serde(default = "default_milestone_every")]
    pub milestone_every: usize,
}

fn default_recent_window() -> usize {
    5
}

fn default_sequential_limit() -> usize {
    50
}

fn default_milestone_every() -> usize {
    20
}

impl Default for FlashcardSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            recent_window: default_recent_window(),
            sequential_limit: default_sequential_limit(),
            milestone_every: default_milestone_every(),
        }
    }
}

impl FlashcardSettings {
    pub fn data_path(&self) -> Result<PathBuf> {
        resolve(&self.data_dir, "flashcards")
    }
}

/// US states quiz settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatesSettings {
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,

    /// Where unguessed states are written when a game ends early
    #[serde(default = "default_missed_file")]
    pub missed_file: PathBuf,
}

fn default_time_limit() -> u64 {
    300
}

fn default_missed_file() -> PathBuf {
    PathBuf::from("missed_states.txt")
}

impl Default for StatesSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit(),
            missed_file: default_missed_file(),
        }
    }
}

/// Website status checker settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebSettings {
    #[serde(default = "default_web_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Pause between URLs in a batch check
    #[serde(default = "default_batch_delay")]
    pub batch_delay_ms: u64,
}

fn default_web_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Website-Status-Checker/1.0".to_string()
}

fn default_max_redirects() -> usize {
    5
}

fn default_batch_delay() -> u64 {
    1000
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_web_timeout(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            batch_delay_ms: default_batch_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: KitConfig = serde_yaml_ng::from_str("{}").expect("should parse");
        assert_eq!(config, KitConfig::default());
        assert_eq!(config.chat.similarity_threshold, 0.6);
        assert_eq!(config.pomodoro.long_break_min, 30);
        assert_eq!(config.web.user_agent, "Website-Status-Checker/1.0");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "pomodoro:\n  work_min: 50\nvault:\n  generator:\n    symbols: false\n";
        let config: KitConfig = serde_yaml_ng::from_str(yaml).expect("should parse");
        assert_eq!(config.pomodoro.work_min, 50);
        assert_eq!(config.pomodoro.short_break_min, 5);
        assert!(!config.vault.generator.symbols);
        assert!(config.vault.generator.uppercase);
        assert_eq!(config.vault.generator.length, 12);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let yaml = "theme: ocean\nchat:\n  name: Bob\n";
        let config: KitConfig = serde_yaml_ng::from_str(yaml).expect("should parse");
        assert!(config.extra.contains_key("theme"));
        let out = serde_yaml_ng::to_string(&config).expect("should serialize");
        assert!(out.contains("theme: ocean"));
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut config = KitConfig::default();
        config.chat.similarity_threshold = 1.5;
        config.pomodoro.work_min = 0;
        config.vault.generator = GeneratorSettings {
            length: 12,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("similarity_threshold"));
        assert!(err.contains("pomodoro durations"));
        assert!(err.contains("character class"));
    }

    #[test]
    fn defaults_validate() {
        assert!(KitConfig::default().validate().is_ok());
    }

    #[test]
    fn explicit_paths_win_over_data_dir() {
        let settings = CurrencySettings {
            rates_file: Some(PathBuf::from("/tmp/my-rates.json")),
            ..CurrencySettings::default()
        };
        assert_eq!(
            settings.rates_path().expect("should resolve"),
            PathBuf::from("/tmp/my-rates.json")
        );
    }
}
