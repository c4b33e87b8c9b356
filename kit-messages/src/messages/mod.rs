//! Central registry for all user-facing message templates.
//!
//! Organized by tool family:
//! - `text` - chat bot, Morse code, word counts and file analysis
//! - `convert` - currency, distance, bill splitting and finance
//! - `vault` - password generator and password vault
//! - `games` - blackjack, quiz, US states and flash cards
//! - `web` - website status checker
//! - `timer` - Pomodoro timer
//! - `config` - configuration file handling
//! - `common` - shared across tools
//!
//! ```rust
//! use kit_messages::{msg, MESSAGES};
//!
//! let line = msg!(MESSAGES.text.morse_encoded, code = "... --- ...");
//! assert!(line.contains("... --- ..."));
//! ```

mod common;
mod config;
mod convert;
mod games;
mod text;
mod timer;
mod vault;
mod web;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use config::{ConfigMessages, CONFIG_MESSAGES};
pub use convert::{ConvertMessages, CONVERT_MESSAGES};
pub use games::{GamesMessages, GAMES_MESSAGES};
pub use text::{TextMessages, TEXT_MESSAGES};
pub use timer::{TimerMessages, TIMER_MESSAGES};
pub use vault::{VaultMessages, VAULT_MESSAGES};
pub use web::{WebMessages, WEB_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub common: CommonMessages,
    pub text: TextMessages,
    pub convert: ConvertMessages,
    pub vault: VaultMessages,
    pub games: GamesMessages,
    pub web: WebMessages,
    pub timer: TimerMessages,
    pub config: ConfigMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    common: COMMON_MESSAGES,
    text: TEXT_MESSAGES,
    convert: CONVERT_MESSAGES,
    vault: VAULT_MESSAGES,
    games: GAMES_MESSAGES,
    web: WEB_MESSAGES,
    timer: TIMER_MESSAGES,
    config: CONFIG_MESSAGES,
};
