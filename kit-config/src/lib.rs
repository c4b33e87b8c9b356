//! # kit-config
//!
//! One YAML file configures every tool. Missing sections and keys fall
//! back to defaults, so an empty or absent file is a valid configuration.

pub mod config;
pub mod loader;

pub use config::{
    ChatSettings, CurrencySettings, FlashcardSettings, GeneratorSettings, KitConfig,
    PassgenSettings, PomodoroSettings, StatesSettings, VaultSettings, WebSettings,
};
pub use loader::{load, save, LoadedConfig};
