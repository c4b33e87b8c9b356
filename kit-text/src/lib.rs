//! # kit-text
//!
//! Text-in, text-out tools. Nothing here touches the terminal; the
//! `kit` binary owns prompting and printing.

pub mod analysis;
pub mod chat;
pub mod frequency;
pub mod morse;

pub use analysis::{analyze, TextStats};
pub use chat::{ChatBot, Reply};
pub use frequency::word_frequency;
