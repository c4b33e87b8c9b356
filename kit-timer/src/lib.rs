//! # kit-timer
//!
//! Work/break cycling for the Pomodoro technique. The countdown itself
//! is drawn by the `kit` binary; this crate decides what comes next and
//! remembers how much got done today.

pub mod pomodoro;

pub use pomodoro::{motivational_quote, Cycle, DailyStats, Durations, Phase, SessionRecord};
