//! # kit-games
//!
//! Game state machines. Each game exposes the moves a player can make
//! and reports what happened; reading input and printing is left to the
//! caller.

pub mod blackjack;
pub mod flashcards;
pub mod quiz;
pub mod states;

pub use blackjack::{CardSource, Outcome, RandomCards, Round, Tally};
pub use flashcards::{Card, Deck, LanguagePairs, Mode, Progress, Session, SessionSettings};
pub use quiz::{Question, QuizBrain, Verdict};
pub use states::{Guess, StatesGame};
