//! # kit-vault
//!
//! Password tooling: a configurable generator with a strength score, and
//! a password vault whose entries are encrypted with a key derived from a
//! master password.

pub mod crypto;
pub mod generator;
pub mod store;

pub use generator::{check_strength, PasswordPolicy, Strength};
pub use store::{AddOutcome, Entry, ImportReport, Vault};
