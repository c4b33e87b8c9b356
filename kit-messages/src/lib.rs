//! kit-messages
//!
//! User-facing text for the kit CLI: message templates grouped by tool,
//! plus a small builder that fills in `{placeholder}` values.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
