//! Error type for the kit binary.

use kit_core::error::KitError;
use kit_messages::MESSAGES;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A tool library rejected the request
    #[error("{0}")]
    Kit(#[from] KitError),

    /// Reading from the terminal failed or was cancelled
    #[error("{0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CliError::Kit(e) if e.is_validation())
    }

    /// A follow-up suggestion for errors the user can fix.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Prompt(_) => Some(MESSAGES.common.hint_needs_terminal),
            CliError::Kit(KitError::Config(_)) => Some(MESSAGES.config.hint_check_config),
            CliError::Kit(KitError::Network(_)) => Some(MESSAGES.common.hint_network),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Kit(KitError::Io(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Kit(KitError::from(err))
    }
}

pub type CliResult<T> = Result<T, CliError>;
