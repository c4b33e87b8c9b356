use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    Config(String),
    Io(#[from] std::io::Error),
    Validation(String),
    NotFound(String),
    Network(String),
    Crypto(String),
    Serialization(String),
    Other(#[from] anyhow::Error),
}

impl KitError {
    pub fn validation(message: impl Into<String>) -> Self {
        KitError::Validation(message.into())
    }

    /// True for errors caused by bad user input, which the CLI re-prompts on.
    pub fn is_validation(&self) -> bool {
        matches!(self, KitError::Validation(_))
    }
}

impl Display for KitError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            KitError::Config(s) => write!(f, "Configuration error: {}", s),
            KitError::Io(e) => write!(f, "I/O error: {}", e),
            KitError::Validation(s) => write!(f, "{}", s),
            KitError::NotFound(s) => write!(f, "Not found: {}", s),
            KitError::Network(s) => write!(f, "Network error: {}", s),
            KitError::Crypto(s) => write!(f, "{}", s),
            KitError::Serialization(s) => write!(f, "Serialization error: {}", s),
            KitError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for KitError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        KitError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for KitError {
    fn from(err: serde_json::Error) -> Self {
        KitError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for KitError {
    fn from(err: csv::Error) -> Self {
        KitError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_bare_message() {
        let err = KitError::validation("Amount must be positive.");
        assert_eq!(err.to_string(), "Amount must be positive.");
        assert!(err.is_validation());
    }

    #[test]
    fn json_errors_become_serialization() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: KitError = parse.into();
        assert!(matches!(err, KitError::Serialization(_)));
        assert!(!err.is_validation());
    }
}
