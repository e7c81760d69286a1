use thiserror::Error;

use crate::domain::{BumpKind, Environment};

/// Unified error type for harbor-tag operations
#[derive(Error, Debug)]
pub enum HarborTagError {
    #[error("Malformed pre-release counter: cannot apply '{kind}' bump to '{version}'")]
    MalformedCounter { version: String, kind: BumpKind },

    #[error("Version parsing error: {0}")]
    VersionParse(String),

    #[error("Invalid environment and bump type pair: '{kind}' is not allowed in '{environment}'")]
    InvalidPairing {
        environment: Environment,
        kind: BumpKind,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry request failed: {0}")]
    Registry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in harbor-tag
pub type Result<T> = std::result::Result<T, HarborTagError>;

impl HarborTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HarborTagError::Config(msg.into())
    }

    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        HarborTagError::VersionParse(msg.into())
    }

    /// Create a registry error with context
    pub fn registry(msg: impl Into<String>) -> Self {
        HarborTagError::Registry(msg.into())
    }
}

impl From<reqwest::Error> for HarborTagError {
    fn from(err: reqwest::Error) -> Self {
        HarborTagError::Registry(err.to_string())
    }
}
