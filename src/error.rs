//! Error types.
//!
//! Fatal errors only. Per-parameter write failures are reported by the
//! upload step and never become an [`Error`].

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("config is missing `{field}`")]
    MissingField { field: &'static str },
}

/// Operator prompt errors.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("no answer given for '{0}'")]
    MissingAnswer(&'static str),

    #[error("prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),
}

/// Parameter store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to write {name}: {reason}")]
    Put { name: String, reason: String },

    #[error("failed to read {name}: {reason}")]
    Describe { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
