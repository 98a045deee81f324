//! Error types.
//!
//! Each pipeline stage owns an error enum; [`Error`] wraps them so the CLI
//! can pick a hint for the cases it knows how to explain.

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures while obtaining or parsing the repository public key.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("could not find public key for repo: {repo}")]
    NotFound { repo: String },

    #[error("failed to fetch public key: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected key response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("invalid public key: {0}")]
    InvalidKey(String),
}

/// Failures while encrypting the password.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("nothing to encrypt: password is empty")]
    EmptyPlaintext,

    #[error("password too long for this key: {len} bytes, at most {max} allowed")]
    MessageTooLong { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Failures while reading or rewriting the Travis configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("config has no '{0}' section")]
    MissingSection(&'static str),

    #[error("'{0}' is not a mapping")]
    NotAMapping(&'static str),
}

/// Rejected user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("repository cannot be empty")]
    EmptyRepo,

    #[error("password cannot be empty")]
    EmptyPassword,
}

pub type Result<T> = std::result::Result<T, Error>;
