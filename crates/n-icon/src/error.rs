//! Error types.
//!
//! Icon generation itself cannot fail. Errors only arise at the edges:
//! accepting a hash string, and loading configuration from a file.

use std::path::PathBuf;

use thiserror::Error;

/// A string rejected as an icon hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("hash must have at least {min} hex digits, got {len}")]
    TooShort { len: usize, min: usize },

    #[error("hash contains non-hex character {ch:?} at index {index}")]
    NotHex { ch: char, index: usize },
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),
}
