//! Error types for the validation library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by document loading, pattern matching, and configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] io::Error),

    #[error("failed to load options from {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
