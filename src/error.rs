//! Error types
//!
//! Only the outer edges of the crate (config loading, directory scanning,
//! pattern compilation) return these. Detection and processing degrade
//! instead of failing.

use thiserror::Error;

/// Errors produced by the ezcp library
#[derive(Debug, Error)]
pub enum EzcpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown framework: {0}")]
    UnknownFramework(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EzcpError>;
