// src/error.rs
//! Error type for the analysis core.
//!
//! The core does no network I/O, so the taxonomy is small: malformed input
//! documents, bad configuration, and the file/decoding errors of the loaders.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A document record is missing a required field (`text`, `name`, `date`).
    #[error("invalid input document: missing field `{field}`")]
    InvalidInput { field: &'static str },

    /// Configuration failed validation or a pattern did not compile.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<regex::Error> for TrackerError {
    fn from(e: regex::Error) -> Self {
        TrackerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
