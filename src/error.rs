// Error types - some variants for future error conditions

#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlcoveError {
    #[error("unrecognized content kind: {0}")]
    UnknownKind(String),

    #[error("Terminal initialization failed: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    #[error("Content file {path} is not valid JSON: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, AlcoveError>;
