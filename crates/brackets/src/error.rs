//! Error types for brackets operations.
//!
//! Resolution itself never fails: a token that cannot be colored is simply
//! skipped. Errors only come from the surrounding infrastructure, such as
//! reading files, loading settings or setting up a parser.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for brackets operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for brackets operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree-sitter parsing infrastructure failed
    #[error("parser error: {0}")]
    Parser(String),

    /// Invalid configuration values
    #[error("configuration error: {0}")]
    Config(String),

    /// Settings file is not valid YAML
    #[error("settings file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Annotation output could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No bundled parser for this file
    #[error("unsupported language: {}", .0.display())]
    UnsupportedLanguage(PathBuf),
}
