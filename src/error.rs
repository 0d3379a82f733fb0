//! Error types for njk
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//!
//! Errors fall into two phases:
//! - startup errors (configuration, extensions) abort the run
//! - per-file errors (`Render`, `Compile`) are collected in a
//!   [`RenderReport`](crate::application::RenderReport) and the batch continues

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for njk operations
pub type NjkResult<T> = Result<T, NjkError>;

/// Main error type for njk operations
#[derive(Error, Debug)]
pub enum NjkError {
    /// Configuration file is not valid JSON (or has the wrong shape)
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Mutually exclusive options were set together
    #[error("conflicting options: {message}")]
    ConfigConflict { message: String },

    /// Extension module exports something that is neither a factory nor a mapping
    #[error("Unknown extension type for '{reference}': {found}")]
    UnknownExtensionType { reference: String, found: String },

    /// Extension reference resolves to nothing
    #[error("extension '{reference}' not found: {message}")]
    ExtensionNotFound { reference: String, message: String },

    /// Glob expansion failed
    #[error("cannot expand pattern '{pattern}': {message}")]
    Glob { pattern: String, message: String },

    /// Template failed to render
    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// Template failed to precompile
    #[error("failed to compile {path}: {message}")]
    Compile { path: PathBuf, message: String },

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for NjkError {
    fn from(err: notify::Error) -> Self {
        NjkError::Watch(err.to_string())
    }
}
