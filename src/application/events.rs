//! Progress events emitted by the use cases
//!
//! The library never prints; the binary turns these into terminal output
//! or NDJSON lines.

use serde::Serialize;

use crate::domain::value_objects::FileRole;

/// Event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    RenderStarted {
        files: usize,
        mode: String,
    },
    FileWritten {
        source: String,
        output: String,
    },
    FileFailed {
        source: String,
        message: String,
    },
    RenderComplete {
        written: usize,
        errors: usize,
    },
    WatchStarted {
        root: String,
        pattern: String,
        templates: usize,
        layouts: usize,
    },
    FileAdded {
        path: String,
        role: FileRole,
    },
    FileChanged {
        path: String,
        role: FileRole,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl RunEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
