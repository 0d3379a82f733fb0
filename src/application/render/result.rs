//! Render Result

use std::path::PathBuf;

use crate::error::NjkError;

/// A file that was written during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// A file that could not be rendered or written
#[derive(Debug)]
pub struct RenderFailure {
    pub source: PathBuf,
    pub error: NjkError,
}

/// Outcome of one render pass
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Files written, in processing order
    pub rendered: Vec<RenderedFile>,
    /// Files that failed, in processing order
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files processed (written or failed)
    pub fn count(&self) -> usize {
        self.rendered.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold another pass into this report
    pub fn merge(&mut self, other: RenderReport) {
        self.rendered.extend(other.rendered);
        self.failures.extend(other.failures);
    }
}
