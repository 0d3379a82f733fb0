//! TemplateEngine port - the external rendering/compiling collaborator
//!
//! The crate never interprets template syntax itself. Everything
//! language-related goes through this trait; `infrastructure::engine`
//! provides the minijinja-backed implementation.

use serde_json::{Map, Value};
use thiserror::Error;

/// Failure reported by the engine for one template
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for engine calls
pub type EngineResult<T> = Result<T, EngineError>;

/// Options for precompiling one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompileOptions {
    /// Name the compiled unit registers the template under
    pub name: String,
    /// Emit a unit even if the template does not parse
    pub force: bool,
}

/// Rendering/compiling entry points of a template engine
pub trait TemplateEngine {
    /// Render the named template with `context`
    fn render(&self, name: &str, context: &Map<String, Value>) -> EngineResult<String>;

    /// Compile the named template into a self-contained script unit
    fn precompile(&self, name: &str, options: &PrecompileOptions) -> EngineResult<String>;

    /// Drop cached templates so the next pass re-reads sources
    fn reload(&mut self) {}
}
