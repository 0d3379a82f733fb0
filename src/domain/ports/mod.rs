//! Ports (interfaces) for the domain layer
//!
//! Infrastructure implements these traits; the application layer only
//! depends on them.

pub mod file_system;
pub mod template_engine;

pub use file_system::{FileSystem, FsError, FsResult};
pub use template_engine::{EngineError, EngineResult, PrecompileOptions, TemplateEngine};
