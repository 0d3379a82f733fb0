//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports and external collaborators.
//!
//! - `engine/` - minijinja template engine and its extensions
//! - `fs/` - local file system
//! - `glob` - pattern expansion over the input directory

pub mod engine;
pub mod fs;
pub mod glob;

pub use engine::MinijinjaEngine;
pub use fs::LocalFs;
pub use glob::{glob, GlobOptions, TemplateMatcher};
