//! Template engine adapter
//!
//! - `minijinja_engine` - the `TemplateEngine` implementation
//! - `extensions` - the extension plugin interface and built-ins

pub mod extensions;
mod minijinja_engine;

pub use extensions::{Extension, LoadedExtension, BUILTIN_EXTENSIONS};
pub use minijinja_engine::{compiled_unit, MinijinjaEngine, PRECOMPILED_GLOBAL};
