//! njk - render or precompile template files from the command line
//!
//! Discovers templates with a glob pattern, hands them to a template
//! engine (minijinja) and writes the results next to the sources or into
//! an output directory. In watch mode, edits to a layout re-render every
//! template and edits to a template re-render only that template.
//!
//! Layers:
//! - [`domain`]: settings, file classification, output paths, fan-out policy
//! - [`application`]: the render pass and the watch controller
//! - [`infrastructure`]: minijinja, local disk, glob expansion
//! - [`config`]: config file loading and flag precedence

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{RenderReport, RenderUseCase, RunEvent, StopHandle, WatchController};
pub use config::{resolve, resolve_from_disk, CliFlags, Resolved};
pub use domain::entities::{Settings, TemplateSet};
pub use domain::value_objects::{FileRole, Mode};
pub use error::{NjkError, NjkResult};
pub use infrastructure::{LocalFs, MinijinjaEngine};
