//! Configuration module for njk
//!
//! Resolution order (per option):
//! 1. Configuration file given with `--options` (`compiler.*` keys)
//! 2. CLI flags
//! 3. Built-in defaults
//!
//! The render context always receives an `env` key holding a snapshot of
//! the process environment, whatever the file says.

mod loader;
mod resolver;
mod types;

pub use loader::{load_context_file, load_with_warnings, parse_with_warnings, ConfigWarning};
pub use resolver::{env_snapshot, resolve, resolve_from_disk, CliFlags, Resolved};
pub use types::{CompilerConfig, ConfigFile};
