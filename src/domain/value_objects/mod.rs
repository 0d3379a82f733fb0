//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extension_ref;
mod file_role;
mod hash;
mod mode;

pub use extension_ref::ExtensionRef;
pub use file_role::{FileRole, DEFAULT_LAYOUT_PREFIX};
pub use hash::ContentHash;
pub use mode::Mode;
