//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Settings, TemplateSet, RenderJob
//! - `value_objects/` - Immutable value types (Mode, FileRole, ExtensionRef, ContentHash)
//! - `services/` - Output path derivation and the re-render fan-out policy
//! - `ports/` - Interface definitions for infrastructure (file system, template engine)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
