//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Reports progress through [`RunEvent`] callbacks instead of printing
//!
//! ## Use Cases
//!
//! - `RenderUseCase` - Renders or precompiles a batch of templates
//! - `WatchController` - Watches the input directory and re-renders on change

pub mod events;
pub mod render;
pub mod watch;

pub use events::RunEvent;
pub use render::{RenderFailure, RenderReport, RenderUseCase, RenderedFile};
pub use watch::{FsEvent, StopHandle, WatchController, WatchState, DEBOUNCE_MS};
