//! Watch Use Case
//!
//! Continuous re-rendering while the input directory changes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Classification of newly seen files into layouts and templates
//! - Debouncing (100ms) and content-hash filtering of change events
//! - The re-render fan-out: a layout change re-renders every template,
//!   a template change re-renders only that template
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = WatchController::new(render_use_case)?;
//! let stop = controller.stop_handle();
//! ctrlc::set_handler(move || stop.stop())?;
//! controller.start(&on_event)?;
//! controller.run(&on_event)?;
//! ```

mod event;
mod use_case;


pub use event::{FsEvent, StopHandle, WatchState, DEBOUNCE_MS};
pub use use_case::WatchController;
