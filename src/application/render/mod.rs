//! Render Use Case
//!
//! Runs one render pass: every path in input order is turned into a
//! [`RenderJob`](crate::domain::entities::RenderJob), handed to the
//! template engine and written. A failing file is recorded in the
//! [`RenderReport`] and the pass moves on to the next one.
//!
//! In precompile mode with a bundle file, the bundle is truncated once at
//! the start of the pass and each compiled unit is appended to it.

mod result;
mod use_case;


pub use result::{RenderFailure, RenderReport, RenderedFile};
pub use use_case::RenderUseCase;
