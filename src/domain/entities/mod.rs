//! Domain Entities
//!
//! - `Settings` - resolved configuration of one run
//! - `TemplateSet` - layouts and templates known to a watch session
//! - `RenderJob` - one file's unit of work within a pass

mod render_job;
mod settings;
mod template_set;

pub use render_job::RenderJob;
pub use settings::{EngineOptions, Settings, SettingsParts};
pub use template_set::TemplateSet;
