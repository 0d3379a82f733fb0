//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod fan_out;
pub mod path_resolver;

pub use fan_out::{plan_batch, plan_change};
pub use path_resolver::{output_path_for, relative_to_input, template_name};
