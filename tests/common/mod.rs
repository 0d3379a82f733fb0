//! Common test utilities for njk CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_written!`, `assert_not_written!`
//! - Fixtures: Reusable template content

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
