//! Terminal presentation for the `njk` binary
//!
//! Views turn [`RunEvent`](njk::RunEvent)s into lines; `main` decides
//! whether a line goes to stdout or stderr.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
