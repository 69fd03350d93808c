//! Input/output helpers.
//!
//! - constant-table JSON read/write and source resolution (`constants`)

pub mod constants;

pub use constants::*;
