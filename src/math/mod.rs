//! Mathematical utilities: composition weightings for binary mixtures.

pub mod composition;

pub use composition::*;
