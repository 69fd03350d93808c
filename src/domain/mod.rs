//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - the injected parameter table (`ModelConstants`)
//! - per-request inputs and outputs (`CalculationInput`, `CalculationResult`)
//! - evaluation traces (`Intermediates`, `LogTerms`, `Breakdown`)
//! - the non-finite handling switch (`NumericPolicy`)

pub mod types;

pub use types::*;
