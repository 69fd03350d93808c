//! Reporting utilities: terminal text and JSON.
//!
//! JSON follows `serde_json`'s rules for floats, so a non-finite `lnDab`/`Dab`
//! (pure-component inputs under the propagating policy) is written as `null`.

pub mod format;

pub use format::*;

use serde_json::json;

use crate::domain::{Breakdown, CalculationResult, ModelConstants};
use crate::error::{AppError, DomainError};

/// Pretty JSON for a single result (`lnDab`, `Dab`, `relativeError`, `Xa`, `T`).
pub fn result_json(result: &CalculationResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| AppError::new(4, format!("Failed to serialize result: {e}")))
}

/// Pretty JSON for a full breakdown.
pub fn breakdown_json(breakdown: &Breakdown) -> Result<String, AppError> {
    serde_json::to_string_pretty(breakdown)
        .map_err(|e| AppError::new(4, format!("Failed to serialize breakdown: {e}")))
}

/// Pretty JSON for a constant table, in the same shape the loader reads.
pub fn constants_json(constants: &ModelConstants) -> Result<String, AppError> {
    serde_json::to_string_pretty(constants)
        .map_err(|e| AppError::new(4, format!("Failed to serialize constants: {e}")))
}

/// `{"error": {"kind": ..., "message": ...}}`
pub fn error_json(err: &DomainError) -> String {
    json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    })
    .to_string()
}
