//! Shared evaluation pipeline used by every front-end command.
//!
//! constants source -> table load/validation -> model -> evaluation
//!
//! The `eval` and `prompt` commands then only differ in presentation.

use std::path::Path;

use tracing::info;

use crate::domain::{Breakdown, NumericPolicy};
use crate::error::{AppError, DomainError};
use crate::io::{ConstantsSource, resolve_constants};
use crate::models::DiffusionModel;

/// A model bound to the constant table chosen for this run.
#[derive(Debug, Clone)]
pub struct Session {
    pub model: DiffusionModel,
    pub source: ConstantsSource,
}

/// Resolve constants (flag, then `MIXDIFF_CONSTANTS`, then built-in) and build the model.
pub fn open_session(constants_path: Option<&Path>) -> Result<Session, AppError> {
    let (constants, source) = resolve_constants(constants_path)?;
    Ok(Session {
        model: DiffusionModel::new(constants),
        source,
    })
}

/// Evaluate once, keeping intermediates for optional display.
pub fn run_eval(
    session: &Session,
    xa: f64,
    t: f64,
    policy: NumericPolicy,
) -> Result<Breakdown, DomainError> {
    let breakdown = session.model.breakdown_with(xa, t, policy)?;
    info!(
        xa,
        t,
        ln_dab = breakdown.result.ln_dab,
        relative_error = breakdown.result.relative_error,
        "evaluation finished"
    );
    Ok(breakdown)
}
