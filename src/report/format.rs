//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model code stays free of presentation concerns
//! - output changes are localized

use crate::domain::{Breakdown, CalculationResult, ModelConstants};
use crate::error::DomainError;
use crate::io::ConstantsSource;

/// Format one result: the four display fields plus the echoed inputs.
pub fn format_result(result: &CalculationResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Results for Xa = {:.3} and T = {:.2} K\n",
        result.xa, result.t
    ));
    out.push_str(&format!("ln(Dab)        : {:.5}\n", result.ln_dab));
    out.push_str(&format!("Dab            : {:.5e} cm²/s\n", result.dab));
    out.push_str(&format!("Relative error : {:.2}%\n", result.relative_error));
    out
}

/// Format the intermediate fractions and the five `ln(Dab)` contributions.
pub fn format_breakdown(breakdown: &Breakdown) -> String {
    let mut out = String::new();

    out.push_str("Intermediates:\n");
    for (name, value) in breakdown.intermediates.named() {
        out.push_str(&format!("  {name:<10} {value:>14.8}\n"));
    }

    out.push_str("\nln(Dab) contributions:\n");
    for (name, value) in breakdown.terms.named() {
        out.push_str(&format!("  {name:<14} {value:>12.5}\n"));
    }
    out.push_str(&format!("  {:-<14} {:-<12}\n", "", ""));
    out.push_str(&format!("  {:<14} {:>12.5}\n", "total", breakdown.result.ln_dab));

    out
}

/// Format the active constant table.
pub fn format_constants(constants: &ModelConstants, source: &ConstantsSource) -> String {
    let mut out = String::new();
    out.push_str(&format!("Model constants ({source}):\n"));
    for (name, value) in constants.entries() {
        out.push_str(&format!("  {name:<9} {}\n", fmt_value(value)));
    }
    out
}

/// Format a model error the way the interactive front-end shows it.
///
/// Input problems read as `Error: ...`; arithmetic failures as `Calculation error: ...`.
pub fn format_error(err: &DomainError) -> String {
    if err.is_validation() {
        format!("Error: {err}")
    } else {
        format!("Calculation error: {err}")
    }
}

/// Small or large magnitudes in scientific notation, the rest in fixed point.
fn fmt_value(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-3..1e4).contains(&a) {
        format!("{v:.4e}")
    } else {
        format!("{v:.4}")
    }
}
