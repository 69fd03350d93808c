//! Interactive prompt.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompt provides the "run `dab` and type numbers" UX
//!
//! Every error re-prompts; nothing here ends the session except `q` or end of input.
//!
//! Under the default policy a pure component (`Xa = 0` or `Xa = 1`) prints NaN
//! results. Run `dab prompt --strict` to report it as `Calculation error: ...`.

use std::io::{BufRead, Write};

use crate::domain::NumericPolicy;
use crate::error::AppError;
use crate::models::DiffusionModel;
use crate::report::{format_error, format_result};

/// Counts for one interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptSummary {
    pub evaluated: usize,
    pub rejected: usize,
}

enum Reply {
    Value(f64),
    Invalid(String),
    Quit,
}

/// Run the prompt loop over arbitrary reader/writer pairs (stdin/stdout in the binary).
pub fn run_prompt<R: BufRead, W: Write>(
    model: &DiffusionModel,
    policy: NumericPolicy,
    input: &mut R,
    out: &mut W,
) -> Result<PromptSummary, AppError> {
    let mut summary = PromptSummary::default();

    loop {
        let xa = match ask(input, out, "Mole fraction Xa (0-1, q to quit): ")? {
            Reply::Value(v) => v,
            Reply::Invalid(raw) => {
                summary.rejected += 1;
                say(out, &format!("Error: '{raw}' is not a number"))?;
                continue;
            }
            Reply::Quit => return Ok(summary),
        };

        let t = match ask(input, out, "Temperature (K): ")? {
            Reply::Value(v) => v,
            Reply::Invalid(raw) => {
                summary.rejected += 1;
                say(out, &format!("Error: '{raw}' is not a number"))?;
                continue;
            }
            Reply::Quit => return Ok(summary),
        };

        match model.evaluate_with(xa, t, policy) {
            Ok(result) => {
                summary.evaluated += 1;
                say(out, &format_result(&result))?;
            }
            Err(err) => {
                summary.rejected += 1;
                say(out, &format_error(&err))?;
            }
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Reply, AppError> {
    write!(out, "{label}").map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;
    out.flush()
        .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;
    if bytes == 0 {
        return Ok(Reply::Quit);
    }

    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Reply::Quit);
    }
    Ok(match line.parse::<f64>() {
        Ok(v) => Reply::Value(v),
        Err(_) => Reply::Invalid(line.to_string()),
    })
}

fn say<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(out, "{}", text.trim_end())
        .map_err(|e| AppError::new(2, format!("Failed to write output: {e}")))
}
