//! Command-line parsing for the diffusion calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model code and from command dispatch (`crate::app`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::NumericPolicy;

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "dab",
    version,
    about = "Binary liquid mutual diffusion coefficient calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the diffusion coefficient at one composition and temperature.
    Eval(EvalArgs),
    /// Ask for Xa and T interactively until `q` or end of input.
    ///
    /// Pure components (Xa = 0 or 1) print NaN results; add `--strict` to get a
    /// "Calculation error" line instead.
    Prompt(PromptArgs),
    /// Show the active constant table.
    Constants(ConstantsArgs),
}

/// Options shared by every command that needs a constant table.
#[derive(Debug, Args, Clone, Default)]
pub struct ConstantsOpt {
    /// Constants JSON file (overrides MIXDIFF_CONSTANTS).
    #[arg(long, value_name = "JSON")]
    pub constants: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// Mole fraction of component A, in [0, 1].
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub xa: f64,

    /// Absolute temperature (K).
    #[arg(short = 't', long = "temperature", allow_hyphen_values = true)]
    pub t: f64,

    #[command(flatten)]
    pub constants: ConstantsOpt,

    /// Fail when any intermediate is NaN or infinite instead of reporting it.
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also print the intermediate fractions and the ln(Dab) contributions.
    #[arg(long)]
    pub terms: bool,
}

#[derive(Debug, Args, Clone, Default)]
pub struct PromptArgs {
    #[command(flatten)]
    pub constants: ConstantsOpt,

    /// Fail when any intermediate is NaN or infinite instead of reporting it.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ConstantsArgs {
    #[command(flatten)]
    pub constants: ConstantsOpt,

    /// Print the table as a constants JSON file.
    #[arg(long)]
    pub json: bool,

    /// Write the table to a constants JSON file that `--constants` can read back.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn policy_from_flag(strict: bool) -> NumericPolicy {
    if strict {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Propagate
    }
}
