//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - loads the constant table
//! - runs evaluations
//! - prints text or JSON reports

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ConstantsArgs, EvalArgs, PromptArgs, policy_from_flag};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `dab` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    // We want `dab` and `dab --strict` to behave like `dab prompt ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Prompt(args) => handle_prompt(args),
        Command::Constants(args) => handle_constants(args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from an embedding program) is not an error for us.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let session = pipeline::open_session(args.constants.constants.as_deref())?;
    let policy = policy_from_flag(args.strict);

    let breakdown = match pipeline::run_eval(&session, args.xa, args.t, policy) {
        Ok(b) => b,
        Err(err) => {
            if args.json {
                println!("{}", crate::report::error_json(&err));
            }
            return Err(err.into());
        }
    };

    if args.json {
        let text = if args.terms {
            crate::report::breakdown_json(&breakdown)?
        } else {
            crate::report::result_json(&breakdown.result)?
        };
        println!("{text}");
        return Ok(());
    }

    print!("{}", crate::report::format_result(&breakdown.result));
    if args.terms {
        println!();
        print!("{}", crate::report::format_breakdown(&breakdown));
    }
    Ok(())
}

fn handle_prompt(args: PromptArgs) -> Result<(), AppError> {
    let session = pipeline::open_session(args.constants.constants.as_deref())?;
    let policy = policy_from_flag(args.strict);

    println!("Binary diffusion coefficient calculator");
    println!("Constants: {}", session.source);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let summary = crate::cli::prompt::run_prompt(&session.model, policy, &mut input, &mut out)?;

    tracing::info!(
        evaluated = summary.evaluated,
        rejected = summary.rejected,
        "prompt session ended"
    );
    Ok(())
}

fn handle_constants(args: ConstantsArgs) -> Result<(), AppError> {
    let session = pipeline::open_session(args.constants.constants.as_deref())?;
    let constants = session.model.constants();

    if let Some(path) = &args.out {
        crate::io::write_constants_json(path, constants)?;
        println!("Wrote constants to {}", path.display());
        return Ok(());
    }

    if args.json {
        println!("{}", crate::report::constants_json(constants)?);
    } else {
        print!("{}", crate::report::format_constants(constants, &session.source));
    }
    Ok(())
}

/// Rewrite argv so `dab` defaults to `dab prompt`.
///
/// Rules:
/// - `dab`                      -> `dab prompt`
/// - `dab --strict ...`         -> `dab prompt --strict ...`
/// - `dab --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("prompt".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "eval" | "prompt" | "constants");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "prompt".to_string());
        return argv;
    }

    argv
}
