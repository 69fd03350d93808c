//! Read/write constant-table JSON files and pick which table a run uses.
//!
//! The file is a flat JSON object with the keys of `domain::ModelConstants`:
//!
//! ```json
//! { "V_exp": 1.33e-5, "aBA": 194.5302, "aAB": -10.7575,
//!   "lambda_A": 1.127, "lambda_B": 0.973, "qA": 1.432, "qB": 1.4,
//!   "D_AB": 2.1e-5, "D_BA": 2.67e-5 }
//! ```

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::ModelConstants;
use crate::error::AppError;

/// Environment variable naming a constants file (also read from `.env`).
pub const CONSTANTS_ENV: &str = "MIXDIFF_CONSTANTS";

/// Where the active constant table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantsSource {
    /// `--constants <FILE>` on the command line.
    Flag(PathBuf),
    /// `MIXDIFF_CONSTANTS`.
    Env(PathBuf),
    /// `ModelConstants::reference()`.
    Builtin,
}

impl fmt::Display for ConstantsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantsSource::Flag(p) => write!(f, "{}", p.display()),
            ConstantsSource::Env(p) => write!(f, "{} (from {CONSTANTS_ENV})", p.display()),
            ConstantsSource::Builtin => write!(f, "built-in reference pair"),
        }
    }
}

/// Read and validate a constants JSON file.
pub fn read_constants_json(path: &Path) -> Result<ModelConstants, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open constants JSON '{}': {e}", path.display())))?;
    let constants: ModelConstants = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid constants JSON '{}': {e}", path.display())))?;
    constants
        .validate()
        .map_err(|err| AppError::new(2, format!("Invalid constants in '{}': {err}", path.display())))?;
    Ok(constants)
}

/// Write a constants JSON file (pretty-printed).
pub fn write_constants_json(path: &Path, constants: &ModelConstants) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create constants JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, constants)
        .map_err(|e| AppError::new(2, format!("Failed to write constants JSON: {e}")))?;
    Ok(())
}

/// Decide the source: flag beats environment beats built-in. Empty env values are ignored.
pub fn choose_source(flag: Option<&Path>, env_value: Option<&str>) -> ConstantsSource {
    if let Some(path) = flag {
        return ConstantsSource::Flag(path.to_path_buf());
    }
    match env_value.map(str::trim) {
        Some(v) if !v.is_empty() => ConstantsSource::Env(PathBuf::from(v)),
        _ => ConstantsSource::Builtin,
    }
}

/// Load the table for `source`.
pub fn load_constants(source: &ConstantsSource) -> Result<ModelConstants, AppError> {
    match source {
        ConstantsSource::Flag(path) | ConstantsSource::Env(path) => read_constants_json(path),
        ConstantsSource::Builtin => Ok(ModelConstants::reference()),
    }
}

/// Resolve and load the active table, honoring `.env`.
pub fn resolve_constants(flag: Option<&Path>) -> Result<(ModelConstants, ConstantsSource), AppError> {
    dotenvy::dotenv().ok();
    let env_value = std::env::var(CONSTANTS_ENV).ok();
    let source = choose_source(flag, env_value.as_deref());
    let constants = load_constants(&source)?;
    info!(source = %source, "loaded model constants");
    Ok((constants, source))
}
