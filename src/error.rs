//! Error types.
//!
//! - `DomainError` is what the diffusion model itself can return.
//! - `AppError` is what the `dab` binary reports: a message plus a process exit code.

use thiserror::Error;

/// Failure of a single model evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// `Xa` outside `[0, 1]` (or NaN).
    #[error("Mole fraction Xa must be between 0 and 1, got {xa}")]
    InvalidFraction { xa: f64 },

    /// `T <= 0` (or NaN).
    #[error("Temperature must be positive, got {t} K")]
    InvalidTemperature { t: f64 },

    /// A computed quantity is NaN or infinite (only raised under `NumericPolicy::Strict`).
    #[error("Non-finite value for {quantity}: {value}")]
    NumericInstability { quantity: &'static str, value: f64 },
}

impl DomainError {
    /// Stable snake_case tag, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidFraction { .. } => "invalid_fraction",
            DomainError::InvalidTemperature { .. } => "invalid_temperature",
            DomainError::NumericInstability { .. } => "numeric_instability",
        }
    }

    /// `true` for input errors the caller can fix by re-entering values.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFraction { .. } | DomainError::InvalidTemperature { .. }
        )
    }
}

/// A constant table that cannot describe a physical pair.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstantsError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

impl ConstantsError {
    /// Key of the offending parameter, as spelled in the constants file.
    pub fn name(&self) -> &'static str {
        match self {
            ConstantsError::NonFinite { name, .. } | ConstantsError::NonPositive { name, .. } => name,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let exit_code = if err.is_validation() { 2 } else { 4 };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_exit_codes() {
        let bad_fraction: AppError = DomainError::InvalidFraction { xa: 1.5 }.into();
        assert_eq!(bad_fraction.exit_code(), 2);

        let unstable: AppError = DomainError::NumericInstability {
            quantity: "lnDab",
            value: f64::NAN,
        }
        .into();
        assert_eq!(unstable.exit_code(), 4);
        assert!(unstable.to_string().contains("lnDab"));
    }

    #[test]
    fn kind_tags_are_distinct() {
        let kinds = [
            DomainError::InvalidFraction { xa: -1.0 }.kind(),
            DomainError::InvalidTemperature { t: 0.0 }.kind(),
            DomainError::NumericInstability { quantity: "Dab", value: f64::INFINITY }.kind(),
        ];
        assert_eq!(kinds, ["invalid_fraction", "invalid_temperature", "numeric_instability"]);
    }
}
