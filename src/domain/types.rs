//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed by value into the model (the constant table is injected, never global)
//! - loaded from / written to JSON
//! - printed as JSON by `dab eval --json`

use serde::{Deserialize, Serialize};

use crate::error::ConstantsError;

/// Binary interaction and pure-component parameters for one chemical pair.
///
/// JSON keys follow the usual notation of the correlation (`aBA`, `lambda_A`, ...).
/// Units: `V_exp`, `D_AB`, `D_BA` in cm²/s; `aAB`, `aBA` in K; the rest dimensionless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Experimental reference diffusion coefficient.
    #[serde(rename = "V_exp")]
    pub v_exp: f64,
    /// Interaction energy parameter, B with A.
    #[serde(rename = "aBA")]
    pub a_ba: f64,
    /// Interaction energy parameter, A with B.
    #[serde(rename = "aAB")]
    pub a_ab: f64,
    /// Volume parameter of A.
    #[serde(rename = "lambda_A")]
    pub lambda_a: f64,
    /// Volume parameter of B.
    #[serde(rename = "lambda_B")]
    pub lambda_b: f64,
    /// Surface-area parameter of A.
    #[serde(rename = "qA")]
    pub q_a: f64,
    /// Surface-area parameter of B.
    #[serde(rename = "qB")]
    pub q_b: f64,
    /// Infinite-dilution diffusivity of A in B.
    #[serde(rename = "D_AB")]
    pub d_ab: f64,
    /// Infinite-dilution diffusivity of B in A.
    #[serde(rename = "D_BA")]
    pub d_ba: f64,
}

impl ModelConstants {
    /// The reference pair the calculator ships with.
    pub const fn reference() -> Self {
        Self {
            v_exp: 1.33e-5,
            a_ba: 194.5302,
            a_ab: -10.7575,
            lambda_a: 1.127,
            lambda_b: 0.973,
            q_a: 1.432,
            q_b: 1.4,
            d_ab: 2.1e-5,
            d_ba: 2.67e-5,
        }
    }

    /// Named view of every parameter, in file order.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("V_exp", self.v_exp),
            ("aBA", self.a_ba),
            ("aAB", self.a_ab),
            ("lambda_A", self.lambda_a),
            ("lambda_B", self.lambda_b),
            ("qA", self.q_a),
            ("qB", self.q_b),
            ("D_AB", self.d_ab),
            ("D_BA", self.d_ba),
        ]
    }

    /// Sanity check for a table read from disk.
    ///
    /// Every value must be finite, and everything except the two interaction
    /// parameters must be strictly positive. The model does not call this: a
    /// degenerate table passed in directly evaluates to NaN/Inf instead.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        for (name, value) in self.entries() {
            if !value.is_finite() {
                return Err(ConstantsError::NonFinite { name, value });
            }
            let signed = matches!(name, "aBA" | "aAB");
            if !signed && value <= 0.0 {
                return Err(ConstantsError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self::reference()
    }
}

/// Inputs to one evaluation. `Xb = 1 - Xa` is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(rename = "Xa")]
    pub xa: f64,
    #[serde(rename = "T")]
    pub t: f64,
}

impl CalculationInput {
    pub fn new(xa: f64, t: f64) -> Self {
        Self { xa, t }
    }

    pub fn xb(&self) -> f64 {
        1.0 - self.xa
    }
}

/// Output of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Natural log of the diffusion coefficient.
    #[serde(rename = "lnDab")]
    pub ln_dab: f64,
    /// Mutual diffusion coefficient (cm²/s).
    #[serde(rename = "Dab")]
    pub dab: f64,
    /// `|Dab - V_exp| / V_exp * 100`.
    #[serde(rename = "relativeError")]
    pub relative_error: f64,
    #[serde(rename = "Xa")]
    pub xa: f64,
    #[serde(rename = "T")]
    pub t: f64,
}

/// What to do when arithmetic produces NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Let non-finite values flow into the result.
    #[default]
    Propagate,
    /// Reject the evaluation with `DomainError::NumericInstability`.
    Strict,
}

/// The five additive contributions to `ln(Dab)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogTerms {
    /// `Xb ln D_AB + Xa ln D_BA`
    pub ideal: f64,
    /// `2 (Xa ln(Xa/phiA) + Xb ln(Xb/phiB))`
    pub entropic: f64,
    pub free_volume: f64,
    pub association_a: f64,
    pub association_b: f64,
}

impl LogTerms {
    /// Left-to-right sum, in the order the terms are listed.
    pub fn sum(&self) -> f64 {
        self.ideal + self.entropic + self.free_volume + self.association_a + self.association_b
    }

    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("ideal", self.ideal),
            ("entropic", self.entropic),
            ("free_volume", self.free_volume),
            ("association_a", self.association_a),
            ("association_b", self.association_b),
        ]
    }
}

/// Volume, surface and local-composition fractions at one `(Xa, T)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Intermediates {
    pub xb: f64,
    pub phi_a: f64,
    pub phi_b: f64,
    pub tau_ab: f64,
    pub tau_ba: f64,
    pub theta_a: f64,
    pub theta_b: f64,
    pub theta_aa: f64,
    pub theta_bb: f64,
    pub theta_ab: f64,
    pub theta_ba: f64,
}

impl Intermediates {
    pub fn named(&self) -> [(&'static str, f64); 11] {
        [
            ("Xb", self.xb),
            ("phiA", self.phi_a),
            ("phiB", self.phi_b),
            ("tauAB", self.tau_ab),
            ("tauBA", self.tau_ba),
            ("thetaA", self.theta_a),
            ("thetaB", self.theta_b),
            ("thetaAA", self.theta_aa),
            ("thetaBB", self.theta_bb),
            ("thetaAB", self.theta_ab),
            ("thetaBA", self.theta_ba),
        ]
    }
}

/// Full trace of one evaluation: inputs, intermediates, log terms and result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub input: CalculationInput,
    pub intermediates: Intermediates,
    pub terms: LogTerms,
    pub result: CalculationResult,
}
