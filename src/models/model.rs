//! Mutual diffusion coefficient of a binary liquid mixture.
//!
//! `ln(Dab)` is the sum of five contributions:
//!
//! - ideal blend of the infinite-dilution diffusivities
//! - entropic (size) correction from volume fractions
//! - free-volume asymmetry correction
//! - association corrections centred on A and on B, built from
//!   UNIFAC-style local-composition surface fractions
//!
//! Evaluation is a single pass: one validation gate, then straight-line arithmetic.
//! The model holds only its injected constant table, so it is `Copy` and can be
//! shared freely between threads.

use tracing::{debug, warn};

use crate::domain::{
    Breakdown, CalculationInput, CalculationResult, Intermediates, LogTerms, ModelConstants,
    NumericPolicy,
};
use crate::error::DomainError;
use crate::math::{interaction_factor, local_fractions, weighted_fraction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionModel {
    constants: ModelConstants,
}

impl DiffusionModel {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Evaluate at `(Xa, T)`, letting NaN/Inf propagate into the result.
    pub fn evaluate(&self, xa: f64, t: f64) -> Result<CalculationResult, DomainError> {
        self.evaluate_with(xa, t, NumericPolicy::Propagate)
    }

    pub fn evaluate_with(
        &self,
        xa: f64,
        t: f64,
        policy: NumericPolicy,
    ) -> Result<CalculationResult, DomainError> {
        Ok(self.breakdown_with(xa, t, policy)?.result)
    }

    pub fn breakdown(&self, xa: f64, t: f64) -> Result<Breakdown, DomainError> {
        self.breakdown_with(xa, t, NumericPolicy::Propagate)
    }

    /// Evaluate and keep every intermediate quantity.
    ///
    /// # Errors
    ///
    /// - `InvalidFraction` if `Xa` is not in `[0, 1]`.
    /// - `InvalidTemperature` if `T <= 0`.
    /// - `NumericInstability` (strict policy only) naming the first non-finite
    ///   quantity, in evaluation order.
    pub fn breakdown_with(
        &self,
        xa: f64,
        t: f64,
        policy: NumericPolicy,
    ) -> Result<Breakdown, DomainError> {
        let input = validate_input(xa, t)?;
        let c = &self.constants;

        let intermediates = compute_intermediates(c, &input);
        if policy == NumericPolicy::Strict {
            for (name, value) in intermediates.named() {
                ensure_finite(name, value)?;
            }
        }

        let terms = compute_log_terms(c, &input, &intermediates);
        if policy == NumericPolicy::Strict {
            for (name, value) in terms.named() {
                ensure_finite(name, value)?;
            }
        }

        let ln_dab = terms.sum();
        let dab = ln_dab.exp();
        let result = CalculationResult {
            ln_dab,
            dab,
            relative_error: relative_error(dab, c.v_exp),
            xa: input.xa,
            t: input.t,
        };

        match policy {
            NumericPolicy::Strict => {
                ensure_finite("lnDab", result.ln_dab)?;
                ensure_finite("Dab", result.dab)?;
                ensure_finite("relativeError", result.relative_error)?;
            }
            NumericPolicy::Propagate => {
                if !(result.ln_dab.is_finite() && result.dab.is_finite()) {
                    warn!(xa, t, ln_dab, "non-finite diffusion coefficient");
                }
            }
        }

        debug!(xa, t, ln_dab, dab, "evaluated diffusion coefficient");

        Ok(Breakdown {
            input,
            intermediates,
            terms,
            result,
        })
    }
}

impl Default for DiffusionModel {
    fn default() -> Self {
        Self::new(ModelConstants::reference())
    }
}

/// One-shot evaluation against an explicit constant table.
pub fn evaluate(constants: &ModelConstants, xa: f64, t: f64) -> Result<CalculationResult, DomainError> {
    DiffusionModel::new(*constants).evaluate(xa, t)
}

/// The validation gate. Bounds on `Xa` are inclusive; NaN fails both checks.
pub fn validate_input(xa: f64, t: f64) -> Result<CalculationInput, DomainError> {
    if !(0.0..=1.0).contains(&xa) {
        return Err(DomainError::InvalidFraction { xa });
    }
    if t.is_nan() || t <= 0.0 {
        return Err(DomainError::InvalidTemperature { t });
    }
    Ok(CalculationInput::new(xa, t))
}

/// `|Dab - V_exp| / V_exp`, in percent.
pub fn relative_error(dab: f64, v_exp: f64) -> f64 {
    ((dab - v_exp).abs() / v_exp) * 100.0
}

fn compute_intermediates(c: &ModelConstants, input: &CalculationInput) -> Intermediates {
    let xa = input.xa;
    let xb = input.xb();

    let phi_a = weighted_fraction(xa, xb, c.lambda_a, c.lambda_b);
    let tau_ab = interaction_factor(c.a_ab, input.t);
    let tau_ba = interaction_factor(c.a_ba, input.t);
    let theta_a = weighted_fraction(xa, xb, c.q_a, c.q_b);
    let theta_b = 1.0 - theta_a;
    let local = local_fractions(theta_a, theta_b, tau_ab, tau_ba);

    Intermediates {
        xb,
        phi_a,
        phi_b: 1.0 - phi_a,
        tau_ab,
        tau_ba,
        theta_a,
        theta_b,
        theta_aa: local.aa,
        theta_bb: local.bb,
        theta_ab: local.ab,
        theta_ba: local.ba,
    }
}

fn compute_log_terms(c: &ModelConstants, input: &CalculationInput, i: &Intermediates) -> LogTerms {
    let xa = input.xa;
    let xb = i.xb;
    let ln_tau_ab = i.tau_ab.ln();
    let ln_tau_ba = i.tau_ba.ln();

    LogTerms {
        ideal: xb * c.d_ab.ln() + xa * c.d_ba.ln(),
        entropic: 2.0 * (xa * (xa / i.phi_a).ln() + xb * (xb / i.phi_b).ln()),
        free_volume: 2.0
            * xb
            * xa
            * ((i.phi_a / xa) * (1.0 - c.lambda_a / c.lambda_b)
                + (i.phi_b / xb) * (1.0 - c.lambda_b / c.lambda_a)),
        association_a: xb
            * c.q_a
            * ((1.0 - i.theta_ba.powi(2)) * ln_tau_ba
                + (1.0 - i.theta_bb.powi(2)) * i.tau_ab * ln_tau_ab),
        association_b: xa
            * c.q_b
            * ((1.0 - i.theta_ab.powi(2)) * ln_tau_ab
                + (1.0 - i.theta_aa.powi(2)) * i.tau_ba * ln_tau_ba),
    }
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NumericInstability { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        ((a - b) / b).abs() < rel
    }

    #[test]
    fn reference_point_matches_hand_derivation() {
        let r = DiffusionModel::default().evaluate(0.5, 298.15).unwrap();
        assert!(close(r.ln_dab, -11.175511572215445, 1e-10), "lnDab={}", r.ln_dab);
        assert!(close(r.dab, 1.4013189394832653e-5, 1e-10), "Dab={}", r.dab);
        assert!(close(r.relative_error, 5.362326276937243, 1e-8), "err={}", r.relative_error);
        assert_eq!(r.xa, 0.5);
        assert_eq!(r.t, 298.15);
    }

    #[test]
    fn reference_intermediates() {
        let b = DiffusionModel::default().breakdown(0.5, 298.15).unwrap();
        let i = b.intermediates;
        assert!(close(i.phi_a, 0.5366666666666666, 1e-12));
        assert!(close(i.tau_ab, 1.0367396446316395, 1e-12));
        assert!(close(i.tau_ba, 0.520764430702863, 1e-12));
        assert!(close(i.theta_a, 0.5056497175141244, 1e-12));
        assert!(close(i.theta_aa, 0.6626346511199371, 1e-12));
        assert!(close(i.theta_bb, 0.4853340422515462, 1e-12));
        assert!(close(i.theta_ab, 0.5146659577484539, 1e-12));
        assert!(close(i.theta_ba, 0.33736534888006287, 1e-12));
        assert_eq!(b.terms.sum(), b.result.ln_dab);
    }

    #[test]
    fn gate_rejects_out_of_range_inputs() {
        let m = DiffusionModel::default();
        assert!(matches!(m.evaluate(-0.01, 300.0), Err(DomainError::InvalidFraction { .. })));
        assert!(matches!(m.evaluate(1.0001, 300.0), Err(DomainError::InvalidFraction { .. })));
        assert!(matches!(m.evaluate(f64::NAN, 300.0), Err(DomainError::InvalidFraction { .. })));
        assert!(matches!(m.evaluate(0.5, 0.0), Err(DomainError::InvalidTemperature { .. })));
        assert!(matches!(m.evaluate(0.5, -10.0), Err(DomainError::InvalidTemperature { .. })));
        assert!(matches!(m.evaluate(0.5, f64::NAN), Err(DomainError::InvalidTemperature { .. })));
    }

    #[test]
    fn infinite_temperature_passes_gate_and_removes_association() {
        let m = DiffusionModel::default();
        let r = m.evaluate_with(0.5, f64::INFINITY, NumericPolicy::Strict).unwrap();
        assert!(r.ln_dab.is_finite());
        assert_eq!(r.t, f64::INFINITY);

        // τ = 1 for both pairs, so every ln(τ) factor vanishes.
        let b = m.breakdown(0.5, f64::INFINITY).unwrap();
        assert_eq!(b.intermediates.tau_ab, 1.0);
        assert_eq!(b.intermediates.tau_ba, 1.0);
        assert_eq!(b.terms.association_a, 0.0);
        assert_eq!(b.terms.association_b, 0.0);
        assert!(close(r.ln_dab, -10.667152684884147, 1e-10), "lnDab={}", r.ln_dab);
    }

    #[test]
    fn fraction_is_checked_before_temperature() {
        let err = DiffusionModel::default().evaluate(2.0, -1.0).unwrap_err();
        assert_eq!(err, DomainError::InvalidFraction { xa: 2.0 });
    }

    #[test]
    fn pure_components_pass_the_gate_but_are_not_finite() {
        let m = DiffusionModel::default();
        for xa in [0.0, 1.0] {
            let r = m.evaluate(xa, 298.15).unwrap();
            assert!(r.ln_dab.is_nan(), "xa={xa} lnDab={}", r.ln_dab);
            assert!(r.dab.is_nan());
        }
    }

    #[test]
    fn strict_policy_names_first_bad_quantity() {
        let m = DiffusionModel::default();
        let err = m.evaluate_with(0.0, 298.15, NumericPolicy::Strict).unwrap_err();
        match err {
            DomainError::NumericInstability { quantity, value } => {
                assert_eq!(quantity, "entropic");
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_policy_catches_degenerate_constants() {
        let mut c = ModelConstants::reference();
        c.lambda_b = 0.0;
        let m = DiffusionModel::new(c);
        let err = m.evaluate_with(0.0, 298.15, NumericPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), "numeric_instability");
        assert!(err.to_string().contains("phiA"), "{err}");

        // Propagating policy hands back the NaN instead.
        assert!(m.evaluate(0.0, 298.15).unwrap().ln_dab.is_nan());
    }

    #[test]
    fn strict_and_propagate_agree_on_regular_inputs() {
        let m = DiffusionModel::default();
        let a = m.evaluate(0.25, 313.15).unwrap();
        let b = m.evaluate_with(0.25, 313.15, NumericPolicy::Strict).unwrap();
        assert_eq!(a, b);
        assert!(close(a.ln_dab, -11.211797673837426, 1e-10));
    }

    #[test]
    fn free_function_matches_model() {
        let c = ModelConstants::reference();
        let a = evaluate(&c, 0.9, 298.15).unwrap();
        let b = DiffusionModel::new(c).evaluate(0.9, 298.15).unwrap();
        assert_eq!(a, b);
        assert!(close(a.relative_error, 72.14065993097071, 1e-8));
    }

    #[test]
    fn relative_error_zero_only_at_reference() {
        assert_eq!(relative_error(1.33e-5, 1.33e-5), 0.0);
        assert!(relative_error(1.0e-5, 1.33e-5) > 0.0);
        assert!(relative_error(2.0e-5, 1.33e-5) > 0.0);
    }
}
