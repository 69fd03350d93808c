//! Composition weightings for a binary mixture.
//!
//! - volume fraction: `phiA = Xa λA / (Xa λA + Xb λB)`
//! - surface-area fraction: `θA = Xa qA / (Xa qA + Xb qB)`
//! - interaction factor: `τ = exp(-a / T)`
//! - local-composition fractions from `θ` and `τ`
//!
//! Nothing here guards denominators. A zero weight sum gives NaN, which is the
//! caller's to handle.

/// Fraction of A when each component is weighted by a per-molecule parameter.
///
/// Used for both volume fractions (weights `λ`) and surface-area fractions (weights `q`).
pub fn weighted_fraction(xa: f64, xb: f64, weight_a: f64, weight_b: f64) -> f64 {
    let a = xa * weight_a;
    a / (a + xb * weight_b)
}

/// Boltzmann-type factor `exp(-a / T)` for an interaction parameter `a` in K.
pub fn interaction_factor(a: f64, t: f64) -> f64 {
    (-a / t).exp()
}

/// Local-composition surface fractions around each molecule type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFractions {
    pub aa: f64,
    pub bb: f64,
    pub ab: f64,
    pub ba: f64,
}

/// Compute `θ_AA`, `θ_BB`, `θ_AB`, `θ_BA`.
///
/// `tau_ab` weights A-type contacts, `tau_ba` weights B-type contacts; swapping the
/// two arguments gives a different model.
pub fn local_fractions(theta_a: f64, theta_b: f64, tau_ab: f64, tau_ba: f64) -> LocalFractions {
    LocalFractions {
        aa: theta_a / (theta_a + theta_b * tau_ba),
        bb: theta_b / (theta_b + theta_a * tau_ab),
        ab: (theta_a * tau_ab) / (theta_a * tau_ab + theta_b),
        ba: (theta_b * tau_ba) / (theta_b * tau_ba + theta_a),
    }
}
