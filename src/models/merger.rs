//! Merger-frequency estimate.
//!
//! Rational fit in κ for the dimensionless angular frequency at merger,
//! `M ω = Q_0 (1 + n1 κ + n2 κ²) / (1 + d1 κ + d2 κ²)` with
//! `Q_0 = a_0 sqrt(X2 / X1)`.

use crate::domain::IntrinsicParameters;
use crate::physics::constants::PI;
use crate::physics::{BinaryMasses, Kappa};

#[derive(Debug, Clone, Copy)]
pub struct MergerFit {
    pub a_0: f64,
    pub n_1: f64,
    pub n_2: f64,
    pub d_1: f64,
    pub d_2: f64,
}

pub const MERGER_FIT: MergerFit = MergerFit {
    a_0: 0.3586,
    n_1: 3.35411203e-2,
    n_2: 4.31460284e-5,
    d_1: 7.54224145e-2,
    d_2: 2.23626859e-4,
};

/// Dimensionless angular merger frequency `M ω_merger`.
pub fn momega_merger(masses: &BinaryMasses, kappa: Kappa) -> f64 {
    let fit = MERGER_FIT;
    let k = kappa.value();
    let num = 1.0 + fit.n_1 * k + fit.n_2 * k * k;
    let den = 1.0 + fit.d_1 * k + fit.d_2 * k * k;
    let q_0 = fit.a_0 * (masses.x2 / masses.x1).sqrt();

    q_0 * num / den
}

/// Merger frequency in Hz.
///
/// Pass the κ already used elsewhere for the same binary; `None` recomputes it
/// from `params`, which yields the identical value.
pub fn merger_frequency(params: &IntrinsicParameters, kappa: Option<Kappa>) -> f64 {
    let masses = BinaryMasses::of(params);
    let kappa = kappa.unwrap_or_else(|| Kappa::from_params(params));

    momega_merger(&masses, kappa) / masses.total_s / (2.0 * PI)
}
