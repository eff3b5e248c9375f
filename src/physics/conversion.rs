//! Mass conversions and the effective tidal coupling.
//!
//! Two unit systems meet here: component masses in solar masses (what callers
//! pass) and geometrized masses in seconds (what the fits are calibrated in).

use crate::domain::{IntrinsicParameters, SourceParameters};
use crate::physics::constants::GT;

/// Derived mass quantities of a binary, in geometrized units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryMasses {
    /// Body 1 mass (s).
    pub m1_s: f64,
    /// Body 2 mass (s).
    pub m2_s: f64,
    /// Total mass (s).
    pub total_s: f64,
    /// Symmetric mass ratio `m1 m2 / M^2`.
    pub eta: f64,
    /// Mass fraction `m1 / M`.
    pub x1: f64,
    /// Mass fraction `m2 / M`.
    pub x2: f64,
}

impl BinaryMasses {
    /// Convert component masses given in solar masses.
    pub fn from_solar(m1: f64, m2: f64) -> Self {
        let m1_s = m1 * GT;
        let m2_s = m2 * GT;
        let total_s = m1_s + m2_s;
        Self {
            m1_s,
            m2_s,
            total_s,
            eta: m1_s * m2_s / (total_s * total_s),
            x1: m1_s / total_s,
            x2: m2_s / total_s,
        }
    }

    pub fn of(params: &IntrinsicParameters) -> Self {
        Self::from_solar(params.mass1, params.mass2)
    }
}

/// Total effective tidal coupling κ of a binary.
///
/// Computed once per parameter set; the phase, amplitude and merger-frequency
/// models all take it as an argument instead of recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kappa(f64);

impl Kappa {
    /// `κ = 3/13 [ (1 + 12 m2/m1) X1^5 Λ1 + (1 + 12 m1/m2) X2^5 Λ2 ]`.
    ///
    /// The `m2/m1` ratios use the solar-mass inputs and the fractions `X1, X2`
    /// the geometrized ones; the ratio is unit-free so the mix is consistent.
    pub fn from_params(params: &IntrinsicParameters) -> Self {
        let masses = BinaryMasses::of(params);
        let (m1, m2) = (params.mass1, params.mass2);

        let term1 = (1.0 + 12.0 * m2 / m1) * masses.x1.powi(5) * params.lambda1;
        let term2 = (1.0 + 12.0 * m1 / m2) * masses.x2.powi(5) * params.lambda2;

        Self((3.0 / 13.0) * (term1 + term2))
    }

    /// Wrap an already computed value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Component masses from chirp mass and symmetric mass ratio, `m1 >= m2`.
///
/// `eta > 0.25` has no real solution and yields NaN masses.
pub fn mc_eta_to_ms(chirp_mass: f64, eta: f64) -> (f64, f64) {
    let total = chirp_mass / eta.powf(3.0 / 5.0);
    let root = (total * total - 4.0 * total * total * eta).sqrt();
    ((total + root) / 2.0, (total - root) / 2.0)
}

/// Chirp mass and symmetric mass ratio from component masses.
pub fn ms_to_mc_eta(m1: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let eta = m1 * m2 / (total * total);
    (total * eta.powf(3.0 / 5.0), eta)
}

/// Intrinsic parameters of a boundary parameter vector (`m1 >= m2`).
pub fn intrinsic_parameters(source: &SourceParameters) -> IntrinsicParameters {
    let (mass1, mass2) = mc_eta_to_ms(source.chirp_mass, source.eta);
    IntrinsicParameters {
        mass1,
        mass2,
        spin1: source.spin1,
        spin2: source.spin2,
        lambda1: source.lambda1,
        lambda2: source.lambda2,
    }
}
