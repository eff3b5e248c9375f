//! Tidal and spin-squared contributions to the Fourier-domain phase.
//!
//! Both models are evaluated at the mass-scaled frequency `Mf` (physical
//! frequency times total mass in seconds), not at the physical frequency.

use crate::domain::IntrinsicParameters;
use crate::models::multipole::multipole_params;
use crate::physics::constants::PI;
use crate::physics::{BinaryMasses, Kappa};

/// Rational approximant in `x = (π Mf)^(2/3)`:
///
/// ```text
/// (1 + n1 x + n3/2 x^3/2 + n2 x^2 + n5/2 x^5/2) / (1 + d1 x + d3/2 x^3/2)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TidalPhasePade {
    pub n_1: f64,
    pub n_3over2: f64,
    pub n_2: f64,
    pub n_5over2: f64,
    pub d_1: f64,
    pub d_3over2: f64,
}

impl TidalPhasePade {
    pub fn eval(&self, x: f64) -> f64 {
        let x_3over2 = x.powf(1.5);
        let x_2 = x * x;
        let x_5over2 = x.powf(2.5);

        let num = 1.0 + self.n_1 * x + self.n_3over2 * x_3over2 + self.n_2 * x_2 + self.n_5over2 * x_5over2;
        let den = 1.0 + self.d_1 * x + self.d_3over2 * x_3over2;
        num / den
    }
}

pub const TIDAL_PHASE_PADE: TidalPhasePade = TidalPhasePade {
    n_1: -17.428,
    n_3over2: 31.867,
    n_2: -26.414,
    n_5over2: 62.362,
    d_1: -17.428 - 2.496,
    d_3over2: 36.089,
};

/// Tidal phase `ψ_T` at mass-scaled frequency `mf`.
///
/// `ψ_T = -κ · 39/(16η) · (Mf)^(5/2) · P(x)`. Exactly zero when `κ = 0`.
///
/// The Padé variable scales `mf` by the total mass once more,
/// `x = (π · Mf · M)^(2/3)`, matching the reference ripple implementation.
pub fn tidal_phase(mf: f64, masses: &BinaryMasses, kappa: Kappa) -> f64 {
    let x = (PI * mf * masses.total_s).powf(2.0 / 3.0);
    let ratio = TIDAL_PHASE_PADE.eval(x);

    -kappa.value() * (39.0 / (16.0 * masses.eta)) * mf.powf(2.5) * ratio
}

/// Per-binary coefficients of the self-spin phase terms at 2PN, 3PN and 3.5PN.
///
/// Building this runs the multipole fit for both bodies once; evaluating at a
/// frequency is then a handful of multiplications.
#[derive(Debug, Clone, Copy)]
pub struct SpinSquaredCoefficients {
    pub eta: f64,
    pub ss_2: f64,
    pub ss_3: f64,
    pub ss_3p5: f64,
}

impl SpinSquaredCoefficients {
    pub fn new(params: &IntrinsicParameters) -> Self {
        let masses = BinaryMasses::of(params);
        let (x1, x2) = (masses.x1, masses.x2);
        let (chi1, chi2) = (params.spin1, params.spin2);
        let (x1sq, x2sq) = (x1 * x1, x2 * x2);
        let (chi1sq, chi2sq) = (chi1 * chi1, chi2 * chi2);

        let q1 = multipole_params(params.lambda1);
        let q2 = multipole_params(params.lambda2);
        let (quad1, oct1) = (q1.quadrupole, q1.octupole);
        let (quad2, oct2) = (q2.quadrupole, q2.octupole);

        let ss_2 = -50.0 * quad1 * x1sq * chi1sq - 50.0 * quad2 * x2sq * chi2sq;

        let ss_3 = (5.0 / 84.0) * (9407.0 + 8218.0 * x1 - 2016.0 * x1sq) * quad1 * x1sq * chi1sq
            + (5.0 / 84.0) * (9407.0 + 8218.0 * x2 - 2016.0 * x2sq) * quad2 * x2sq * chi2sq;

        // The `quad - 1` factors and the mixed x1/x2 cross terms follow the
        // reference LAL expression as transcribed; not yet re-derived.
        let mut ss_3p5 = -400.0 * PI * (quad1 - 1.0) * chi1sq * x1sq
            - 400.0 * PI * (quad2 - 1.0) * chi2sq * x2sq;
        ss_3p5 += 10.0
            * ((x1sq + 308.0 / 3.0 * x1) * chi1 + (x2 - 89.0 / 3.0 * x2) * chi2)
            * (quad1 - 1.0)
            * x1sq
            * chi1sq
            + 10.0
                * ((x2sq + 308.0 / 3.0 * x2) * chi2 + (x1sq - 89.0 / 3.0 * x1) * chi1)
                * (quad2 - 1.0)
                * x2sq
                * chi2sq
            - 440.0 * oct1 * x1 * x1sq * chi1sq * chi1
            - 440.0 * oct2 * x2 * x2sq * chi2sq * chi2;

        Self {
            eta: masses.eta,
            ss_2,
            ss_3,
            ss_3p5,
        }
    }

    /// `ψ_SS = 3/(128η) (SS_2 (Mf)^-1/2 + SS_3 (Mf)^1/2 + SS_3.5 Mf)`.
    pub fn phase(&self, mf: f64) -> f64 {
        (3.0 / (128.0 * self.eta)) * (self.ss_2 * mf.powf(-0.5) + self.ss_3 * mf.sqrt() + self.ss_3p5 * mf)
    }
}

/// Spin-squared phase correction at mass-scaled frequency `mf`.
///
/// This is the raw value. The combiner only adds it when
/// `TidalOptions::spin_squared` is `Applied`; by default it contributes zero
/// because the terms have not been validated against the reference model.
pub fn spin_squared_phase(mf: f64, params: &IntrinsicParameters) -> f64 {
    SpinSquaredCoefficients::new(params).phase(mf)
}
