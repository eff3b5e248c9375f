//! Tidal amplitude correction.
//!
//! Unlike the phase models this one takes the physical frequency (Hz) and
//! builds `x = (π M_sec f)^(2/3)` itself. `M_sec` is the total mass in seconds
//! scaled by `GT` once more, as in the reference ripple implementation; with a
//! single factor the correction swamps any physical baseline.

use crate::physics::constants::{C, GT, M_PER_MPC, PI};
use crate::physics::{BinaryMasses, Kappa};

/// Padé resummation `(1 + n1 x + n289 x^2.89) / (1 + d x^4)`.
#[derive(Debug, Clone, Copy)]
pub struct TidalAmplitudePade {
    pub n1: f64,
    pub n289: f64,
    pub d: f64,
}

impl TidalAmplitudePade {
    pub fn eval(&self, x: f64) -> f64 {
        (1.0 + self.n1 * x + self.n289 * x.powf(2.89)) / (1.0 + self.d * x.powi(4))
    }
}

pub const TIDAL_AMPLITUDE_PADE: TidalAmplitudePade = TidalAmplitudePade {
    n1: 4.157407407407407,
    n289: 2519.111111111111,
    d: 13477.8073677,
};

/// Luminosity distance in seconds.
pub fn distance_seconds(distance_mpc: f64) -> f64 {
    distance_mpc * M_PER_MPC / C
}

/// Tidal amplitude `A_T` at physical frequency `f` (Hz), scaled by distance.
///
/// `A_T = -9 κ x^3.25 P(x) / d_L`, with `d_L` in seconds.
pub fn tidal_amplitude(f: f64, masses: &BinaryMasses, kappa: Kappa, distance_mpc: f64) -> f64 {
    let m_sec = masses.total_s * GT;
    let x = (PI * m_sec * f).powf(2.0 / 3.0);
    let amp = -9.0 * kappa.value() * x.powf(3.25) * TIDAL_AMPLITUDE_PADE.eval(x);

    amp / distance_seconds(distance_mpc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_DISTANCE_MPC, IntrinsicParameters};

    fn bns(lambda: f64) -> IntrinsicParameters {
        IntrinsicParameters {
            mass1: 1.4,
            mass2: 1.35,
            spin1: 0.0,
            spin2: 0.0,
            lambda1: lambda,
            lambda2: lambda,
        }
    }

    #[test]
    fn amplitude_zero_for_zero_kappa() {
        let p = bns(0.0);
        let masses = BinaryMasses::of(&p);
        let kappa = Kappa::from_params(&p);
        for &f in &[20.0, 200.0, 2000.0] {
            assert_eq!(tidal_amplitude(f, &masses, kappa, 40.0), 0.0);
        }
    }

    #[test]
    fn amplitude_is_negative_and_scales_inversely_with_distance() {
        let p = bns(400.0);
        let masses = BinaryMasses::of(&p);
        let kappa = Kappa::from_params(&p);

        let near = tidal_amplitude(300.0, &masses, kappa, DEFAULT_DISTANCE_MPC);
        let far = tidal_amplitude(300.0, &masses, kappa, 40.0);
        assert!(near < 0.0 && far < 0.0);
        assert!(((near / far) - 40.0).abs() < 1e-9, "ratio={}", near / far);
    }

    #[test]
    fn amplitude_stays_below_newtonian_baseline() {
        use crate::domain::{GridSpacing, SourceParameters};
        use crate::math::frequency_grid;
        use crate::physics::ms_to_mc_eta;
        use crate::waveform::{BbhBaseline, NewtonianBaseline};

        let p = bns(400.0);
        let masses = BinaryMasses::of(&p);
        let kappa = Kappa::from_params(&p);
        let (chirp_mass, eta) = ms_to_mc_eta(p.mass1, p.mass2);
        let source = SourceParameters::from([chirp_mass, eta, 0.0, 0.0, 400.0, 400.0, 40.0, 0.0, 0.0]);

        let freqs = frequency_grid(20.0, 2048.0, 256, GridSpacing::Log).unwrap();
        let h_bbh = NewtonianBaseline.strain(&freqs, &source.baseline(), 20.0);

        for (&f, h) in freqs.iter().zip(h_bbh.iter()) {
            let a_t = tidal_amplitude(f, &masses, kappa, 40.0).abs();
            assert!(a_t < 0.05 * h.norm(), "f={f}: |A_T|={a_t:e} |h_bbh|={:e}", h.norm());
            if f <= 100.0 {
                assert!(a_t < 1e-5 * h.norm(), "f={f}: |A_T|={a_t:e} |h_bbh|={:e}", h.norm());
            }
        }
    }

    #[test]
    fn distance_in_seconds() {
        // 1 Mpc is about 1.03e14 light-seconds.
        let d = distance_seconds(1.0);
        assert!((d / 1.029_27e14 - 1.0).abs() < 1e-4, "d={d:e}");
    }

    #[test]
    fn pade_reference_value() {
        let x = 0.05;
        let p = TIDAL_AMPLITUDE_PADE;
        let expected = (1.0 + p.n1 * x + p.n289 * x.powf(2.89)) / (1.0 + p.d * x.powi(4));
        assert_eq!(p.eval(x), expected);
        assert_eq!(p.eval(0.0), 1.0);
    }
}
