//! Combine a baseline strain with the NRTidalv2 corrections.
//!
//! Per frequency sample `f`, with `h_bbh` the baseline and `ψ_bbh = h_bbh / |h_bbh|`:
//!
//! ```text
//! h0 = A_P · (h_bbh + A_T · exp(-i ψ_bbh)) · exp(-i (ψ_T + ψ_SS))
//! ```
//!
//! where `A_T` is the tidal amplitude, `ψ_T` the tidal phase, `ψ_SS` the
//! spin-squared phase and `A_P = 1 - taper`. κ is derived once and shared by
//! every term. With default options `ψ_SS = 0` and `A_P = 1`.

use nalgebra::Complex;
use rayon::prelude::*;

use crate::domain::{ExtrinsicParameters, IntrinsicParameters, Strain, TidalOptions, TidalSummary};
use crate::math::{TAPER_WIDTH_FACTOR, planck_taper};
use crate::models::{SpinSquaredCoefficients, merger_frequency, momega_merger, multipole_params, tidal_amplitude, tidal_phase};
use crate::physics::{BinaryMasses, Kappa};

/// Everything the per-sample evaluation needs, computed once per parameter set.
#[derive(Debug, Clone, Copy)]
struct TidalTerms {
    masses: BinaryMasses,
    kappa: Kappa,
    distance_mpc: f64,
    spin_squared: Option<SpinSquaredCoefficients>,
    /// Taper edges `(f_merger, 1.2 f_merger)` when the taper is applied.
    taper: Option<(f64, f64)>,
}

impl TidalTerms {
    fn new(intrinsic: &IntrinsicParameters, extrinsic: &ExtrinsicParameters, options: &TidalOptions) -> Self {
        let masses = BinaryMasses::of(intrinsic);
        let kappa = Kappa::from_params(intrinsic);

        let spin_squared = options
            .spin_squared
            .is_applied()
            .then(|| SpinSquaredCoefficients::new(intrinsic));
        let taper = options.taper.is_applied().then(|| {
            let f_merger = merger_frequency(intrinsic, Some(kappa));
            (f_merger, TAPER_WIDTH_FACTOR * f_merger)
        });

        tracing::debug!(
            kappa = kappa.value(),
            eta = masses.eta,
            spin_squared = ?options.spin_squared,
            taper = ?options.taper,
            "tidal terms prepared"
        );

        Self {
            masses,
            kappa,
            distance_mpc: extrinsic.luminosity_distance,
            spin_squared,
            taper,
        }
    }

    fn apply(&self, f: f64, h_bbh: Complex<f64>) -> Complex<f64> {
        let i = Complex::<f64>::i();

        let psi_bbh = h_bbh / h_bbh.norm();
        let a_t = tidal_amplitude(f, &self.masses, self.kappa, self.distance_mpc);
        let a_p = match self.taper {
            Some((t1, t2)) => 1.0 - planck_taper(f, t1, t2),
            None => 1.0,
        };

        let mf = f * self.masses.total_s;
        let psi_t = tidal_phase(mf, &self.masses, self.kappa);
        let psi_ss = self.spin_squared.map_or(0.0, |c| c.phase(mf));

        (h_bbh + (-i * psi_bbh).exp() * a_t) * (-i * (psi_t + psi_ss)).exp() * a_p
    }
}

/// Add tidal corrections to a baseline strain sampled on `freqs`.
///
/// The output is aligned index-for-index with `freqs`. A baseline of the wrong
/// length is logged; grid samples it does not cover come out as NaN and extra
/// baseline samples are ignored.
pub fn apply_tidal_corrections(
    freqs: &[f64],
    intrinsic: &IntrinsicParameters,
    extrinsic: &ExtrinsicParameters,
    h0_bbh: &[Complex<f64>],
    options: &TidalOptions,
) -> Strain {
    if h0_bbh.len() != freqs.len() {
        tracing::warn!(
            n_freqs = freqs.len(),
            n_baseline = h0_bbh.len(),
            "baseline strain length differs from frequency grid"
        );
    }

    let terms = TidalTerms::new(intrinsic, extrinsic, options);
    let missing = Complex::new(f64::NAN, f64::NAN);
    freqs
        .par_iter()
        .enumerate()
        .map(|(i, &f)| terms.apply(f, h0_bbh.get(i).copied().unwrap_or(missing)))
        .collect()
}

/// Derived quantities for a parameter set, sharing one κ.
pub fn summarize(intrinsic: &IntrinsicParameters) -> TidalSummary {
    let masses = BinaryMasses::of(intrinsic);
    let kappa = Kappa::from_params(intrinsic);

    TidalSummary {
        intrinsic: *intrinsic,
        total_mass_s: masses.total_s,
        eta: masses.eta,
        x1: masses.x1,
        x2: masses.x2,
        kappa: kappa.value(),
        body1: multipole_params(intrinsic.lambda1),
        body2: multipole_params(intrinsic.lambda2),
        momega_merger: momega_merger(&masses, kappa),
        merger_frequency_hz: merger_frequency(intrinsic, Some(kappa)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CorrectionPolicy;

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

    fn at_40mpc() -> ExtrinsicParameters {
        ExtrinsicParameters {
            luminosity_distance: 40.0,
            ..ExtrinsicParameters::default()
        }
    }

    #[test]
    fn zero_deformability_returns_baseline() {
        let freqs = [20.0, 100.0, 500.0, 1500.0];
        let h_bbh: Vec<Complex<f64>> = freqs.iter().map(|&f| Complex::from_polar(1e-23 / f, f * 0.01)).collect();

        let h = apply_tidal_corrections(&freqs, &bns(0.0), &at_40mpc(), &h_bbh, &TidalOptions::default());
        for (a, b) in h.iter().zip(h_bbh.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn tidal_phase_rotates_unit_baseline() {
        let h = apply_tidal_corrections(
            &[100.0],
            &bns(400.0),
            &at_40mpc(),
            &[Complex::new(1.0, 0.0)],
            &TidalOptions::default(),
        );
        assert!(h[0].re.is_finite() && h[0].im.is_finite());
        assert!(h[0].im > 0.0, "negative ψ_T gives positive imaginary part: {}", h[0]);
        assert!((h[0].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_bypasses_spin_squared() {
        let mut p = bns(400.0);
        p.spin1 = 0.05;
        p.spin2 = -0.04;
        let freqs = [50.0, 300.0];
        let h_bbh = vec![Complex::new(1.0, 0.5); 2];

        let spinning = apply_tidal_corrections(&freqs, &p, &at_40mpc(), &h_bbh, &TidalOptions::default());
        let still = apply_tidal_corrections(&freqs, &bns(400.0), &at_40mpc(), &h_bbh, &TidalOptions::default());
        assert_eq!(spinning, still);

        let applied = TidalOptions {
            spin_squared: CorrectionPolicy::Applied,
            ..TidalOptions::default()
        };
        let corrected = apply_tidal_corrections(&freqs, &p, &at_40mpc(), &h_bbh, &applied);
        assert_ne!(corrected, spinning);
    }

    #[test]
    fn applied_taper_suppresses_past_merger() {
        let p = bns(400.0);
        let f_merger = summarize(&p).merger_frequency_hz;
        let freqs = [0.5 * f_merger, 1.1 * f_merger, 2.0 * f_merger];
        let h_bbh = vec![Complex::new(1.0, 0.0); 3];
        let opts = TidalOptions {
            taper: CorrectionPolicy::Applied,
            ..TidalOptions::default()
        };

        let tapered = apply_tidal_corrections(&freqs, &p, &at_40mpc(), &h_bbh, &opts);
        let plain = apply_tidal_corrections(&freqs, &p, &at_40mpc(), &h_bbh, &TidalOptions::default());
        assert_eq!(tapered[0], plain[0]);
        assert!((tapered[1].norm() - 0.5 * plain[1].norm()).abs() < 1e-9);
        assert_eq!(tapered[2].norm(), 0.0);
        assert!(plain[2].norm() > 0.9, "bypassed taper keeps post-merger power");
    }

    #[test]
    fn nan_baseline_propagates() {
        let h = apply_tidal_corrections(
            &[100.0, 200.0],
            &bns(400.0),
            &at_40mpc(),
            &[Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0)],
            &TidalOptions::default(),
        );
        assert!(h[0].re.is_nan());
        // A zero baseline has no phase: ψ_bbh = 0/0.
        assert!(h[1].re.is_nan());
    }

    #[test]
    fn short_baseline_keeps_grid_alignment() {
        let freqs = [100.0, 200.0, 300.0];
        let h = apply_tidal_corrections(
            &freqs,
            &bns(400.0),
            &at_40mpc(),
            &[Complex::new(1.0, 0.0)],
            &TidalOptions::default(),
        );
        assert_eq!(h.len(), freqs.len());
        assert!(h[0].re.is_finite() && h[0].im.is_finite());
        assert!(h[1].re.is_nan() && h[2].re.is_nan());

        let long = vec![Complex::new(1.0, 0.0); 5];
        let h = apply_tidal_corrections(&freqs, &bns(400.0), &at_40mpc(), &long, &TidalOptions::default());
        assert_eq!(h.len(), freqs.len());
    }

    #[test]
    fn summary_shares_kappa() {
        let s = summarize(&bns(400.0));
        assert_eq!(s.kappa, Kappa::from_params(&bns(400.0)).value());
        assert!(s.body1 == s.body2);
        assert!(s.merger_frequency_hz > 0.0);
    }
}
