//! End-to-end checks through the public library API.

use nalgebra::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nrtidal::domain::{
    Approximant, BbhParameters, CorrectionPolicy, ExtrinsicParameters, IntrinsicParameters, SourceParameters,
    Strain, TidalOptions,
};
use nrtidal::models::momega_merger;
use nrtidal::physics::{BinaryMasses, Kappa, ms_to_mc_eta};
use nrtidal::waveform::{
    BaselineRegistry, TidalWaveformGenerator, apply_tidal_corrections, generate_tidal_waveform,
};

fn unit_baseline(freqs: &[f64], _params: &BbhParameters, _f_ref: f64) -> Strain {
    vec![Complex::new(1.0, 0.0); freqs.len()]
}

fn bns_source(lambda: f64) -> SourceParameters {
    let (chirp_mass, eta) = ms_to_mc_eta(1.4, 1.35);
    SourceParameters {
        chirp_mass,
        eta,
        spin1: 0.0,
        spin2: 0.0,
        lambda1: lambda,
        lambda2: lambda,
        distance: 40.0,
        coalescence_time: 0.0,
        coalescence_phase: 0.0,
    }
}

#[test]
fn unit_baseline_at_100_hz_is_rotated_not_scaled() {
    let registry = BaselineRegistry::empty().with(Approximant::ImrPhenomD, unit_baseline);
    let generator = TidalWaveformGenerator::new(registry, TidalOptions::default());

    let h = generator.strain(&[100.0], &bns_source(400.0), 20.0, "IMRPhenomD");

    assert_eq!(h.len(), 1);
    let h = h[0];
    assert!(h.re.is_finite() && h.im.is_finite());
    // The amplitude correction is negligible at 40 Mpc; the phase is what moves.
    assert!((h.norm() - 1.0).abs() < 1e-12, "|h|={}", h.norm());
    assert!(h.im.abs() > 1e-6, "h={h}");
}

#[test]
fn vanishing_deformability_returns_the_baseline() {
    let freqs: Vec<f64> = (1..=32).map(|i| 20.0 * i as f64).collect();
    let registry = BaselineRegistry::empty().with(Approximant::ImrPhenomD, unit_baseline);
    let generator = TidalWaveformGenerator::new(registry, TidalOptions::default());

    let h = generator.strain(&freqs, &bns_source(0.0), 20.0, "IMRPhenomD");
    for s in &h {
        assert!((s - Complex::new(1.0, 0.0)).norm() < 1e-15, "{s}");
    }
}

#[test]
fn strain_is_symmetric_under_body_exchange() {
    let mut rng = StdRng::seed_from_u64(42);
    let freqs: Vec<f64> = (0..64).map(|i| 20.0 + 25.0 * i as f64).collect();
    let extrinsic = ExtrinsicParameters {
        luminosity_distance: 100.0,
        ..ExtrinsicParameters::default()
    };
    let options = TidalOptions::default();

    for _ in 0..20 {
        let p = IntrinsicParameters {
            mass1: rng.gen_range(1.0..2.0),
            mass2: rng.gen_range(1.0..2.0),
            spin1: rng.gen_range(-0.05..0.05),
            spin2: rng.gen_range(-0.05..0.05),
            lambda1: rng.gen_range(0.0..3000.0),
            lambda2: rng.gen_range(0.0..3000.0),
        };
        let baseline: Vec<Complex<f64>> = freqs
            .iter()
            .map(|&f| Complex::from_polar(1e-22 * f.powf(-7.0 / 6.0), rng.gen_range(-3.0..3.0)))
            .collect();

        let a = apply_tidal_corrections(&freqs, &p, &extrinsic, &baseline, &options);
        let b = apply_tidal_corrections(&freqs, &p.swapped(), &extrinsic, &baseline, &options);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() <= 1e-9 * y.norm().max(1e-40), "{p:?}: {x} vs {y}");
        }
    }
}

#[test]
fn applied_taper_silences_post_merger_band() {
    let registry = BaselineRegistry::empty().with(Approximant::ImrPhenomD, unit_baseline);
    let options = TidalOptions {
        taper: CorrectionPolicy::Applied,
        ..TidalOptions::default()
    };
    let generator = TidalWaveformGenerator::new(registry, options);

    let h = generator.strain(&[100.0, 8000.0], &bns_source(400.0), 20.0, "IMRPhenomD");
    assert!((h[0].norm() - 1.0).abs() < 1e-12);
    assert_eq!(h[1].norm(), 0.0);
}

#[test]
fn unknown_approximant_yields_zero_strain() {
    let freqs = [30.0, 60.0, 120.0, 240.0];
    let h = generate_tidal_waveform(&freqs, &bns_source(400.0), 20.0, "NotAnApproximant");
    assert_eq!(h.len(), freqs.len());
    assert!(h.iter().all(|s| s.re == 0.0 && s.im == 0.0));

    // Recognized but not registered by default.
    let h = generate_tidal_waveform(&freqs, &bns_source(400.0), 20.0, "IMRPhenomD");
    assert!(h.iter().all(|s| s.norm() == 0.0));
}

#[test]
fn builtin_baseline_produces_finite_strain() {
    let freqs: Vec<f64> = (1..=50).map(|i| 20.0 * i as f64).collect();
    let h = generate_tidal_waveform(&freqs, &bns_source(400.0), 20.0, "TaylorF2");
    assert!(h.iter().all(|s| s.re.is_finite() && s.im.is_finite() && s.norm() > 0.0));
    // Amplitude falls off with frequency.
    assert!(h[0].norm() > h[49].norm());
}

#[test]
fn merger_frequency_decreases_with_kappa_for_random_mass_ratios() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let m1: f64 = rng.gen_range(1.0..2.2);
        let m2: f64 = rng.gen_range(1.0..m1);
        let masses = BinaryMasses::from_solar(m1, m2);

        let mut prev = f64::INFINITY;
        for k in (0..=40).map(|i| 12.5 * i as f64) {
            let m_omega = momega_merger(&masses, Kappa::new(k));
            assert!(m_omega < prev, "m1={m1} m2={m2} kappa={k}");
            prev = m_omega;
        }
    }
}
