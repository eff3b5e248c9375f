//! Boundary entry points: baseline lookup, tidal correction, polarizations.

use nalgebra::Complex;
use rayon::prelude::*;

use crate::domain::{SourceParameters, Strain, TidalOptions};
use crate::physics::intrinsic_parameters;
use crate::waveform::baseline::BaselineRegistry;
use crate::waveform::combine::apply_tidal_corrections;

/// Plus and cross polarizations on the same grid as the input strain.
#[derive(Debug, Clone, PartialEq)]
pub struct Polarizations {
    pub hp: Strain,
    pub hc: Strain,
}

/// Project a strain onto the detector polarizations for inclination `ι`:
/// `hp = h0 (1 + cos²ι) / 2`, `hc = -i h0 cos ι`.
pub fn project_polarizations(h0: &[Complex<f64>], inclination: f64) -> Polarizations {
    let cos_i = inclination.cos();
    let plus = 0.5 * (1.0 + cos_i * cos_i);
    let minus_i = -Complex::<f64>::i();

    Polarizations {
        hp: h0.par_iter().map(|&h| h * plus).collect(),
        hc: h0.par_iter().map(|&h| minus_i * h * cos_i).collect(),
    }
}

/// Tidal waveform generator: a baseline registry plus correction policies.
#[derive(Debug, Default)]
pub struct TidalWaveformGenerator {
    registry: BaselineRegistry,
    options: TidalOptions,
}

impl TidalWaveformGenerator {
    pub fn new(registry: BaselineRegistry, options: TidalOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &BaselineRegistry {
        &self.registry
    }

    pub fn options(&self) -> TidalOptions {
        self.options
    }

    /// Tidally corrected strain `h0` on `freqs`.
    ///
    /// An unknown or unregistered `approximant` yields a zero strain of the
    /// same length as `freqs` rather than an error.
    pub fn strain(&self, freqs: &[f64], params: &SourceParameters, f_ref: f64, approximant: &str) -> Strain {
        let Some(baseline) = self.registry.resolve(approximant) else {
            return vec![Complex::new(0.0, 0.0); freqs.len()];
        };

        let intrinsic = intrinsic_parameters(params);
        // Inclination only enters the polarization projection.
        let extrinsic = params.extrinsic(0.0);

        let h0_bbh = baseline.strain(freqs, &params.baseline(), f_ref);
        apply_tidal_corrections(freqs, &intrinsic, &extrinsic, &h0_bbh, &self.options)
    }

    /// Plus/cross polarizations for the given inclination.
    pub fn polarizations(
        &self,
        freqs: &[f64],
        params: &SourceParameters,
        inclination: f64,
        f_ref: f64,
        approximant: &str,
    ) -> Polarizations {
        let h0 = self.strain(freqs, params, f_ref, approximant);
        project_polarizations(&h0, inclination)
    }
}

/// Tidal strain with the built-in baselines and default (bypassed) corrections.
pub fn generate_tidal_waveform(freqs: &[f64], params: &SourceParameters, f_ref: f64, approximant: &str) -> Strain {
    TidalWaveformGenerator::default().strain(freqs, params, f_ref, approximant)
}

/// Polarizations with the built-in baselines and default (bypassed) corrections.
pub fn generate_tidal_polarizations(
    freqs: &[f64],
    params: &SourceParameters,
    inclination: f64,
    f_ref: f64,
    approximant: &str,
) -> Polarizations {
    TidalWaveformGenerator::default().polarizations(freqs, params, inclination, f_ref, approximant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Approximant, BbhParameters};
    use crate::physics::ms_to_mc_eta;

    fn source(lambda: f64) -> SourceParameters {
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
    fn unknown_approximant_gives_zero_strain() {
        let freqs = [20.0, 40.0, 80.0, 160.0, 320.0];
        let h = generate_tidal_waveform(&freqs, &source(400.0), 20.0, "SEOBNRv4_ROM");
        assert_eq!(h.len(), freqs.len());
        assert!(h.iter().all(|v| *v == Complex::new(0.0, 0.0)));
    }

    #[test]
    fn recognized_but_unregistered_gives_zero_strain() {
        let h = generate_tidal_waveform(&[50.0, 100.0], &source(400.0), 20.0, "IMRPhenomD");
        assert_eq!(h, vec![Complex::new(0.0, 0.0); 2]);
    }

    #[test]
    fn registered_generator_is_used() {
        let stub = |freqs: &[f64], _: &BbhParameters, _: f64| vec![Complex::new(1.0, 0.0); freqs.len()];
        let generator = TidalWaveformGenerator::new(
            BaselineRegistry::empty().with(Approximant::ImrPhenomD, stub),
            TidalOptions::default(),
        );
        let h = generator.strain(&[100.0], &source(0.0), 20.0, "IMRPhenomD");
        assert_eq!(h, vec![Complex::new(1.0, 0.0)]);
    }

    #[test]
    fn face_on_projection() {
        let h0 = vec![Complex::new(0.3, -0.7), Complex::new(-1.0, 2.0)];
        let pol = project_polarizations(&h0, 0.0);
        assert_eq!(pol.hp, h0);
        for (hc, h) in pol.hc.iter().zip(h0.iter()) {
            assert_eq!(*hc, Complex::new(h.im, -h.re));
            assert!((hc.norm() - h.norm()).abs() < 1e-15);
        }
    }

    #[test]
    fn edge_on_projection_halves_plus_and_kills_cross() {
        let h0 = vec![Complex::new(2.0, 1.0)];
        let pol = project_polarizations(&h0, std::f64::consts::FRAC_PI_2);
        assert!((pol.hp[0] - Complex::new(1.0, 0.5)).norm() < 1e-15);
        assert!(pol.hc[0].norm() < 1e-15);
    }

    #[test]
    fn builtin_taylorf2_produces_finite_strain() {
        let freqs = [20.0, 100.0, 400.0];
        let pol = generate_tidal_polarizations(&freqs, &source(400.0), 0.4, 20.0, "TaylorF2");
        assert_eq!(pol.hp.len(), 3);
        assert!(pol.hp.iter().chain(pol.hc.iter()).all(|h| h.re.is_finite() && h.im.is_finite()));
        assert!(pol.hp[0].norm() > pol.hp[2].norm());
    }
}
