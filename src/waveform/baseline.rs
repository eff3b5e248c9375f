//! Baseline (point-particle) waveform generators.
//!
//! The tidal model only post-processes a baseline strain; it never builds one.
//! Generators plug in through [`BbhBaseline`] and are looked up by family name
//! in a [`BaselineRegistry`]. Closures with the right signature implement the
//! trait, which keeps stubs in tests short.

use std::collections::HashMap;

use nalgebra::Complex;
use rayon::prelude::*;

use crate::domain::{Approximant, BbhParameters, Strain};
use crate::models::distance_seconds;
use crate::physics::constants::{GT, PI};

/// A baseline strain generator.
///
/// Must return exactly one sample per input frequency. NaN/Inf in the output
/// are passed through by the tidal combiner unchanged.
pub trait BbhBaseline: Send + Sync {
    fn strain(&self, freqs: &[f64], params: &BbhParameters, f_ref: f64) -> Strain;
}

impl<F> BbhBaseline for F
where
    F: Fn(&[f64], &BbhParameters, f64) -> Strain + Send + Sync,
{
    fn strain(&self, freqs: &[f64], params: &BbhParameters, f_ref: f64) -> Strain {
        self(freqs, params, f_ref)
    }
}

/// Leading-order stationary-phase inspiral (the Newtonian term of TaylorF2).
///
/// `h(f) = A f^(-7/6) exp(-i Ψ(f))` with
/// `A = sqrt(5/24) π^(-2/3) Mc^(5/6) / d_L` and
/// `Ψ(f) = 2π f tc - φc - π/4 + 3/128 (π Mc f)^(-5/3)`. When `f_ref > 0` the
/// chirp term is measured relative to its value at `f_ref`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianBaseline;

fn chirp_phase(f: f64, mc_s: f64) -> f64 {
    (3.0 / 128.0) * (PI * mc_s * f).powf(-5.0 / 3.0)
}

impl BbhBaseline for NewtonianBaseline {
    fn strain(&self, freqs: &[f64], params: &BbhParameters, f_ref: f64) -> Strain {
        let mc_s = params.chirp_mass * GT;
        let amp0 = (5.0_f64 / 24.0).sqrt() * PI.powf(-2.0 / 3.0) * mc_s.powf(5.0 / 6.0)
            / distance_seconds(params.distance);
        let psi_ref = if f_ref > 0.0 { chirp_phase(f_ref, mc_s) } else { 0.0 };

        freqs
            .par_iter()
            .map(|&f| {
                let psi = 2.0 * PI * f * params.coalescence_time - params.coalescence_phase - PI / 4.0
                    + chirp_phase(f, mc_s)
                    - psi_ref;
                Complex::from_polar(amp0 * f.powf(-7.0 / 6.0), -psi)
            })
            .collect()
    }
}

/// Baseline generators keyed by family.
pub struct BaselineRegistry {
    generators: HashMap<Approximant, Box<dyn BbhBaseline>>,
}

impl BaselineRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// A registry with the generators shipped in this crate (`TaylorF2`).
    pub fn with_builtin() -> Self {
        Self::empty().with(Approximant::TaylorF2, NewtonianBaseline)
    }

    /// Register (or replace) the generator for a family.
    pub fn register(&mut self, approximant: Approximant, generator: impl BbhBaseline + 'static) -> &mut Self {
        self.generators.insert(approximant, Box::new(generator));
        self
    }

    pub fn with(mut self, approximant: Approximant, generator: impl BbhBaseline + 'static) -> Self {
        self.register(approximant, generator);
        self
    }

    /// Whether `name` is a known family with a registered generator.
    pub fn supports(&self, name: &str) -> bool {
        Approximant::from_name(name).is_some_and(|a| self.generators.contains_key(&a))
    }

    /// Look up the generator for `name`.
    ///
    /// Returns `None` (and logs a warning) when the name is not a known family
    /// or no generator is registered for it.
    pub fn resolve(&self, name: &str) -> Option<&dyn BbhBaseline> {
        let Some(approximant) = Approximant::from_name(name) else {
            tracing::warn!(approximant = name, "baseline approximant not recognized; returning zero strain");
            return None;
        };
        let generator = self.generators.get(&approximant);
        if generator.is_none() {
            tracing::warn!(
                approximant = name,
                "no baseline generator registered for approximant; returning zero strain"
            );
        }
        generator.map(|g| g.as_ref())
    }

    pub fn registered(&self) -> Vec<Approximant> {
        let mut out: Vec<Approximant> = self.generators.keys().copied().collect();
        out.sort_by_key(|a| a.name());
        out
    }
}

impl Default for BaselineRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl std::fmt::Debug for BaselineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaselineRegistry")
            .field("registered", &self.registered())
            .finish()
    }
}
