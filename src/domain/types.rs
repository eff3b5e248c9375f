//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - threaded through the closed-form models as read-only inputs
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use nalgebra::Complex;
use serde::{Deserialize, Serialize};

/// Complex strain sampled index-for-index on a frequency grid.
pub type Strain = Vec<Complex<f64>>;

/// Luminosity distance (Mpc) used when a caller does not supply one.
pub const DEFAULT_DISTANCE_MPC: f64 = 1.0;

/// Intrinsic source parameters consumed by every tidal component.
///
/// Masses are in solar masses. By convention `mass1 >= mass2`, but nothing here
/// relies on it: every derived quantity is symmetric under body exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicParameters {
    pub mass1: f64,
    pub mass2: f64,
    /// Dimensionless aligned spin of body 1, in `[-1, 1]`.
    pub spin1: f64,
    /// Dimensionless aligned spin of body 2, in `[-1, 1]`.
    pub spin2: f64,
    /// Dimensionless tidal deformability of body 1 (`>= 0`).
    pub lambda1: f64,
    /// Dimensionless tidal deformability of body 2 (`>= 0`).
    pub lambda2: f64,
}

impl IntrinsicParameters {
    /// The same binary with the body labels exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            mass1: self.mass2,
            mass2: self.mass1,
            spin1: self.spin2,
            spin2: self.spin1,
            lambda1: self.lambda2,
            lambda2: self.lambda1,
        }
    }
}

/// Extrinsic source parameters.
///
/// Only `luminosity_distance` and `inclination` enter the tidal corrections.
/// Coalescence time and phase only shape the baseline phase and are handed to
/// the baseline generator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrinsicParameters {
    /// Luminosity distance (Mpc).
    pub luminosity_distance: f64,
    pub coalescence_time: f64,
    pub coalescence_phase: f64,
    /// Inclination angle (radians, `[0, π]`).
    pub inclination: f64,
}

impl Default for ExtrinsicParameters {
    fn default() -> Self {
        Self {
            luminosity_distance: DEFAULT_DISTANCE_MPC,
            coalescence_time: 0.0,
            coalescence_phase: 0.0,
            inclination: 0.0,
        }
    }
}

/// The nine-element parameter vector accepted at the crate boundary:
/// `[chirp_mass, eta, spin1, spin2, lambda1, lambda2, distance, tc, phic]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceParameters {
    /// Chirp mass (solar masses).
    pub chirp_mass: f64,
    /// Symmetric mass ratio, `(0, 0.25]`.
    pub eta: f64,
    pub spin1: f64,
    pub spin2: f64,
    pub lambda1: f64,
    pub lambda2: f64,
    /// Luminosity distance (Mpc).
    pub distance: f64,
    pub coalescence_time: f64,
    pub coalescence_phase: f64,
}

impl SourceParameters {
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.chirp_mass,
            self.eta,
            self.spin1,
            self.spin2,
            self.lambda1,
            self.lambda2,
            self.distance,
            self.coalescence_time,
            self.coalescence_phase,
        ]
    }

    /// Parameters forwarded to the baseline generator (everything but the tidal terms).
    pub fn baseline(&self) -> BbhParameters {
        BbhParameters {
            chirp_mass: self.chirp_mass,
            eta: self.eta,
            spin1: self.spin1,
            spin2: self.spin2,
            distance: self.distance,
            coalescence_time: self.coalescence_time,
            coalescence_phase: self.coalescence_phase,
        }
    }

    /// Split into extrinsic parameters for the given inclination.
    pub fn extrinsic(&self, inclination: f64) -> ExtrinsicParameters {
        ExtrinsicParameters {
            luminosity_distance: self.distance,
            coalescence_time: self.coalescence_time,
            coalescence_phase: self.coalescence_phase,
            inclination,
        }
    }
}

impl From<[f64; 9]> for SourceParameters {
    fn from(p: [f64; 9]) -> Self {
        Self {
            chirp_mass: p[0],
            eta: p[1],
            spin1: p[2],
            spin2: p[3],
            lambda1: p[4],
            lambda2: p[5],
            distance: p[6],
            coalescence_time: p[7],
            coalescence_phase: p[8],
        }
    }
}

/// Parameters handed to a baseline (point-particle) generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BbhParameters {
    pub chirp_mass: f64,
    pub eta: f64,
    pub spin1: f64,
    pub spin2: f64,
    /// Luminosity distance (Mpc).
    pub distance: f64,
    pub coalescence_time: f64,
    pub coalescence_phase: f64,
}

/// Baseline waveform families this crate knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approximant {
    /// Phenomenological inspiral-merger-ringdown model. No generator ships with
    /// this crate; callers register their own.
    ImrPhenomD,
    /// Leading-order stationary-phase inspiral, built in.
    TaylorF2,
}

impl Approximant {
    pub const ALL: [Approximant; 2] = [Approximant::ImrPhenomD, Approximant::TaylorF2];

    /// Parse a family name. Matching is exact (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Approximant::ImrPhenomD => "IMRPhenomD",
            Approximant::TaylorF2 => "TaylorF2",
        }
    }
}

impl std::fmt::Display for Approximant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a correction term contributes to the combined strain.
///
/// Bypassed corrections are still available as standalone functions; the
/// combiner just substitutes their neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionPolicy {
    #[default]
    Bypassed,
    Applied,
}

impl CorrectionPolicy {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            CorrectionPolicy::Applied
        } else {
            CorrectionPolicy::Bypassed
        }
    }

    pub fn is_applied(self) -> bool {
        self == CorrectionPolicy::Applied
    }
}

/// Which of the unvalidated corrections the combiner uses.
///
/// Both default to bypassed: the spin-squared phase contributes zero and the
/// Planck taper is replaced by a constant window of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TidalOptions {
    pub spin_squared: CorrectionPolicy,
    pub taper: CorrectionPolicy,
}

/// Spacing of a generated frequency grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridSpacing {
    Linear,
    Log,
}

/// Spin-induced multipole coefficients of one body, relative to a black hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipoleParams {
    pub quadrupole: f64,
    pub octupole: f64,
}

/// Derived quantities for one parameter set (used by `nrt inspect` and reports).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TidalSummary {
    pub intrinsic: IntrinsicParameters,
    pub total_mass_s: f64,
    pub eta: f64,
    pub x1: f64,
    pub x2: f64,
    pub kappa: f64,
    pub body1: MultipoleParams,
    pub body2: MultipoleParams,
    /// Dimensionless angular merger frequency `M ω`.
    pub momega_merger: f64,
    pub merger_frequency_hz: f64,
}

/// Which strain a channel holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Combined (unprojected) strain `h0`.
    Strain,
    Plus,
    Cross,
}

impl ChannelKind {
    pub fn label(self) -> &'static str {
        match self {
            ChannelKind::Strain => "h0",
            ChannelKind::Plus => "hp",
            ChannelKind::Cross => "hc",
        }
    }
}

/// One strain channel, split into real/imaginary parts for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrainChannel {
    pub kind: ChannelKind,
    pub re: Vec<f64>,
    pub im: Vec<f64>,
}

impl StrainChannel {
    pub fn from_strain(kind: ChannelKind, strain: &[Complex<f64>]) -> Self {
        Self {
            kind,
            re: strain.iter().map(|h| h.re).collect(),
            im: strain.iter().map(|h| h.im).collect(),
        }
    }

    pub fn to_strain(&self) -> Strain {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct WaveformConfig {
    pub source: SourceParameters,
    /// `Some` when polarizations are requested.
    pub inclination: Option<f64>,
    pub f_ref: f64,
    pub approximant: String,
    pub options: TidalOptions,

    pub f_min: f64,
    pub f_max: f64,
    pub n_freqs: usize,
    pub spacing: GridSpacing,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_waveform: Option<PathBuf>,
}

/// A saved waveform file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub approximant: String,
    pub f_ref: f64,
    pub source: SourceParameters,
    pub inclination: Option<f64>,
    pub options: TidalOptions,
    pub merger_frequency_hz: f64,
    pub frequency_hz: Vec<f64>,
    pub channels: Vec<StrainChannel>,
}
