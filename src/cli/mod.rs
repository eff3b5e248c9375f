//! Command-line parsing for the tidal waveform generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::GridSpacing;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "nrt", version, about = "NRTidalv2 frequency-domain tidal waveform generator")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the tidally corrected strain h0 on a frequency grid.
    Strain(WaveformArgs),
    /// Generate plus/cross polarizations for a given inclination.
    Polarizations(PolarizationArgs),
    /// Print derived tidal quantities (kappa, multipole coefficients, merger frequency).
    Inspect(SourceArgs),
    /// Plot a previously exported waveform JSON.
    Plot(PlotArgs),
}

/// Source parameters in the boundary layout
/// `[chirp_mass, eta, spin1, spin2, lambda1, lambda2, distance, tc, phic]`.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Chirp mass (solar masses).
    #[arg(long, default_value_t = 1.1968)]
    pub chirp_mass: f64,

    /// Symmetric mass ratio, in (0, 0.25].
    #[arg(long, default_value_t = 0.2499)]
    pub eta: f64,

    /// Aligned spin of the primary, in [-1, 1].
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spin1: f64,

    /// Aligned spin of the secondary, in [-1, 1].
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spin2: f64,

    /// Tidal deformability of the primary.
    #[arg(long, default_value_t = 400.0)]
    pub lambda1: f64,

    /// Tidal deformability of the secondary.
    #[arg(long, default_value_t = 400.0)]
    pub lambda2: f64,

    /// Luminosity distance (Mpc).
    #[arg(long, default_value_t = 40.0)]
    pub distance: f64,

    /// Coalescence time (s).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub tc: f64,

    /// Coalescence phase (rad).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub phic: f64,
}

/// Options shared by `strain` and `polarizations`.
#[derive(Debug, Args, Clone)]
pub struct WaveformArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Baseline waveform family. Unknown names produce a zero strain.
    #[arg(long, default_value = "TaylorF2")]
    pub approximant: String,

    /// Reference frequency (Hz) passed to the baseline.
    #[arg(long, default_value_t = 20.0)]
    pub f_ref: f64,

    /// Lowest grid frequency (Hz).
    #[arg(long, default_value_t = 20.0)]
    pub f_min: f64,

    /// Highest grid frequency (Hz).
    #[arg(long, default_value_t = 2048.0)]
    pub f_max: f64,

    /// Number of grid samples.
    #[arg(short = 'n', long, default_value_t = 256)]
    pub n_freqs: usize,

    /// Grid spacing.
    #[arg(long, value_enum, default_value_t = GridSpacing::Log)]
    pub spacing: GridSpacing,

    /// Add the (unvalidated) spin-squared phase correction.
    #[arg(long)]
    pub spin_squared: bool,

    /// Apply the (unvalidated) Planck taper above the merger frequency.
    #[arg(long)]
    pub taper: bool,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the strain samples to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the waveform (parameters + samples) to JSON.
    #[arg(long = "export-waveform")]
    pub export_waveform: Option<PathBuf>,
}

/// Options for `polarizations`.
#[derive(Debug, Args, Clone)]
pub struct PolarizationArgs {
    #[command(flatten)]
    pub waveform: WaveformArgs,

    /// Inclination angle (rad).
    #[arg(long, default_value_t = 0.0)]
    pub inclination: f64,
}

/// Options for plotting a saved waveform.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Waveform JSON file produced by `nrt strain --export-waveform`.
    #[arg(long, value_name = "JSON")]
    pub waveform: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
