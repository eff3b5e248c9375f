//! Shared "waveform pipeline" logic used by the `strain` and `polarizations` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> frequency grid -> baseline + tidal corrections -> projection -> summary
//!
//! The command handlers can then focus on presentation (printing, plots, exports).

use crate::domain::{ChannelKind, SourceParameters, Strain, TidalSummary, WaveformConfig};
use crate::error::AppError;
use crate::math::frequency_grid;
use crate::physics::intrinsic_parameters;
use crate::waveform::{BaselineRegistry, TidalWaveformGenerator, summarize};

/// All computed outputs of a single waveform run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub freqs: Vec<f64>,
    pub summary: TidalSummary,
    /// `h0` alone, or `hp` and `hc` when an inclination was requested.
    pub channels: Vec<(ChannelKind, Strain)>,
    /// False when the approximant was unknown/unregistered and the strain is zero.
    pub baseline_supported: bool,
}

/// Reject parameter sets the CLI should not hand to the model.
///
/// The library itself accepts anything and lets NaN propagate; this is only
/// the front-end's guard against typos.
pub fn validate_source(source: &SourceParameters) -> Result<(), AppError> {
    if !(source.chirp_mass.is_finite() && source.chirp_mass > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Chirp mass must be finite and > 0 (got {}).",
            source.chirp_mass
        )));
    }
    if !(source.eta > 0.0 && source.eta <= 0.25) {
        return Err(AppError::invalid_input(format!(
            "Symmetric mass ratio must be in (0, 0.25] (got {}).",
            source.eta
        )));
    }
    if !(source.distance.is_finite() && source.distance > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Distance must be finite and > 0 Mpc (got {}).",
            source.distance
        )));
    }
    for (name, spin) in [("spin1", source.spin1), ("spin2", source.spin2)] {
        if !(-1.0..=1.0).contains(&spin) {
            return Err(AppError::invalid_input(format!("{name} must be in [-1, 1] (got {spin}).")));
        }
    }
    for (name, lambda) in [("lambda1", source.lambda1), ("lambda2", source.lambda2)] {
        if !(lambda.is_finite() && lambda >= 0.0) {
            return Err(AppError::invalid_input(format!(
                "{name} must be finite and >= 0 (got {lambda})."
            )));
        }
    }
    Ok(())
}

/// Execute the waveform pipeline with the built-in baselines.
pub fn run_waveform(config: &WaveformConfig) -> Result<RunOutput, AppError> {
    let generator = TidalWaveformGenerator::new(BaselineRegistry::with_builtin(), config.options);
    run_waveform_with(&generator, config)
}

/// Execute the waveform pipeline with a caller-provided generator.
///
/// This is the hook for baselines registered outside this crate.
pub fn run_waveform_with(generator: &TidalWaveformGenerator, config: &WaveformConfig) -> Result<RunOutput, AppError> {
    // 1) Validate inputs and build the grid.
    validate_source(&config.source)?;
    let freqs = frequency_grid(config.f_min, config.f_max, config.n_freqs, config.spacing)?;

    // 2) Derived quantities (shared κ) for the report.
    let summary = summarize(&intrinsic_parameters(&config.source));
    let baseline_supported = generator.registry().supports(&config.approximant);

    // 3) Strain, optionally projected.
    let channels = match config.inclination {
        None => {
            let h0 = generator.strain(&freqs, &config.source, config.f_ref, &config.approximant);
            vec![(ChannelKind::Strain, h0)]
        }
        Some(inclination) => {
            let pol = generator.polarizations(&freqs, &config.source, inclination, config.f_ref, &config.approximant);
            vec![(ChannelKind::Plus, pol.hp), (ChannelKind::Cross, pol.hc)]
        }
    };

    tracing::debug!(
        n_freqs = freqs.len(),
        kappa = summary.kappa,
        merger_frequency_hz = summary.merger_frequency_hz,
        "waveform evaluated"
    );

    Ok(RunOutput {
        freqs,
        summary,
        channels,
        baseline_supported,
    })
}
