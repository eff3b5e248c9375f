//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs the logger
//! - runs the waveform pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, PlotArgs, SourceArgs, WaveformArgs};
use crate::domain::{CorrectionPolicy, SourceParameters, TidalOptions, WaveformConfig};
use crate::error::{AppError, EXIT_RUN_FAILED};
use crate::physics::intrinsic_parameters;

pub mod pipeline;

/// Entry point for the `nrt` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Strain(args) => handle_waveform(waveform_config_from_args(&args, None)),
        Command::Polarizations(args) => {
            handle_waveform(waveform_config_from_args(&args.waveform, Some(args.inclination)))
        }
        Command::Inspect(args) => handle_inspect(&args),
        Command::Plot(args) => handle_plot(&args),
    }
}

fn handle_waveform(config: WaveformConfig) -> Result<(), AppError> {
    tracing::info!(
        approximant = %config.approximant,
        n_freqs = config.n_freqs,
        inclination = ?config.inclination,
        "generating tidal waveform"
    );
    let run = pipeline::run_waveform(&config)?;

    println!("{}", crate::report::format_run_summary(&run, &config));

    if config.plot {
        let plot = crate::plot::render_strain_plot(
            &run.freqs,
            &run.channels,
            Some(run.summary.merger_frequency_hz),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_strain_csv(path, &run.freqs, &run.channels)?;
    }
    if let Some(path) = &config.export_waveform {
        let waveform = crate::io::build_waveform_file(&config, &run);
        crate::io::write_waveform_json(path, &waveform)?;
    }

    // A supported baseline that still produced no finite sample is a failed run.
    let all_nonfinite = run
        .channels
        .iter()
        .all(|(_, h)| !h.is_empty() && h.iter().all(|s| !(s.re.is_finite() && s.im.is_finite())));
    if run.baseline_supported && all_nonfinite {
        return Err(AppError::new(
            EXIT_RUN_FAILED,
            "Waveform evaluation produced no finite samples; check the source parameters.",
        ));
    }

    tracing::info!(
        merger_frequency_hz = run.summary.merger_frequency_hz,
        baseline_supported = run.baseline_supported,
        "waveform run finished"
    );
    Ok(())
}

fn handle_inspect(args: &SourceArgs) -> Result<(), AppError> {
    let source = source_from_args(args);
    pipeline::validate_source(&source)?;

    let summary = crate::waveform::summarize(&intrinsic_parameters(&source));
    print!("{}", crate::report::format_inspect(&summary));
    Ok(())
}

fn handle_plot(args: &PlotArgs) -> Result<(), AppError> {
    let waveform = crate::io::read_waveform_json(&args.waveform)?;
    tracing::debug!(
        path = %args.waveform.display(),
        generated_at = %waveform.generated_at,
        "loaded waveform JSON"
    );

    let plot = crate::plot::render_waveform_file_plot(&waveform, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn source_from_args(args: &SourceArgs) -> SourceParameters {
    SourceParameters {
        chirp_mass: args.chirp_mass,
        eta: args.eta,
        spin1: args.spin1,
        spin2: args.spin2,
        lambda1: args.lambda1,
        lambda2: args.lambda2,
        distance: args.distance,
        coalescence_time: args.tc,
        coalescence_phase: args.phic,
    }
}

pub fn waveform_config_from_args(args: &WaveformArgs, inclination: Option<f64>) -> WaveformConfig {
    WaveformConfig {
        source: source_from_args(&args.source),
        inclination,
        f_ref: args.f_ref,
        approximant: args.approximant.clone(),
        options: TidalOptions {
            spin_squared: CorrectionPolicy::from_flag(args.spin_squared),
            taper: CorrectionPolicy::from_flag(args.taper),
        },
        f_min: args.f_min,
        f_max: args.f_max,
        n_freqs: args.n_freqs,
        spacing: args.spacing,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_waveform: args.export_waveform.clone(),
    }
}
