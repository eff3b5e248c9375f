//! Read/write waveform JSON files.
//!
//! Waveform JSON is the portable representation of a run:
//! - boundary parameters, baseline name and correction policies
//! - the derived merger frequency
//! - the frequency grid and every strain channel as `re`/`im` arrays
//!
//! The schema is defined by `domain::WaveformFile`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::{StrainChannel, WaveformConfig, WaveformFile};
use crate::error::AppError;

/// Snapshot a run as a serializable waveform file.
pub fn build_waveform_file(config: &WaveformConfig, run: &RunOutput) -> WaveformFile {
    WaveformFile {
        tool: "nrt".to_string(),
        generated_at: chrono::Utc::now(),
        approximant: config.approximant.clone(),
        f_ref: config.f_ref,
        source: config.source,
        inclination: config.inclination,
        options: config.options,
        merger_frequency_hz: run.summary.merger_frequency_hz,
        frequency_hz: run.freqs.clone(),
        channels: run
            .channels
            .iter()
            .map(|(kind, strain)| StrainChannel::from_strain(*kind, strain))
            .collect(),
    }
}

/// Write a waveform JSON file.
pub fn write_waveform_json(path: &Path, waveform: &WaveformFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::invalid_input(format!("Failed to create waveform JSON '{}': {e}", path.display())))?;

    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, waveform)
        .map_err(|e| AppError::invalid_input(format!("Failed to write waveform JSON: {e}")))?;
    out.flush()
        .map_err(|e| AppError::invalid_input(format!("Failed to flush waveform JSON: {e}")))?;

    tracing::info!(path = %path.display(), channels = waveform.channels.len(), "waveform JSON written");
    Ok(())
}

/// Read a waveform JSON file.
pub fn read_waveform_json(path: &Path) -> Result<WaveformFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::invalid_input(format!("Failed to open waveform JSON '{}': {e}", path.display())))?;
    let waveform: WaveformFile =
        serde_json::from_reader(file).map_err(|e| AppError::invalid_input(format!("Invalid waveform JSON: {e}")))?;

    let n = waveform.frequency_hz.len();
    if let Some(bad) = waveform
        .channels
        .iter()
        .find(|c| c.re.len() != n || c.im.len() != n)
    {
        return Err(AppError::invalid_input(format!(
            "Waveform JSON channel '{}' does not match the {n}-point frequency grid.",
            bad.kind.label()
        )));
    }

    Ok(waveform)
}
