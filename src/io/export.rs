//! Export strain samples to CSV.
//!
//! One row per frequency; each channel contributes `re`, `im` and `abs` columns
//! so the file is easy to consume in spreadsheets or plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{ChannelKind, Strain};
use crate::error::AppError;

/// Write `freqs` and every channel to a CSV file.
pub fn write_strain_csv(path: &Path, freqs: &[f64], channels: &[(ChannelKind, Strain)]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::invalid_input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    let mut header = String::from("f_hz");
    for (kind, _) in channels {
        let label = kind.label();
        header.push_str(&format!(",{label}_re,{label}_im,{label}_abs"));
    }
    writeln!(out, "{header}").map_err(|e| AppError::invalid_input(format!("Failed to write export CSV header: {e}")))?;

    for (i, f) in freqs.iter().enumerate() {
        let mut row = format!("{f:.10}");
        for (_, strain) in channels {
            match strain.get(i) {
                Some(h) => row.push_str(&format!(",{:.10e},{:.10e},{:.10e}", h.re, h.im, h.norm())),
                None => row.push_str(",,,"),
            }
        }
        writeln!(out, "{row}").map_err(|e| AppError::invalid_input(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::invalid_input(format!("Failed to flush export CSV: {e}")))?;

    tracing::info!(path = %path.display(), rows = freqs.len(), "strain CSV written");
    Ok(())
}
