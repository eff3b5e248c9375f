//! Reporting utilities: per-channel statistics and formatted terminal output.

pub mod format;

pub use format::*;

use nalgebra::Complex;

use crate::domain::ChannelKind;

/// Summary statistics of one strain channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStats {
    pub kind: ChannelKind,
    /// Largest finite `|h|`, with its frequency.
    pub peak_abs: Option<(f64, f64)>,
    /// `|h|` at the first grid sample.
    pub first_abs: f64,
    /// `|h|` at the last grid sample.
    pub last_abs: f64,
    /// Samples whose real or imaginary part is NaN/Inf.
    pub n_nonfinite: usize,
}

/// Compute summary statistics for a channel sampled on `freqs`.
pub fn channel_stats(kind: ChannelKind, freqs: &[f64], strain: &[Complex<f64>]) -> ChannelStats {
    let mut peak: Option<(f64, f64)> = None;
    let mut n_nonfinite = 0;

    for (&f, h) in freqs.iter().zip(strain.iter()) {
        if !(h.re.is_finite() && h.im.is_finite()) {
            n_nonfinite += 1;
            continue;
        }
        let a = h.norm();
        if peak.is_none_or(|(_, best)| a > best) {
            peak = Some((f, a));
        }
    }

    ChannelStats {
        kind,
        peak_abs: peak,
        first_abs: strain.first().map_or(f64::NAN, |h| h.norm()),
        last_abs: strain.last().map_or(f64::NAN, |h| h.norm()),
        n_nonfinite,
    }
}
