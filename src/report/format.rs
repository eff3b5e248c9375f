//! Formatted terminal output for waveform runs.
//!
//! We keep formatting code in one place so:
//! - the models and waveform assembly stay free of presentation concerns
//! - output changes are localized (important for snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{CorrectionPolicy, MultipoleParams, TidalSummary, WaveformConfig};
use crate::report::channel_stats;

fn policy_label(policy: CorrectionPolicy) -> &'static str {
    match policy {
        CorrectionPolicy::Bypassed => "bypassed",
        CorrectionPolicy::Applied => "applied",
    }
}

fn fmt_multipole(p: &MultipoleParams) -> String {
    format!("quad={:.6} oct={:.6}", p.quadrupole, p.octupole)
}

/// Derived tidal quantities of a parameter set.
pub fn format_inspect(summary: &TidalSummary) -> String {
    let p = &summary.intrinsic;
    let mut out = String::new();

    out.push_str("=== nrt - NRTidalv2 derived quantities ===\n");
    out.push_str(&format!(
        "Masses: m1={:.6} m2={:.6} Msun | M={:.6e} s | eta={:.6}\n",
        p.mass1, p.mass2, summary.total_mass_s, summary.eta
    ));
    out.push_str(&format!("Fractions: X1={:.6} X2={:.6}\n", summary.x1, summary.x2));
    out.push_str(&format!(
        "Spins: chi1={:.4} chi2={:.4} | Lambda1={:.2} Lambda2={:.2}\n",
        p.spin1, p.spin2, p.lambda1, p.lambda2
    ));
    out.push_str(&format!("kappa: {:.6}\n", summary.kappa));
    out.push_str(&format!("Body 1: {}\n", fmt_multipole(&summary.body1)));
    out.push_str(&format!("Body 2: {}\n", fmt_multipole(&summary.body2)));
    out.push_str(&format!(
        "Merger: M*omega={:.6} | f_merger={:.2} Hz\n",
        summary.momega_merger, summary.merger_frequency_hz
    ));

    out
}

/// Full run summary: parameters, derived quantities, policies, channel stats.
pub fn format_run_summary(run: &RunOutput, config: &WaveformConfig) -> String {
    let mut out = format_inspect(&run.summary);

    out.push_str(&format!(
        "Baseline: {} | f_ref={:.2} Hz | distance={:.2} Mpc\n",
        config.approximant, config.f_ref, config.source.distance
    ));
    out.push_str(&format!(
        "Corrections: spin-squared={} | taper={}\n",
        policy_label(config.options.spin_squared),
        policy_label(config.options.taper)
    ));
    if let Some(inclination) = config.inclination {
        out.push_str(&format!("Inclination: {inclination:.4} rad\n"));
    }
    out.push_str(&format!(
        "Grid: n={} | f=[{:.2}, {:.2}] Hz | {:?}\n",
        run.freqs.len(),
        config.f_min,
        config.f_max,
        config.spacing
    ));

    if !run.baseline_supported {
        out.push_str(&format!(
            "\nWARNING: approximant '{}' is not available; strain is identically zero.\n",
            config.approximant
        ));
    }

    out.push_str("\nChannels:\n");
    for (kind, strain) in &run.channels {
        let s = channel_stats(*kind, &run.freqs, strain);
        let peak = s
            .peak_abs
            .map(|(f, a)| format!("{a:.4e} @ {f:.2} Hz"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {:<3} |h|: first={:.4e} last={:.4e} peak={} non-finite={}\n",
            kind.label(),
            s.first_abs,
            s.last_abs,
            peak,
            s.n_nonfinite
        ));
    }

    out
}
