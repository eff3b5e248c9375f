//! Frequency grid generation.
//!
//! The waveform is evaluated on an explicit, strictly increasing grid of
//! positive frequencies. Log spacing puts more samples in the inspiral where
//! the phase evolves fastest per Hz.

use crate::domain::GridSpacing;
use crate::error::AppError;

fn check_range(min: f64, max: f64, steps: usize) -> Result<(), AppError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > min) {
        return Err(AppError::invalid_input(format!(
            "Invalid frequency range: min={min}, max={max} (must be finite, >0, and max>min)."
        )));
    }
    if steps < 2 {
        return Err(AppError::invalid_input("Frequency grid needs at least 2 samples."));
    }
    Ok(())
}

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    check_range(min, max, steps)?;

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push((ln_min + step * i as f64).exp());
    }
    Ok(out)
}

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn lin_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    check_range(min, max, steps)?;

    let step = (max - min) / (steps as f64 - 1.0);
    Ok((0..steps).map(|i| min + step * i as f64).collect())
}

pub fn frequency_grid(min: f64, max: f64, steps: usize, spacing: GridSpacing) -> Result<Vec<f64>, AppError> {
    match spacing {
        GridSpacing::Linear => lin_space(min, max, steps),
        GridSpacing::Log => log_space(min, max, steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_space_includes_endpoints() {
        let v = log_space(20.0, 2048.0, 5).unwrap();
        assert!((v[0] - 20.0).abs() < 1e-9);
        assert!((v[v.len() - 1] - 2048.0).abs() < 1e-9);
    }

    #[test]
    fn lin_space_is_strictly_increasing() {
        let v = lin_space(10.0, 20.0, 11).unwrap();
        assert_eq!(v.len(), 11);
        assert!((v[5] - 15.0).abs() < 1e-12);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn rejects_bad_ranges() {
        use crate::error::EXIT_INVALID_INPUT;

        assert_eq!(log_space(0.0, 10.0, 5).unwrap_err().exit_code(), EXIT_INVALID_INPUT);
        assert!(lin_space(10.0, 10.0, 5).is_err());
        let err = frequency_grid(10.0, 20.0, 1, GridSpacing::Log).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
        assert!(lin_space(f64::NAN, 20.0, 5).is_err());
    }
}
