//! Planck-taper window.
//!
//! The window rises smoothly from 0 to 1 over `[t1, t2)`:
//!
//! - `t < t1`: `0`
//! - `t1 <= t < t2`: `1 / (exp(z) + 1)` with `z = (t2-t1)/(t-t1) + (t2-t1)/(t-t2)`
//! - `t >= t2`: `1`
//!
//! Numerical notes:
//! - At `t = t1` the first term of `z` is `+inf`, so the window is exactly 0.
//! - Close to `t2`, `z → -inf` and `exp(z)` underflows to 0, giving 1.
//! - NaN in any argument yields NaN.

/// Upper edge of the transition, as a multiple of the merger frequency.
pub const TAPER_WIDTH_FACTOR: f64 = 1.2;

/// Evaluate the Planck taper at `t` with edges `t1 < t2`.
pub fn planck_taper(t: f64, t1: f64, t2: f64) -> f64 {
    if t.is_nan() || t1.is_nan() || t2.is_nan() {
        f64::NAN
    } else if t < t1 {
        0.0
    } else if t < t2 {
        let width = t2 - t1;
        let z = width / (t - t1) + width / (t - t2);
        1.0 / (z.exp() + 1.0)
    } else {
        1.0
    }
}

/// Taper over a frequency grid, switching on between `f_merger` and `1.2 f_merger`.
pub fn merger_taper(freqs: &[f64], f_merger: f64) -> Vec<f64> {
    let t2 = TAPER_WIDTH_FACTOR * f_merger;
    freqs.iter().map(|&f| planck_taper(f, f_merger, t2)).collect()
}
