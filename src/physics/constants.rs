//! Physical constants in SI units.
//!
//! `GT` is the solar mass expressed as a time, `GMSUN / C^3`. It is built from
//! the measured heliocentric gravitational constant rather than from `G * MSUN`,
//! whose product is only known to the precision of `G` (about 2e-5). Multiplying
//! a mass in solar masses by `GT` gives the geometrized mass in seconds.

pub use std::f64::consts::PI;

/// Newton's gravitational constant (m^3 kg^-1 s^-2).
pub const G: f64 = 6.674_30e-11;

/// Speed of light in vacuum (m/s).
pub const C: f64 = 299_792_458.0;

/// Nominal solar mass (kg).
pub const MSUN: f64 = 1.988_409_902_147_041_6e30;

/// Heliocentric gravitational constant `G * M_sun` (m^3 s^-2), the value
/// behind LAL's `MTSUN_SI`.
pub const GMSUN: f64 = 1.327_124_4e20;

/// Solar mass in seconds, `GMSUN / C^3` (LAL `MTSUN_SI`).
pub const GT: f64 = GMSUN / (C * C * C);

/// Metres per megaparsec.
pub const M_PER_MPC: f64 = 3.085_677_581_491_367e22;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gt_matches_lal_solar_time() {
        assert!(
            ((GT - 4.925_490_947_641_267e-6) / GT).abs() < 1e-14,
            "GT={GT:e}"
        );
    }

    #[test]
    fn nominal_g_msun_agrees_within_g_uncertainty() {
        let derived = G * MSUN / C.powi(3);
        assert!(
            ((derived - GT) / GT).abs() < 1e-7,
            "G*MSUN/C^3={derived:e} vs GT={GT:e}"
        );
    }
}
