//! Spin-induced quadrupole and octupole coefficients from tidal deformability.
//!
//! Each body is handled on its own: the coefficients depend on that body's Λ
//! only. Two branches:
//!
//! - `0 <= Λ <= 1`: cubic extension anchored at `log C_Q = 1` for `Λ = 0`
//! - `Λ > 1`: quartic universal relation in `ln Λ`
//!
//! The octupole coefficient always follows from the quadrupole one through a
//! second quartic fit. Both are returned with the black-hole value of one
//! subtracted.

use crate::domain::MultipoleParams;

/// Coefficients of the low-deformability cubic `1 + Λ (a + Λ (b + Λ c))`.
#[derive(Debug, Clone, Copy)]
pub struct LowLambdaFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Coefficients of a quartic `c0 + c1 u + c2 u^2 + c3 u^3 + c4 u^4`.
#[derive(Debug, Clone, Copy)]
pub struct QuarticFit {
    pub c: [f64; 5],
}

impl QuarticFit {
    pub fn eval(&self, u: f64) -> f64 {
        let c = &self.c;
        c[0] + c[1] * u + c[2] * u.powi(2) + c[3] * u.powi(3) + c[4] * u.powi(4)
    }
}

pub const LOW_LAMBDA_FIT: LowLambdaFit = LowLambdaFit {
    a: 0.427688866723244,
    b: -0.324336526985068,
    c: 0.1107439432180572,
};

/// `log C_Q` as a function of `ln Λ`.
pub const QUAD_FIT: QuarticFit = QuarticFit {
    c: [0.1940, 0.09163, 0.04812, -0.004286, 0.00012450],
};

/// `log C_Oc` as a function of `log C_Q`.
pub const OCT_FIT: QuarticFit = QuarticFit {
    c: [0.003131, 2.071, -0.7152, 0.2458, -0.03309],
};

/// `log C_Q` for a single body.
///
/// The boundary `Λ = 1` belongs to the cubic branch. Negative or NaN inputs
/// fall through to the logarithmic branch and come out as NaN.
pub fn log_quadparam(lambda: f64) -> f64 {
    if (0.0..=1.0).contains(&lambda) {
        let f = LOW_LAMBDA_FIT;
        1.0 + lambda * (f.a + lambda * (f.b + lambda * f.c))
    } else {
        QUAD_FIT.eval(lambda.ln())
    }
}

/// Quadrupole and octupole coefficients for a single body, minus the BBH baseline.
pub fn multipole_params(lambda: f64) -> MultipoleParams {
    let log_quad = log_quadparam(lambda);
    let log_oct = OCT_FIT.eval(log_quad);

    MultipoleParams {
        quadrupole: log_quad.exp() - 1.0,
        octupole: log_oct.exp() - 1.0,
    }
}
