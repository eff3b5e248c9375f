//! Physical constants and parameter conversions.

pub mod constants;
pub mod conversion;

pub use conversion::*;
