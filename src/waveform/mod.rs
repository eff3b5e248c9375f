//! Waveform assembly.
//!
//! Responsibilities:
//!
//! - look up the baseline generator for a family name (`baseline`)
//! - apply the tidal corrections sample by sample, in parallel (`combine`)
//! - expose the boundary entry points and the polarization projector (`generator`)

pub mod baseline;
pub mod combine;
pub mod generator;

pub use baseline::*;
pub use combine::*;
pub use generator::*;
