//! Closed-form NRTidalv2 component models.
//!
//! Models are implemented as small, pure functions of a single frequency
//! sample so the waveform layer can map them over a grid in any order. Fit
//! coefficients live in named `const` tables next to the function using them.

pub mod amplitude;
pub mod merger;
pub mod multipole;
pub mod phase;

pub use amplitude::*;
pub use merger::*;
pub use multipole::*;
pub use phase::*;
