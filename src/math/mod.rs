//! Mathematical utilities: window functions and frequency grids.

pub mod grid;
pub mod taper;

pub use grid::*;
pub use taper::*;
