//! Input/output helpers.
//!
//! - strain sample exports to CSV (`export`)
//! - waveform JSON read/write (`waveform`)

pub mod export;
pub mod waveform;

pub use export::*;
pub use waveform::*;
