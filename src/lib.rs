//! `nrtidal` library crate.
//!
//! Frequency-domain NRTidalv2 tidal corrections layered on a binary black hole
//! baseline waveform. The binary (`nrt`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the waveform models are reusable from other Rust code (likelihoods, samplers)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod physics;
pub mod plot;
pub mod report;
pub mod waveform;
