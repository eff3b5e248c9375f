//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - source parameters (`IntrinsicParameters`, `ExtrinsicParameters`, `SourceParameters`)
//! - baseline selection and correction policies (`Approximant`, `TidalOptions`)
//! - run configuration and outputs (`WaveformConfig`, `WaveformFile`, `Strain`)

pub mod types;

pub use types::*;
