//! # Engine Module
//!
//! The per-model analysis pipeline and everything it needs to talk to the outside world.
//!
//! ## Overview
//!
//! For each model, the engine filters and classifies atoms, then drives three external
//! geometry steps (dihedral angles, contact volume, contact surface) and finally hands
//! the results to an external reporter. The geometry engine and the reporter are traits
//! ([`collaborators`]), so the engine itself performs no 3-D geometry and writes no files.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sampling interval, density, reference data, output settings
//! - **Collaborators** ([`collaborators`]) - The geometry and reporting contracts
//! - **Pipeline** ([`pipeline`]) - The per-model state machine and its outcomes
//! - **Error Handling** ([`error`]) - Model-level and file-level error types
//! - **Progress Monitoring** ([`progress`]) - Batch progress events for front-ends
//!
//! ## Failure Isolation
//!
//! A model without admissible atoms and a model for which the volume step reports
//! resource exhaustion are both skipped, never failed. Any other fault ends the file
//! and is returned to the caller as a value.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
