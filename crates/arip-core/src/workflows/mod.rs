//! # Workflows Module
//!
//! The top-level entry points of ARIP. Each workflow takes structure files from disk
//! and carries them through the [`core`](crate::core) and [`engine`](crate::engine)
//! layers.
//!
//! ## Architecture
//!
//! - **Analysis Workflow** ([`analyze`]) - The full per-file driver: load, split into
//!   models, run the per-model pipeline against the external collaborators.
//! - **Inspection Workflow** ([`inspect`]) - Loading, filtering and classification only,
//!   for checking inputs and lookup coverage without a geometry engine.
//! - **Batch Driver** ([`batch`]) - Runs either workflow over many files, logging and
//!   collecting per-file failures instead of stopping.
//!
//! ## Failure Isolation
//!
//! Every workflow returns `Result<_, FileError>` per file. The batch driver turns each
//! error into a log line and moves on, so one unreadable, corrupted or unclassifiable
//! structure never aborts the rest of a batch.

pub mod analyze;
pub mod batch;
pub mod inspect;
