//! # ARIP Core Library
//!
//! Model extraction, atom filtering and biochemical classification for atom-residue
//! interaction profiling of macromolecular structures in the fixed-column PDB format.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that parsing, orchestration and
//! user-facing procedures stay independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless pieces: the gzip-aware file loader, the
//!   named-offset record schema, the model extractor, the admissibility filter, the
//!   physicochemical lookup table and the classifier that partitions atoms into
//!   amino-acid, nucleotide and non-standard tables.
//!
//! - **[`engine`]: The Logic Core.** The per-model pipeline that drives the external
//!   geometry and reporting collaborators, together with its configuration, error
//!   taxonomy and progress events.
//!
//! - **[`workflows`]: The Public API.** Per-file and batch drivers that isolate failures
//!   at file granularity so one bad structure never stops a batch.

pub mod core;
pub mod engine;
pub mod workflows;
