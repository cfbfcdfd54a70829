//! # Core Module
//!
//! The stateless foundation of ARIP: everything needed to go from a structure file on
//! disk to partitioned, property-annotated atom tables.
//!
//! ## Architecture
//!
//! - **File I/O** ([`io`]) - Compression-aware loading, the fixed-column record schema
//!   and the split of a file into models
//! - **Admissibility** ([`filter`]) - The five-condition atom filter
//! - **Physicochemical Data** ([`lookup`]) - Radii, type tags and baseline surface/volume
//!   keyed by residue, atom name and element
//! - **Molecular Representation** ([`models`]) - Atom records and partitioned tables
//! - **Classification** ([`classifier`]) - Resolution of lookup properties and
//!   partitioning by residue class
//!
//! The lookup table is the only long-lived object here. It is immutable once built and
//! can be shared across threads without synchronization.

pub mod classifier;
pub mod filter;
pub mod io;
pub mod lookup;
pub mod models;
