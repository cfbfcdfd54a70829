//! # Molecular Data Models
//!
//! Per-invocation data produced by classification.
//!
//! - [`atom`] - [`AtomRecord`](atom::AtomRecord), one admissible atom with resolved
//!   properties, and its [`SiteKey`](atom::SiteKey)
//! - [`table`] - The fixed column schema handed to downstream geometry
//!   ([`AtomRow`](table::AtomRow), [`AtomTable`](table::AtomTable)), the reduced
//!   geometry view ([`ContactAtom`](table::ContactAtom)) and the three-way
//!   [`PartitionedTable`](table::PartitionedTable)
//!
//! All of these live only for the duration of one file's analysis.

pub mod atom;
pub mod table;
