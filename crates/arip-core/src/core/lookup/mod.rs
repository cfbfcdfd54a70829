//! Physicochemical lookup data for atom classification.
//!
//! The [`LookupTable`] maps a residue name plus a selector (atom name for amino acids,
//! element for nucleotides and for the non-standard bucket) to an atom's radius, type
//! tag and baseline surface/volume. It also owns the residue abbreviation tables that
//! decide whether a residue is an amino acid, a nucleotide or non-standard, and the
//! water probe radius added to every atom.

pub mod defaults;
pub mod table;

pub use table::{AtomProperties, LookupError, LookupTable, ResidueClass};
