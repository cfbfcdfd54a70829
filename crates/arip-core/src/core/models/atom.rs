use crate::core::lookup::ResidueClass;
use nalgebra::Point3;
use std::fmt;

/// Identifies one residue instance: chain id followed by the residue sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteKey {
    pub chain_id: char,
    pub residue_number: i32,
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chain_id, self.residue_number)
    }
}

/// An admissible atom with its physicochemical properties resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub site: SiteKey,
    /// Residue name as written in the file (e.g., "ALA", "DA", "HEM").
    pub residue_name: String,
    pub class: ResidueClass,
    pub atom_name: String,
    pub element: String,
    pub position: Point3<f64>,
    /// Lookup radius plus the water probe radius.
    pub radius: f64,
    pub type_tag: String,
    pub surface: f64,
    pub volume: f64,
}
