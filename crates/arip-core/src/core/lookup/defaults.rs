use phf::{Map, phf_map};

/// Radius of the water probe in Angstroms, added once to every atom radius.
pub const DEFAULT_PROBE_RADIUS: f64 = 1.4;

/// Residue name of the catch-all bucket for ligands, ions and modified residues.
pub const NON_STANDARD_BUCKET: &str = "UNDEF";

/// Bundled property table: `residue,selector,radius,type,surface,volume`.
pub(crate) const ATOM_PROPERTIES_CSV: &str = include_str!("../../../data/atom_properties.csv");

pub static AMINO_ACID_CODES: Map<&'static str, &'static str> = phf_map! {
    "ALA" => "A", "ARG" => "R", "ASN" => "N", "ASP" => "D", "CYS" => "C",
    "GLN" => "Q", "GLU" => "E", "GLY" => "G", "HIS" => "H", "ILE" => "I",
    "LEU" => "L", "LYS" => "K", "MET" => "M", "PHE" => "F", "PRO" => "P",
    "SER" => "S", "THR" => "T", "TRP" => "W", "TYR" => "Y", "VAL" => "V",
};

pub static NUCLEOTIDE_CODES: Map<&'static str, &'static str> = phf_map! {
    "A" => "rA", "C" => "rC", "G" => "rG", "U" => "rU",
    "DA" => "dA", "DC" => "dC", "DG" => "dG", "DT" => "dT",
};
