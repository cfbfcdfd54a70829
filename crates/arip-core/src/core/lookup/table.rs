use super::defaults::{
    AMINO_ACID_CODES, ATOM_PROPERTIES_CSV, DEFAULT_PROBE_RADIUS, NON_STANDARD_BUCKET,
    NUCLEOTIDE_CODES,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Biochemical class of a residue, decided by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueClass {
    AminoAcid,
    Nucleotide,
    NonStandard,
}

/// Reference properties of one atom type.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomProperties {
    /// Van der Waals radius in Angstroms, without the water probe.
    pub radius: f64,
    pub type_tag: String,
    /// Baseline solvent-accessible surface in square Angstroms.
    pub surface: f64,
    /// Baseline packing volume in cubic Angstroms.
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
struct PropertyRecord {
    residue: String,
    selector: String,
    radius: f64,
    #[serde(rename = "type")]
    type_tag: String,
    surface: f64,
    volume: f64,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid entry {residue}/{selector} in '{path}': {reason}")]
    InvalidEntry {
        path: String,
        residue: String,
        selector: String,
        reason: String,
    },
    #[error("Residue '{0}' is listed as both an amino acid and a nucleotide")]
    OverlappingResidue(String),
}

/// Immutable lookup of physicochemical atom properties.
///
/// Built once at startup and passed explicitly to everything that classifies atoms.
#[derive(Debug, Clone)]
pub struct LookupTable {
    residues: HashMap<String, HashMap<String, AtomProperties>>,
    non_standard: HashMap<String, AtomProperties>,
    amino_acids: HashMap<String, String>,
    nucleotides: HashMap<String, String>,
    probe_radius: f64,
}

impl LookupTable {
    /// The bundled property table with the standard abbreviations.
    pub fn builtin() -> Result<Self, LookupError> {
        Self::from_reader(ATOM_PROPERTIES_CSV.as_bytes(), "<builtin>")
    }

    /// Reads a property table from a CSV file and pairs it with the standard abbreviations.
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path).map_err(|e| LookupError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(file, &path.to_string_lossy())
    }

    fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, LookupError> {
        let mut residues: HashMap<String, HashMap<String, AtomProperties>> = HashMap::new();
        let mut non_standard = HashMap::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        for result in csv_reader.deserialize::<PropertyRecord>() {
            let record = result.map_err(|e| LookupError::Csv {
                path: origin.to_string(),
                source: e,
            })?;
            if !(record.radius.is_finite() && record.radius > 0.0) {
                return Err(LookupError::InvalidEntry {
                    path: origin.to_string(),
                    residue: record.residue,
                    selector: record.selector,
                    reason: format!("radius must be positive, got {}", record.radius),
                });
            }
            let properties = AtomProperties {
                radius: record.radius,
                type_tag: record.type_tag,
                surface: record.surface,
                volume: record.volume,
            };
            if record.residue == NON_STANDARD_BUCKET {
                non_standard.insert(record.selector, properties);
            } else {
                residues
                    .entry(record.residue)
                    .or_default()
                    .insert(record.selector, properties);
            }
        }

        let standard = |map: &phf::Map<&'static str, &'static str>| {
            map.entries()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            residues,
            non_standard,
            amino_acids: HashMap::new(),
            nucleotides: HashMap::new(),
            probe_radius: DEFAULT_PROBE_RADIUS,
        }
        .with_abbreviations(standard(&AMINO_ACID_CODES), standard(&NUCLEOTIDE_CODES))
    }

    /// Replaces the residue abbreviation tables, which also redefine the residue classes.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::OverlappingResidue`] if a residue name appears in both tables.
    pub fn with_abbreviations(
        mut self,
        amino_acids: HashMap<String, String>,
        nucleotides: HashMap<String, String>,
    ) -> Result<Self, LookupError> {
        let mut overlap: Vec<&String> = amino_acids
            .keys()
            .filter(|name| nucleotides.contains_key(*name))
            .collect();
        overlap.sort();
        if let Some(name) = overlap.first() {
            return Err(LookupError::OverlappingResidue((*name).clone()));
        }
        self.amino_acids = amino_acids;
        self.nucleotides = nucleotides;
        Ok(self)
    }

    pub fn with_probe_radius(mut self, probe_radius: f64) -> Self {
        self.probe_radius = probe_radius;
        self
    }

    pub fn probe_radius(&self) -> f64 {
        self.probe_radius
    }

    pub fn residue_class(&self, residue_name: &str) -> ResidueClass {
        if self.amino_acids.contains_key(residue_name) {
            ResidueClass::AminoAcid
        } else if self.nucleotides.contains_key(residue_name) {
            ResidueClass::Nucleotide
        } else {
            ResidueClass::NonStandard
        }
    }

    /// One-letter code of an amino acid or short code of a nucleotide.
    pub fn abbreviation(&self, residue_name: &str) -> Option<&str> {
        self.amino_acids
            .get(residue_name)
            .or_else(|| self.nucleotides.get(residue_name))
            .map(String::as_str)
    }

    /// Resolves the properties of one atom.
    ///
    /// Residues without a sub-table fall into the non-standard bucket keyed by element.
    /// Inside a sub-table, amino acids are keyed by atom name; nucleotides are keyed by
    /// element, provided the first character of the atom name is itself a key.
    pub fn resolve(
        &self,
        residue_name: &str,
        atom_name: &str,
        element: &str,
    ) -> Option<&AtomProperties> {
        let Some(sub_table) = self.residues.get(residue_name) else {
            return self.non_standard.get(element);
        };
        match self.residue_class(residue_name) {
            ResidueClass::AminoAcid => sub_table.get(atom_name),
            ResidueClass::Nucleotide => {
                let initial = atom_name.get(..1)?;
                if sub_table.contains_key(initial) {
                    sub_table.get(element)
                } else {
                    None
                }
            }
            ResidueClass::NonStandard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SMALL_TABLE: &str = "residue,selector,radius,type,surface,volume\n\
        ALA,CA,1.88,C4H1,11.9,14.4\n\
        DA,C,1.80,C,17.0,16.5\n\
        DA,O,1.40,O,26.4,15.2\n\
        UNDEF,FE,0.78,FE,11.0,2.0\n";

    fn small_table() -> LookupTable {
        LookupTable::from_reader(SMALL_TABLE.as_bytes(), "test").unwrap()
    }

    #[test]
    fn builtin_table_parses_and_covers_standard_residues() {
        let table = LookupTable::builtin().unwrap();
        assert_eq!(table.probe_radius(), DEFAULT_PROBE_RADIUS);
        for code in AMINO_ACID_CODES.keys() {
            for atom in ["N", "CA", "C", "O"] {
                assert!(
                    table.resolve(code, atom, "").is_some(),
                    "missing {} {}",
                    code,
                    atom
                );
            }
        }
        for code in NUCLEOTIDE_CODES.keys() {
            for (atom, element) in [("P", "P"), ("OP1", "O"), ("C1'", "C"), ("N9", "N")] {
                assert!(table.resolve(code, atom, element).is_some());
            }
        }
        assert!(table.resolve("HEM", "FE", "FE").is_some());
    }

    #[test]
    fn amino_acids_resolve_by_atom_name() {
        let table = small_table();
        let props = table.resolve("ALA", "CA", "C").unwrap();
        assert_eq!(props.radius, 1.88);
        assert_eq!(props.type_tag, "C4H1");
        assert!(table.resolve("ALA", "CZ", "C").is_none());
    }

    #[test]
    fn nucleotides_resolve_by_element_gated_on_atom_initial() {
        let table = small_table();
        assert_eq!(table.resolve("DA", "C1'", "C").unwrap().type_tag, "C");
        assert_eq!(table.resolve("DA", "O4'", "O").unwrap().type_tag, "O");
        // 'N' is not a key of the DA sub-table.
        assert!(table.resolve("DA", "N9", "N").is_none());
        // initial present, element absent.
        assert!(table.resolve("DA", "C5", "N").is_none());
        assert!(table.resolve("DA", "", "C").is_none());
    }

    #[test]
    fn residues_without_sub_table_use_the_element_bucket() {
        let table = small_table();
        assert_eq!(table.resolve("HEM", "FE", "FE").unwrap().radius, 0.78);
        // a standard name with no sub-table falls back too.
        assert_eq!(table.resolve("GLY", "FE", "FE").unwrap().radius, 0.78);
        assert!(table.resolve("HEM", "CA", "C").is_none());
    }

    #[test]
    fn residue_class_and_abbreviation_follow_code_tables() {
        let table = small_table();
        assert_eq!(table.residue_class("TRP"), ResidueClass::AminoAcid);
        assert_eq!(table.residue_class("DT"), ResidueClass::Nucleotide);
        assert_eq!(table.residue_class("HEM"), ResidueClass::NonStandard);
        assert_eq!(table.abbreviation("TRP"), Some("W"));
        assert_eq!(table.abbreviation("DT"), Some("dT"));
        assert_eq!(table.abbreviation("U"), Some("rU"));
        assert_eq!(table.abbreviation("HEM"), None);
    }

    #[test]
    fn overlapping_abbreviation_tables_are_rejected() {
        let aa = HashMap::from([("XXX".to_string(), "X".to_string())]);
        let nt = HashMap::from([("XXX".to_string(), "xX".to_string())]);
        let result = small_table().with_abbreviations(aa, nt);
        assert!(matches!(result, Err(LookupError::OverlappingResidue(name)) if name == "XXX"));
    }

    #[test]
    fn probe_radius_can_be_overridden() {
        let table = small_table().with_probe_radius(1.2);
        assert_eq!(table.probe_radius(), 1.2);
    }

    #[test]
    fn load_reads_csv_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("props.csv");
        fs::write(&path, SMALL_TABLE).unwrap();
        let table = LookupTable::load(&path).unwrap();
        assert!(table.resolve("ALA", "CA", "C").is_some());
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = LookupTable::load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(LookupError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "residue,selector,radius,type,surface,volume\nALA,CA,wide,C,1,1\n",
        )
        .unwrap();
        let result = LookupTable::load(&path);
        assert!(matches!(result, Err(LookupError::Csv { .. })));
    }

    #[test]
    fn non_positive_radius_is_an_invalid_entry() {
        let text = "residue,selector,radius,type,surface,volume\nALA,CA,0.0,C4H1,11.9,14.4\n";
        let result = LookupTable::from_reader(text.as_bytes(), "test");
        assert!(matches!(
            result,
            Err(LookupError::InvalidEntry { residue, selector, .. })
                if residue == "ALA" && selector == "CA"
        ));
    }
}
