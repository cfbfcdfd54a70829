use super::atom::AtomRecord;
use crate::core::lookup::ResidueClass;
use nalgebra::Point3;
use std::fmt::{self, Write};

/// Joins site key and abbreviated name for amino acids and nucleotides.
pub const STANDARD_SEPARATOR: char = '-';
/// Joins site key and residue name for everything else, so the two stay distinguishable.
pub const NON_STANDARD_SEPARATOR: char = ';';

/// One row of the fixed column schema handed to the geometry engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRow {
    /// `A12-G`, `B3-dA` or `A201;HEM`.
    pub label: String,
    pub atom_name: String,
    pub position: Point3<f64>,
    pub radius: f64,
    pub type_tag: String,
    pub surface: f64,
    pub volume: f64,
}

impl AtomRow {
    /// Builds a row, labelling it with `abbreviation` when the residue is standard.
    pub fn from_record(record: &AtomRecord, abbreviation: Option<&str>) -> Self {
        let label = match record.class {
            ResidueClass::NonStandard => format!(
                "{}{}{}",
                record.site, NON_STANDARD_SEPARATOR, record.residue_name
            ),
            ResidueClass::AminoAcid | ResidueClass::Nucleotide => format!(
                "{}{}{}",
                record.site,
                STANDARD_SEPARATOR,
                abbreviation.unwrap_or(&record.residue_name)
            ),
        };
        Self {
            label,
            atom_name: record.atom_name.clone(),
            position: record.position,
            radius: record.radius,
            type_tag: record.type_tag.clone(),
            surface: record.surface,
            volume: record.volume,
        }
    }
}

/// The geometry-relevant subset of an [`AtomRow`] consumed by the surface step.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactAtom {
    pub label: String,
    pub atom_name: String,
    pub position: Point3<f64>,
    pub radius: f64,
    pub surface: f64,
    pub type_tag: String,
}

impl From<&AtomRow> for ContactAtom {
    fn from(row: &AtomRow) -> Self {
        Self {
            label: row.label.clone(),
            atom_name: row.atom_name.clone(),
            position: row.position,
            radius: row.radius,
            surface: row.surface,
            type_tag: row.type_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomTable {
    rows: Vec<AtomRow>,
}

impl AtomTable {
    pub fn push(&mut self, row: AtomRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[AtomRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomRow> {
        self.rows.iter()
    }

    pub fn contact_atoms(&self) -> Vec<ContactAtom> {
        self.rows.iter().map(ContactAtom::from).collect()
    }
}

impl FromIterator<AtomRow> for AtomTable {
    fn from_iter<I: IntoIterator<Item = AtomRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AtomTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:<12} {:<5} {:>9} {:>9} {:>9} {:>6} {:<6} {:>7} {:>7}",
            "", "Residue", "Atom", "x", "y", "z", "R", "Type", "Surf", "Volu"
        )?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{:>6} {:<12} {:<5} {:>9.3} {:>9.3} {:>9.3} {:>6.2} {:<6} {:>7.2} {:>7.2}",
                i,
                row.label,
                row.atom_name,
                row.position.x,
                row.position.y,
                row.position.z,
                row.radius,
                row.type_tag,
                row.surface,
                row.volume
            )?;
        }
        Ok(())
    }
}

/// The three disjoint views produced by classification of one model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionedTable {
    pub amino_acid: AtomTable,
    pub nucleotide: AtomTable,
    pub non_standard: AtomTable,
}

impl PartitionedTable {
    pub fn partition(&self, class: ResidueClass) -> &AtomTable {
        match class {
            ResidueClass::AminoAcid => &self.amino_acid,
            ResidueClass::Nucleotide => &self.nucleotide,
            ResidueClass::NonStandard => &self.non_standard,
        }
    }

    pub(crate) fn partition_mut(&mut self, class: ResidueClass) -> &mut AtomTable {
        match class {
            ResidueClass::AminoAcid => &mut self.amino_acid,
            ResidueClass::Nucleotide => &mut self.nucleotide,
            ResidueClass::NonStandard => &mut self.non_standard,
        }
    }

    pub fn len(&self) -> usize {
        self.amino_acid.len() + self.nucleotide.len() + self.non_standard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Amino-acid, nucleotide and non-standard rows concatenated in that order.
    pub fn combined(&self) -> AtomTable {
        self.amino_acid
            .iter()
            .chain(self.nucleotide.iter())
            .chain(self.non_standard.iter())
            .cloned()
            .collect()
    }

    /// Diagnostic dump of every non-empty partition with its row count.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (table, name) in [
            (&self.amino_acid, "amino_acid"),
            (&self.nucleotide, "nucleotide"),
            (&self.non_standard, "non_standard"),
        ] {
            if !table.is_empty() {
                let _ = write!(out, "{}", table);
                let _ = writeln!(out, "len({}_df): {}", name, table.len());
            }
        }
        out
    }
}
