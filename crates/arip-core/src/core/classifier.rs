//! Turns admissible atom records into property-annotated, partitioned tables.

use crate::core::io::record::{RecordError, RecordView};
use crate::core::lookup::LookupTable;
use crate::core::models::atom::{AtomRecord, SiteKey};
use crate::core::models::table::{AtomRow, PartitionedTable};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifyError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(
        "No lookup entry for atom '{atom_name}' (element '{element}') of residue {residue_name} at {site}"
    )]
    Unresolved {
        site: SiteKey,
        residue_name: String,
        atom_name: String,
        element: String,
    },
}

pub struct Classifier<'a> {
    table: &'a LookupTable,
}

impl<'a> Classifier<'a> {
    pub fn new(table: &'a LookupTable) -> Self {
        Self { table }
    }

    /// Parses one record and resolves its lookup properties.
    ///
    /// The returned radius already includes the water probe radius.
    pub fn classify_atom(&self, record: &RecordView<'_>) -> Result<AtomRecord, ClassifyError> {
        let site = SiteKey {
            chain_id: record.chain_id(),
            residue_number: record.residue_number()?,
        };
        let residue_name = record.residue_name();
        let atom_name = record.atom_name();
        let element = record.element();
        let position = record.position()?;

        let properties = self
            .table
            .resolve(residue_name, atom_name, element)
            .ok_or_else(|| ClassifyError::Unresolved {
                site,
                residue_name: residue_name.to_string(),
                atom_name: atom_name.to_string(),
                element: element.to_string(),
            })?;

        Ok(AtomRecord {
            site,
            residue_name: residue_name.to_string(),
            class: self.table.residue_class(residue_name),
            atom_name: atom_name.to_string(),
            element: element.to_string(),
            position,
            radius: properties.radius + self.table.probe_radius(),
            type_tag: properties.type_tag.clone(),
            surface: properties.surface,
            volume: properties.volume,
        })
    }

    /// Classifies every record and splits the result by residue class.
    ///
    /// Rows keep their input order within each partition. With `verbose`, the
    /// partitions are logged; the returned table is the same either way.
    pub fn classify(
        &self,
        records: &[RecordView<'_>],
        verbose: bool,
    ) -> Result<PartitionedTable, ClassifyError> {
        let mut partitioned = PartitionedTable::default();
        for record in records {
            let atom = self.classify_atom(record)?;
            let row = AtomRow::from_record(&atom, self.table.abbreviation(&atom.residue_name));
            partitioned.partition_mut(atom.class).push(row);
        }

        debug!(
            amino_acid = partitioned.amino_acid.len(),
            nucleotide = partitioned.nucleotide.len(),
            non_standard = partitioned.non_standard.len(),
            "Classified atoms."
        );
        if verbose && !partitioned.is_empty() {
            info!("\n{}", partitioned.render());
        }
        Ok(partitioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::admit;
    use crate::core::io::record::tests::{atom, pdb_line};
    use crate::core::lookup::ResidueClass;
    use nalgebra::Point3;

    fn table() -> LookupTable {
        LookupTable::builtin().unwrap()
    }

    #[test]
    fn scenario_single_model_with_water_hydrogen_and_alpha_carbon() {
        let lines = vec![
            atom("O", "HOH", 301, "O"),
            atom("HA", "ALA", 1, "H"),
            atom("CA", "ALA", 1, "C"),
        ];
        let records = admit(&lines).unwrap();
        assert_eq!(records.len(), 1);

        let table = table();
        let partitioned = Classifier::new(&table).classify(&records, false).unwrap();
        assert_eq!(partitioned.combined().len(), 1);
    }

    #[test]
    fn classify_atom_extracts_fields_and_adds_probe_radius() {
        let table = table();
        let line = pdb_line("ATOM", "CA", ' ', "ALA", 'B', 7, (1.5, -2.25, 3.0), "C");
        let record = RecordView::new(&line).unwrap();
        let atom = Classifier::new(&table).classify_atom(&record).unwrap();

        let props = table.resolve("ALA", "CA", "C").unwrap();
        assert_eq!(atom.site.to_string(), "B7");
        assert_eq!(atom.class, ResidueClass::AminoAcid);
        assert_eq!(atom.position, Point3::new(1.5, -2.25, 3.0));
        assert_eq!(atom.radius, props.radius + table.probe_radius());
        assert_eq!(atom.type_tag, props.type_tag);
        assert_eq!(atom.surface, props.surface);
        assert_eq!(atom.volume, props.volume);
    }

    #[test]
    fn probe_radius_is_added_exactly_once_for_every_class() {
        let table = table().with_probe_radius(2.0);
        let lines = vec![
            atom("CB", "SER", 1, "C"),
            atom("C1'", "DG", 2, "C"),
            atom("ZN", "ZN", 3, "ZN"),
        ];
        let records = admit(&lines).unwrap();
        let classifier = Classifier::new(&table);
        for record in &records {
            let atom = classifier.classify_atom(record).unwrap();
            let base = table
                .resolve(&atom.residue_name, &atom.atom_name, &atom.element)
                .unwrap();
            assert_eq!(atom.radius, base.radius + 2.0);
        }
    }

    #[test]
    fn partitions_are_disjoint_exhaustive_and_labelled() {
        let lines = vec![
            atom("N", "GLY", 1, "N"),
            atom("P", "DA", 2, "P"),
            atom("CA", "GLY", 1, "C"),
            pdb_line("HETATM", "FE", ' ', "HEM", 'A', 201, (0.0, 0.0, 0.0), "FE"),
            atom("O2", "U", 3, "O"),
        ];
        let records = admit(&lines).unwrap();
        let table = table();
        let partitioned = Classifier::new(&table).classify(&records, true).unwrap();

        let labels = |class: ResidueClass| -> Vec<String> {
            partitioned
                .partition(class)
                .rows()
                .iter()
                .map(|r| r.label.clone())
                .collect()
        };
        assert_eq!(labels(ResidueClass::AminoAcid), vec!["A1-G", "A1-G"]);
        assert_eq!(labels(ResidueClass::Nucleotide), vec!["A2-dA", "A3-rU"]);
        assert_eq!(labels(ResidueClass::NonStandard), vec!["A201;HEM"]);
        assert_eq!(partitioned.len(), records.len());
    }

    #[test]
    fn verbose_flag_does_not_change_result() {
        let lines = vec![atom("CA", "LYS", 9, "C"), atom("NZ", "LYS", 9, "N")];
        let records = admit(&lines).unwrap();
        let table = table();
        let classifier = Classifier::new(&table);
        assert_eq!(
            classifier.classify(&records, true).unwrap(),
            classifier.classify(&records, false).unwrap()
        );
    }

    #[test]
    fn unknown_atom_in_standard_residue_is_unresolved() {
        let lines = vec![atom("XX", "ALA", 4, "C")];
        let records = admit(&lines).unwrap();
        let table = table();
        let err = Classifier::new(&table).classify(&records, false).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Unresolved {
                site: SiteKey {
                    chain_id: 'A',
                    residue_number: 4
                },
                residue_name: "ALA".to_string(),
                atom_name: "XX".to_string(),
                element: "C".to_string(),
            }
        );
    }

    #[test]
    fn unknown_element_in_non_standard_residue_is_unresolved() {
        let lines = vec![atom("U1", "UNL", 1, "XE")];
        let records = admit(&lines).unwrap();
        let table = table();
        let result = Classifier::new(&table).classify(&records, false);
        assert!(matches!(result, Err(ClassifyError::Unresolved { .. })));
    }

    #[test]
    fn bad_coordinates_surface_as_record_errors() {
        let mut line = atom("CA", "ALA", 1, "C");
        line.replace_range(30..38, "   nope ");
        let records = admit(std::slice::from_ref(&line)).unwrap();
        let table = table();
        let result = Classifier::new(&table).classify(&records, false);
        assert!(matches!(
            result,
            Err(ClassifyError::Record(RecordError::InvalidFloat { .. }))
        ));
    }
}
