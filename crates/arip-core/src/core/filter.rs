//! The admissibility filter applied to every atom line of a model.

use crate::core::io::record::{RecordError, RecordType, RecordView};

pub const TERMINAL_OXYGEN: &str = "OXT";
pub const HYDROGEN: &str = "H";
pub const WATER: &str = "HOH";
pub const PRIMARY_ALT_LOC: char = 'A';

/// Keeps only blank or primary alternate locations, so one conformation per site survives.
pub fn is_primary_conformation(alt_loc: char) -> bool {
    alt_loc == ' ' || alt_loc == PRIMARY_ALT_LOC
}

pub fn is_admissible(record: &RecordView<'_>) -> bool {
    is_primary_conformation(record.alt_loc())
        && record.atom_name() != TERMINAL_OXYGEN
        && record.element() != HYDROGEN
        && record.raw_residue_name() != WATER
}

/// Returns the admissible atom records among `lines`, in their original order.
///
/// Lines that are not `ATOM`/`HETATM` records are skipped before schema validation,
/// whichever way the model was extracted.
///
/// # Errors
///
/// Returns a [`RecordError`] for the first atom record that does not fit the schema.
pub fn admit<S: AsRef<str>>(lines: &[S]) -> Result<Vec<RecordView<'_>>, RecordError> {
    let mut admitted = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if RecordType::of_line(line).is_none() {
            continue;
        }
        let record = RecordView::new(line)?;
        if is_admissible(&record) {
            admitted.push(record);
        }
    }
    Ok(admitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::record::tests::{atom, pdb_line};

    #[test]
    fn valid_heavy_atom_is_admitted() {
        let lines = vec![atom("CA", "ALA", 1, "C")];
        assert_eq!(admit(&lines).unwrap().len(), 1);
    }

    #[test]
    fn water_hydrogen_and_terminal_oxygen_are_rejected() {
        let lines = vec![
            atom("O", "HOH", 301, "O"),
            atom("H", "ALA", 1, "H"),
            atom("OXT", "ALA", 1, "O"),
            atom("CA", "ALA", 1, "C"),
        ];
        let admitted = admit(&lines).unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].atom_name(), "CA");
    }

    #[test]
    fn only_blank_or_primary_alt_loc_survives() {
        let at = |alt| pdb_line("ATOM", "CB", alt, "SER", 'A', 5, (0.0, 0.0, 0.0), "C");
        let lines = vec![at('A'), at('B'), at('C'), at(' ')];
        let alt_locs: Vec<char> = admit(&lines).unwrap().iter().map(|r| r.alt_loc()).collect();
        assert_eq!(alt_locs, vec!['A', ' ']);
    }

    #[test]
    fn non_atom_records_are_skipped_without_validation() {
        let lines = vec![
            "TER".to_string(),
            "ANISOU    1  N   ALA A   1".to_string(),
            atom("N", "ALA", 1, "N"),
            "REMARK short".to_string(),
        ];
        let admitted = admit(&lines).unwrap();
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].atom_name(), "N");
    }

    #[test]
    fn hetatm_records_are_admitted() {
        let lines = vec![pdb_line(
            "HETATM",
            "ZN",
            ' ',
            "ZN",
            'A',
            401,
            (0.0, 0.0, 0.0),
            "ZN",
        )];
        assert_eq!(admit(&lines).unwrap().len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let lines = vec![
            atom("N", "GLY", 1, "N"),
            atom("CA", "GLY", 1, "C"),
            atom("C", "GLY", 1, "C"),
        ];
        let names: Vec<_> = admit(&lines)
            .unwrap()
            .iter()
            .map(|r| r.atom_name())
            .collect();
        assert_eq!(names, vec!["N", "CA", "C"]);
    }

    #[test]
    fn short_atom_record_is_malformed() {
        let line = atom("CA", "ALA", 1, "C");
        let lines = vec![line[..54].to_string()];
        assert!(matches!(
            admit(&lines),
            Err(RecordError::Malformed { found: 54, .. })
        ));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let lines = vec![atom("O", "HOH", 1, "O")];
        assert!(admit(&lines).unwrap().is_empty());
        let none: Vec<String> = Vec::new();
        assert!(admit(&none).unwrap().is_empty());
    }

    #[test]
    fn admitted_records_never_carry_excluded_labels() {
        let mut lines = Vec::new();
        for (name, residue, element) in [
            ("CA", "ALA", "C"),
            ("H1", "ALA", "H"),
            ("O", "HOH", "O"),
            ("OXT", "GLY", "O"),
            ("FE", "HEM", "FE"),
            ("P", "DA", "P"),
        ] {
            for alt in [' ', 'A', 'B'] {
                lines.push(pdb_line("ATOM", name, alt, residue, 'A', 1, (0.0, 0.0, 0.0), element));
            }
        }
        let admitted = admit(&lines).unwrap();
        assert_eq!(admitted.len(), 3 * 2);
        for record in admitted {
            assert_ne!(record.element(), HYDROGEN);
            assert_ne!(record.residue_name(), WATER);
            assert_ne!(record.atom_name(), TERMINAL_OXYGEN);
            assert!(is_primary_conformation(record.alt_loc()));
        }
    }
}
