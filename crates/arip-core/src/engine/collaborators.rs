use crate::core::io::models::ModelIndex;
use crate::core::models::table::{AtomTable, ContactAtom};
use crate::engine::config::ReportSettings;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Error type returned by external collaborators.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of the contact-volume step.
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeOutcome<C, V> {
    Computed { contacts: C, volume: V },
    /// The engine ran out of resources for this model; the model is skipped.
    Exhausted,
}

impl<C: Degenerate, V: Degenerate> VolumeOutcome<C, V> {
    /// Interprets a raw `(contacts, volume)` pair, where a pair that is empty on both
    /// sides signals resource exhaustion.
    pub fn from_pair(contacts: C, volume: V) -> Self {
        if contacts.is_degenerate() && volume.is_degenerate() {
            Self::Exhausted
        } else {
            Self::Computed { contacts, volume }
        }
    }
}

/// Values that can be empty, zero or absent.
pub trait Degenerate {
    fn is_degenerate(&self) -> bool;
}

impl<K, V, S> Degenerate for HashMap<K, V, S> {
    fn is_degenerate(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Degenerate for BTreeMap<K, V> {
    fn is_degenerate(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Degenerate for Vec<T> {
    fn is_degenerate(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Degenerate for Option<T> {
    fn is_degenerate(&self) -> bool {
        self.is_none()
    }
}

impl Degenerate for f64 {
    fn is_degenerate(&self) -> bool {
        *self == 0.0
    }
}

/// The dot-sampling geometry engine and dihedral calculator.
pub trait GeometryEngine {
    type Dihedral;
    type Contacts;
    type Volume;
    type Surface;

    /// Backbone dihedral angles of a protein model, or `None` when not applicable.
    ///
    /// `atom_lines` holds the model's admissible atom records, one per line.
    fn dihedral(
        &self,
        structure_name: &str,
        atom_lines: &str,
        verbose: bool,
    ) -> Result<Option<Self::Dihedral>, CollaboratorError>;

    fn volume(
        &self,
        atoms: &AtomTable,
        density: bool,
        interval: f64,
    ) -> Result<VolumeOutcome<Self::Contacts, Self::Volume>, CollaboratorError>;

    fn surface(
        &self,
        reference_path: &Path,
        atoms: &[ContactAtom],
        contacts: &Self::Contacts,
    ) -> Result<Self::Surface, CollaboratorError>;
}

/// Everything the reporter receives for one successfully analysed model.
pub struct ModelReport<'a, G: GeometryEngine + ?Sized> {
    pub index: ModelIndex,
    pub structure_name: &'a str,
    pub dihedral: Option<&'a G::Dihedral>,
    pub surface: &'a G::Surface,
    pub volume: &'a G::Volume,
}

/// Writes the per-model report. The core never writes files itself.
pub trait Reporter<G: GeometryEngine + ?Sized> {
    fn write_report(
        &self,
        report: &ModelReport<'_, G>,
        settings: &ReportSettings,
    ) -> Result<(), CollaboratorError>;
}
