use thiserror::Error;

use super::collaborators::CollaboratorError;
use crate::core::classifier::ClassifyError;
use crate::core::io::loader::LoadError;
use crate::core::io::models::{ExtractError, ModelIndex};
use crate::core::io::record::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Dihedral,
    Volume,
    Surface,
    Report,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dihedral => "dihedral",
            Self::Volume => "volume",
            Self::Surface => "surface",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Malformed atom record: {0}")]
    Record(#[from] RecordError),

    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("The {step} step failed: {source}")]
    Collaborator {
        step: Step,
        #[source]
        source: CollaboratorError,
    },
}

#[derive(Debug, Error)]
pub enum FileErrorKind {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("model {index}: {source}")]
    Model {
        index: ModelIndex,
        #[source]
        source: ModelError,
    },
}

/// A structure file that could not be analysed.
#[derive(Debug, Error)]
#[error("The file {name} cannot be analyzed: {kind}")]
pub struct FileError {
    pub name: String,
    pub kind: FileErrorKind,
}

impl FileError {
    pub fn new(name: impl Into<String>, kind: impl Into<FileErrorKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
