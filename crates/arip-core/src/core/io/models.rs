use super::record::RecordType;
use std::fmt;
use thiserror::Error;

pub const BEGIN_MARKER: &str = "MODEL";
pub const END_MARKER: &str = "ENDMDL";

/// Identifies a model within one structure file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelIndex {
    /// The file has no `MODEL`/`ENDMDL` blocks; the whole file is one model.
    Implicit,
    /// 1-based position of an explicit block in file order.
    Explicit(usize),
}

impl ModelIndex {
    /// Name used in log messages: `1abc` or `1abc_MODEL_2`.
    pub fn label(&self, structure_name: &str) -> String {
        match self {
            Self::Implicit => structure_name.to_string(),
            Self::Explicit(n) => format!("{}_MODEL_{}", structure_name, n),
        }
    }
}

impl fmt::Display for ModelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit => write!(f, "-1"),
            Self::Explicit(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub index: ModelIndex,
    pub lines: Vec<String>,
}

/// The models found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSet {
    /// No block markers: the atom records of the whole file.
    Single(Vec<String>),
    /// One entry per `MODEL`/`ENDMDL` pair, numbered from 1 in file order.
    Multiple(Vec<(usize, Vec<String>)>),
}

impl ModelSet {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(blocks) => blocks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_models(self) -> Vec<Model> {
        match self {
            Self::Single(lines) => vec![Model {
                index: ModelIndex::Implicit,
                lines,
            }],
            Self::Multiple(blocks) => blocks
                .into_iter()
                .map(|(n, lines)| Model {
                    index: ModelIndex::Explicit(n),
                    lines,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error(
        "File may be corrupted or contain an incomplete MODEL ({begin} MODEL vs {end} ENDMDL markers)"
    )]
    Corrupted { begin: usize, end: usize },
    #[error("ENDMDL of model {model} appears before its MODEL marker")]
    MisorderedBlock { model: usize },
}

/// Splits the lines of a structure file into models.
///
/// Without markers, every `ATOM`/`HETATM` line forms one implicit model. With an equal
/// number of begin and end markers, the i-th begin marker is paired with the i-th end
/// marker and the lines strictly between them form model i.
///
/// # Errors
///
/// Returns [`ExtractError::Corrupted`] when the marker counts differ and
/// [`ExtractError::MisorderedBlock`] when an end marker precedes its begin marker.
pub fn extract_models(lines: Vec<String>) -> Result<ModelSet, ExtractError> {
    let begins: Vec<usize> = positions(&lines, BEGIN_MARKER);
    let ends: Vec<usize> = positions(&lines, END_MARKER);

    if begins.is_empty() && ends.is_empty() {
        let atoms = lines
            .into_iter()
            .filter(|line| RecordType::of_line(line).is_some())
            .collect();
        return Ok(ModelSet::Single(atoms));
    }

    if begins.len() != ends.len() {
        return Err(ExtractError::Corrupted {
            begin: begins.len(),
            end: ends.len(),
        });
    }

    begins
        .iter()
        .zip(&ends)
        .enumerate()
        .map(|(i, (&begin, &end))| {
            if end < begin {
                return Err(ExtractError::MisorderedBlock { model: i + 1 });
            }
            Ok((i + 1, lines[begin + 1..end].to_vec()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ModelSet::Multiple)
}

fn positions(lines: &[String], marker: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(marker))
        .map(|(i, _)| i)
        .collect()
}
