use nalgebra::Point3;
use thiserror::Error;

/// A half-open byte range of one fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub start: usize,
    pub end: usize,
    /// 1-based inclusive column range as printed in the PDB format guide.
    pub columns: &'static str,
}

impl Field {
    const fn new(start: usize, end: usize, columns: &'static str) -> Self {
        Self {
            start,
            end,
            columns,
        }
    }
}

pub const RECORD_TYPE: Field = Field::new(0, 6, "1-6");
pub const ATOM_NAME: Field = Field::new(12, 16, "13-16");
pub const ALT_LOC: Field = Field::new(16, 17, "17");
pub const RESIDUE_NAME: Field = Field::new(17, 20, "18-20");
pub const CHAIN_ID: Field = Field::new(21, 22, "22");
pub const RESIDUE_NUMBER: Field = Field::new(22, 26, "23-26");
pub const X: Field = Field::new(30, 38, "31-38");
pub const Y: Field = Field::new(38, 46, "39-46");
pub const Z: Field = Field::new(46, 54, "47-54");
pub const ELEMENT: Field = Field::new(76, 78, "77-78");

/// Every field above must lie inside an atom record.
pub const MIN_RECORD_LEN: usize = ELEMENT.end;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Atom,
    Hetatm,
}

impl RecordType {
    /// Identifies the atom record type of a raw line, if it has one.
    pub fn of_line(line: &str) -> Option<Self> {
        if line.starts_with("ATOM") {
            Some(Self::Atom)
        } else if line.starts_with("HETATM") {
            Some(Self::Hetatm)
        } else {
            None
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error(
        "Line is too short for ATOM/HETATM record (must be at least {required} chars, found {found}): '{line}'"
    )]
    Malformed {
        required: usize,
        found: usize,
        line: String,
    },
    #[error("Atom record contains non-ASCII characters: '{line}'")]
    NonAscii { line: String },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
}

/// A validated, borrowed view over one ATOM/HETATM line.
///
/// Construction checks the line once against the schema, after which the textual
/// accessors cannot fail. Numeric fields are parsed on demand so that lines rejected
/// by the admissibility filter never need well-formed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordView<'a> {
    line: &'a str,
}

impl<'a> RecordView<'a> {
    /// Validates `line` against the atom record schema.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonAscii`] if the line is not plain ASCII and
    /// [`RecordError::Malformed`] if it is shorter than [`MIN_RECORD_LEN`].
    pub fn new(line: &'a str) -> Result<Self, RecordError> {
        if !line.is_ascii() {
            return Err(RecordError::NonAscii {
                line: line.to_string(),
            });
        }
        if line.len() < MIN_RECORD_LEN {
            return Err(RecordError::Malformed {
                required: MIN_RECORD_LEN,
                found: line.len(),
                line: line.to_string(),
            });
        }
        Ok(Self { line })
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    fn raw(&self, field: Field) -> &'a str {
        &self.line[field.start..field.end]
    }

    fn char_at(&self, field: Field) -> char {
        self.line.as_bytes()[field.start] as char
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::of_line(self.line)
    }

    pub fn atom_name(&self) -> &'a str {
        self.raw(ATOM_NAME).trim()
    }

    pub fn alt_loc(&self) -> char {
        self.char_at(ALT_LOC)
    }

    /// The residue name field exactly as written, padding included.
    pub fn raw_residue_name(&self) -> &'a str {
        self.raw(RESIDUE_NAME)
    }

    pub fn residue_name(&self) -> &'a str {
        self.raw(RESIDUE_NAME).trim()
    }

    pub fn chain_id(&self) -> char {
        self.char_at(CHAIN_ID)
    }

    pub fn element(&self) -> &'a str {
        self.raw(ELEMENT).trim()
    }

    pub fn residue_number(&self) -> Result<i32, RecordError> {
        let value = self.raw(RESIDUE_NUMBER).trim();
        value.parse().map_err(|_| RecordError::InvalidInt {
            columns: RESIDUE_NUMBER.columns,
            value: value.to_string(),
        })
    }

    fn coordinate(&self, field: Field) -> Result<f64, RecordError> {
        let value = self.raw(field).trim();
        value.parse().map_err(|_| RecordError::InvalidFloat {
            columns: field.columns,
            value: value.to_string(),
        })
    }

    pub fn position(&self) -> Result<Point3<f64>, RecordError> {
        Ok(Point3::new(
            self.coordinate(X)?,
            self.coordinate(Y)?,
            self.coordinate(Z)?,
        ))
    }
}
