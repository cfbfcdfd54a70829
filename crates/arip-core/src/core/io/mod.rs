//! Provides input functionality for fixed-column PDB structure files.
//!
//! Files may be plain text or gzip-compressed. A file is read into lines, split into
//! one implicit model or several explicit `MODEL`/`ENDMDL` blocks, and each atom line
//! is accessed through a named-offset schema that is validated once per line.

pub mod loader;
pub mod models;
pub mod record;
