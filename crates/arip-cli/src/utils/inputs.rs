use crate::error::{CliError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_ascii_lowercase()) else {
        return false;
    };
    extensions.iter().any(|ext| {
        let suffix = format!(".{}", ext.trim_start_matches('.').to_ascii_lowercase());
        name.len() > suffix.len() && name.ends_with(&suffix)
    })
}

/// Expands the given inputs into a list of structure files.
///
/// Files are taken as given. Directories contribute their direct children whose names
/// end in one of `extensions`, sorted by path.
pub fn expand_inputs(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            let entries = std::fs::read_dir(input)
                .with_context(|| format!("Failed to read directory {}", input.display()))?;
            for entry in entries {
                let path = entry
                    .with_context(|| format!("Failed to read directory {}", input.display()))?
                    .path();
                if path.is_file() && has_extension(&path, extensions) {
                    found.push(path);
                }
            }
            found.sort();
            debug!(
                "Found {} structure file(s) in {}",
                found.len(),
                input.display()
            );
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(CliError::Argument(format!(
                "Input path does not exist: {}",
                input.display()
            )));
        }
    }
    Ok(files)
}
