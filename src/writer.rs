//! Output writer: block-style YAML, overwriting the target file.

use crate::document::ConfigDocument;
use crate::error::BuildError;
use std::path::Path;
use tracing::{debug, error};

/// Serialize `document` and overwrite `path` with it.
pub fn write_document(path: &Path, document: &ConfigDocument) -> Result<(), BuildError> {
    let yaml = document.to_yaml_string().map_err(|source| {
        error!(path = %path.display(), error = %source, "Failed to serialize document");
        BuildError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    std::fs::write(path, yaml.as_bytes()).map_err(|source| {
        error!(path = %path.display(), error = %source, "Error writing to file");
        BuildError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), bytes = yaml.len(), "Wrote document");
    Ok(())
}
