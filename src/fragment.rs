//! Fragment resolution
//!
//! Turns validated population entries into loaded documents, in manifest
//! order. Skipped entries are never opened. A glob that matches nothing is a
//! warning; a literal path that cannot be loaded aborts the build.

pub mod pattern;

use crate::document::ConfigDocument;
use crate::error::BuildError;
use crate::population::FragmentSpec;
use std::path::Path;
use tracing::{debug, warn};

/// Load every fragment named by `specs`.
pub fn resolve_fragments(specs: &[FragmentSpec]) -> Result<Vec<ConfigDocument>, BuildError> {
    let mut fragments = Vec::new();
    for spec in specs {
        if spec.skip_merge {
            debug!(entry = spec.entry(), "Skipping fragment");
            continue;
        }
        let path = spec
            .path
            .as_deref()
            .ok_or_else(|| BuildError::MissingFragmentPath {
                entry: spec.entry().to_string(),
            })?;

        if pattern::is_pattern(path) {
            let matches = pattern::expand(path)?;
            if matches.is_empty() {
                warn!(pattern = path, "No files found for pattern");
            }
            for file in matches {
                fragments.push(ConfigDocument::load(&file)?);
            }
        } else {
            fragments.push(ConfigDocument::load(Path::new(path))?);
        }
    }
    Ok(fragments)
}
