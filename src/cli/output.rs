//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::BuildError;

/// Map a build error to the text printed on stderr.
pub fn map_error(e: &BuildError) -> String {
    format!("Error: {}", e)
}
