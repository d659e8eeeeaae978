//! Settings file source: --settings <path> or ./prom-builder.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "prom-builder.toml";

/// Add the settings file to the builder. An explicit path is required to
/// exist; the default file is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    explicit: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };
    debug!(path = %path.display(), required, "Settings file source");
    builder.add_source(File::from(path).required(required))
}
