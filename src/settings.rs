//! Settings
//!
//! The builder's own settings (logging, merge policy), layered with the
//! `config` crate: built-in defaults, then an optional TOML settings file, then
//! `PROMBUILD_*` environment variables. CLI flags are applied on top by the
//! binary.

use crate::error::BuildError;
use crate::logging::LoggingConfig;
use crate::merge::SequencePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;
mod sources;

pub use sources::settings_file::DEFAULT_SETTINGS_FILE;

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub merge: MergeSettings,
}

/// Merge behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Sequence combination policy
    #[serde(default)]
    pub sequences: SequencePolicy,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; without one,
    /// `prom-builder.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, BuildError> {
        let builder = defaults::builder_with_defaults()?;
        let builder = sources::settings_file::add_to_builder(builder, path);
        let builder = sources::environment::add_to_builder(builder);
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
