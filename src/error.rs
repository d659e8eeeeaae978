//! Error types for the configuration build pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning YAML text into a [`ConfigDocument`](crate::document::ConfigDocument)
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("Unsupported YAML tag: {0}")]
    UnsupportedTag(String),
}

/// Pipeline errors. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to read population file {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse population file {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Population file {path:?} must contain a JSON array, found {found}")]
    ManifestShape { path: PathBuf, found: String },

    #[error("No path found in configuration: {entry}")]
    MissingFragmentPath { entry: String },

    #[error("Invalid fragment pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to load {path:?}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Failed to serialize document for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Error writing to file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl BuildError {
    /// True when the failure is a document that does not exist on disk.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BuildError::Document {
                source: DocumentError::Io(err),
                ..
            } if err.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl From<config::ConfigError> for BuildError {
    fn from(err: config::ConfigError) -> Self {
        BuildError::Settings(err.to_string())
    }
}
