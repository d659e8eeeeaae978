//! Process environment capture.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Immutable view of the environment, taken once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Capture the current process environment. Non-UTF-8 entries are omitted.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Result of looking for a dotenv file
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    Absent(PathBuf),
    Failed(PathBuf, dotenvy::Error),
}

impl DotenvStatus {
    /// Log the outcome. Dotenv loading runs before the subscriber exists, so
    /// the binary reports it once logging is up.
    pub fn report(&self) {
        match self {
            DotenvStatus::Loaded(path) => debug!(path = %path.display(), "Loaded dotenv file"),
            DotenvStatus::Absent(path) => debug!(path = %path.display(), "No dotenv file"),
            DotenvStatus::Failed(path, e) => {
                warn!(path = %path.display(), error = %e, "Failed to load dotenv file")
            }
        }
    }
}

/// Load a dotenv file into the process environment if it exists.
///
/// Variables already set in the process are left untouched.
pub fn load_dotenv(path: &Path) -> DotenvStatus {
    if !path.is_file() {
        return DotenvStatus::Absent(path.to_path_buf());
    }
    match dotenvy::from_path(path) {
        Ok(()) => DotenvStatus::Loaded(path.to_path_buf()),
        Err(e) => DotenvStatus::Failed(path.to_path_buf(), e),
    }
}
