//! Shared fixtures for integration tests.

use prom_builder::document::ConfigDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a target config, a manifest and fragments
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name`, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write a population manifest from `(path, skip_merge)` pairs.
    pub fn manifest(&self, entries: &[(&str, bool)]) -> PathBuf {
        let entries: Vec<_> = entries
            .iter()
            .map(|(path, skip)| serde_json::json!({ "skip_merge": skip, "path": path }))
            .collect();
        self.write(
            "populate.json",
            &serde_json::to_string_pretty(&entries).unwrap(),
        )
    }
}

pub fn yaml(contents: &str) -> ConfigDocument {
    ConfigDocument::from_yaml_str(contents).unwrap()
}

pub fn read_document(path: &Path) -> ConfigDocument {
    yaml(&fs::read_to_string(path).unwrap())
}
