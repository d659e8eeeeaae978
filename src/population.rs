//! Population manifest
//!
//! The population file is a JSON array of `{"skip_merge": bool, "path": string}`
//! objects naming the fragments to fold into the target configuration.
//!
//! Loading stops at the first entry that lacks either key and returns what was
//! collected up to that point. Existing population files rely on this, so it is
//! reported as a warning rather than an error.

use crate::error::BuildError;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

const REQUIRED_KEYS: [&str; 2] = ["skip_merge", "path"];

/// One validated manifest entry
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpec {
    /// Literal path or glob pattern; `None` when the entry's value is not a usable string
    pub path: Option<String>,
    pub skip_merge: bool,
    entry: String,
}

impl FragmentSpec {
    pub fn new(path: impl Into<String>, skip_merge: bool) -> Self {
        let path = path.into();
        let entry = serde_json::json!({ "skip_merge": skip_merge, "path": path.as_str() }).to_string();
        Self {
            path: Some(path),
            skip_merge,
            entry,
        }
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let path = object
            .get("path")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        let skip_merge = object.get("skip_merge").map(is_truthy).unwrap_or(false);
        Self {
            path,
            skip_merge,
            entry: Value::Object(object.clone()).to_string(),
        }
    }

    /// Compact JSON text of the manifest entry, for diagnostics.
    pub fn entry(&self) -> &str {
        &self.entry
    }
}

/// Read and validate a population file.
pub fn load_population(path: &Path) -> Result<Vec<FragmentSpec>, BuildError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BuildError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|source| BuildError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(BuildError::ManifestShape {
                path: path.to_path_buf(),
                found: json_kind(&other).to_string(),
            })
        }
    };

    let specs = collect_specs(&entries);
    debug!(
        path = %path.display(),
        entries = entries.len(),
        accepted = specs.len(),
        "Loaded population file"
    );
    Ok(specs)
}

/// Validate entries in order, truncating at the first invalid one.
pub fn collect_specs(entries: &[Value]) -> Vec<FragmentSpec> {
    let mut specs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(object) = entry.as_object().filter(|o| has_required_keys(o)) else {
            warn!(
                index,
                entry = %entry,
                dropped = entries.len() - index,
                "Population entry is missing skip_merge or path; ignoring it and all later entries"
            );
            break;
        };
        specs.push(FragmentSpec::from_object(object));
    }
    specs
}

fn has_required_keys(object: &Map<String, Value>) -> bool {
    REQUIRED_KEYS.iter().all(|key| object.contains_key(*key))
}

/// JSON truthiness: false, null, zero and empty values are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
