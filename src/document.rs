//! Configuration document tree
//!
//! Every layer of the build (fragments, the base file, the merged result) is a
//! [`ConfigDocument`]: a closed tree of mappings, sequences and scalars. YAML is
//! parsed with `serde_yaml` and converted into this shape at load time so the
//! rest of the pipeline never sees tags or non-string keys.

use crate::error::{BuildError, DocumentError};
use serde::ser::{Serialize, Serializer};
use serde_yaml::{Number, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Leaf value of a document
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// Configuration document tree
///
/// Mapping keys are kept sorted, which makes serialized output deterministic
/// regardless of the order in which layers contributed them.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDocument {
    Mapping(BTreeMap<String, ConfigDocument>),
    Sequence(Vec<ConfigDocument>),
    Scalar(Scalar),
}

impl ConfigDocument {
    /// An empty mapping, the starting accumulator of every merge.
    pub fn empty() -> Self {
        ConfigDocument::Mapping(BTreeMap::new())
    }

    pub fn null() -> Self {
        ConfigDocument::Scalar(Scalar::Null)
    }

    pub fn string(value: impl Into<String>) -> Self {
        ConfigDocument::Scalar(Scalar::String(value.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigDocument::Scalar(Scalar::Null))
    }

    /// True for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ConfigDocument::Mapping(_) | ConfigDocument::Sequence(_)
        )
    }

    /// Look up a key when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&ConfigDocument> {
        match self {
            ConfigDocument::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigDocument::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigDocument]> {
        match self {
            ConfigDocument::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Parse YAML text. An empty or `null` document becomes an empty mapping.
    pub fn from_yaml_str(contents: &str) -> Result<Self, DocumentError> {
        if is_blank_document(contents) {
            return Ok(ConfigDocument::empty());
        }
        let mut value: Value = serde_yaml::from_str(contents)?;
        value.apply_merge()?;
        if value.is_null() {
            return Ok(ConfigDocument::empty());
        }
        ConfigDocument::try_from(value)
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let contents = std::fs::read_to_string(path).map_err(|e| BuildError::Document {
            path: path.to_path_buf(),
            source: DocumentError::Io(e),
        })?;
        let document = Self::from_yaml_str(&contents).map_err(|source| BuildError::Document {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded document");
        Ok(document)
    }

    /// Serialize to block-style YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl TryFrom<Value> for ConfigDocument {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let document = match value {
            Value::Null => ConfigDocument::Scalar(Scalar::Null),
            Value::Bool(b) => ConfigDocument::Scalar(Scalar::Bool(b)),
            Value::Number(n) => ConfigDocument::Scalar(Scalar::Number(n)),
            Value::String(s) => ConfigDocument::Scalar(Scalar::String(s)),
            Value::Sequence(items) => ConfigDocument::Sequence(
                items
                    .into_iter()
                    .map(ConfigDocument::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (key, value) in map {
                    entries.insert(mapping_key(key)?, ConfigDocument::try_from(value)?);
                }
                ConfigDocument::Mapping(entries)
            }
            Value::Tagged(tagged) => {
                return Err(DocumentError::UnsupportedTag(tagged.tag.to_string()))
            }
        };
        Ok(document)
    }
}

/// Only whitespace, comments and document markers.
fn is_blank_document(contents: &str) -> bool {
    contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Scalar keys keep their textual form; anything else cannot be a key.
fn mapping_key(key: Value) -> Result<String, DocumentError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DocumentError::UnsupportedKey(format!("{:?}", other))),
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigDocument::Mapping(map) => serializer.collect_map(map),
            ConfigDocument::Sequence(items) => serializer.collect_seq(items),
            ConfigDocument::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}
