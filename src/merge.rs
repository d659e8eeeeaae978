//! Layer merge logic
//!
//! Merge semantics, newer layer over older accumulator:
//! - Mappings: deep-merge by key (recursive only where the older value is a container)
//! - Sequences: concatenate, older elements first
//! - Scalars and mismatched kinds: newer wins, unless newer is null

use crate::document::ConfigDocument;
use serde::{Deserialize, Serialize};

/// How two sequences at the same path are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequencePolicy {
    /// Append every element of the newer sequence
    #[default]
    Concatenate,
    /// Append only elements not already present in the older sequence
    ConcatenateUnique,
}

/// Deep merge `newer` into `older`.
pub fn deep_merge(
    older: ConfigDocument,
    newer: ConfigDocument,
    policy: SequencePolicy,
) -> ConfigDocument {
    match (older, newer) {
        (ConfigDocument::Mapping(mut merged), ConfigDocument::Mapping(layer)) => {
            for (key, value) in layer {
                let value = match merged.remove(&key) {
                    Some(existing) if existing.is_container() => {
                        deep_merge(existing, value, policy)
                    }
                    _ => value,
                };
                merged.insert(key, value);
            }
            ConfigDocument::Mapping(merged)
        }

        (ConfigDocument::Sequence(mut merged), ConfigDocument::Sequence(layer)) => {
            match policy {
                SequencePolicy::Concatenate => merged.extend(layer),
                SequencePolicy::ConcatenateUnique => {
                    for item in layer {
                        if !merged.contains(&item) {
                            merged.push(item);
                        }
                    }
                }
            }
            ConfigDocument::Sequence(merged)
        }

        (older, newer) if newer.is_null() => older,

        (_, newer) => newer,
    }
}

/// Fold layers left to right over an empty mapping; the last layer has highest precedence.
pub fn merge_layers(layers: Vec<ConfigDocument>, policy: SequencePolicy) -> ConfigDocument {
    layers
        .into_iter()
        .fold(ConfigDocument::empty(), |acc, layer| {
            deep_merge(acc, layer, policy)
        })
}
