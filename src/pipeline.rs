//! Build pipeline
//!
//! Two modes:
//! - Env-only (`-` as the population source): resolve placeholders in the
//!   target file and write it back.
//! - Population: fragments from the manifest, then the target file as the
//!   final layer, merged, resolved once, written back over the target.

use crate::document::ConfigDocument;
use crate::environment::EnvironmentSnapshot;
use crate::error::BuildError;
use crate::fragment::resolve_fragments;
use crate::merge::{merge_layers, SequencePolicy};
use crate::population::load_population;
use crate::substitute::resolve_document;
use crate::writer::write_document;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Marker argument selecting env-only mode
pub const ENV_ONLY_MARKER: &str = "-";

/// Where fragments come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulationSource {
    EnvOnly,
    Manifest(PathBuf),
}

impl PopulationSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == ENV_ONLY_MARKER {
            PopulationSource::EnvOnly
        } else {
            PopulationSource::Manifest(PathBuf::from(arg))
        }
    }
}

/// Inputs of a single run
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Base configuration, rewritten in place
    pub target: PathBuf,
    pub source: PopulationSource,
    pub sequences: SequencePolicy,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Env-only run with no target file; nothing written
    Skipped,
    /// Target written from `layers` merged documents
    Written { layers: usize },
}

/// Execute a build.
pub fn run(request: &BuildRequest, env: &EnvironmentSnapshot) -> Result<BuildOutcome, BuildError> {
    match &request.source {
        PopulationSource::EnvOnly => run_env_only(&request.target, env),
        PopulationSource::Manifest(manifest) => {
            run_population(&request.target, manifest, request.sequences, env)
        }
    }
}

fn run_env_only(target: &Path, env: &EnvironmentSnapshot) -> Result<BuildOutcome, BuildError> {
    let base = match ConfigDocument::load(target) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            warn!(path = %target.display(), "Base YAML file not found");
            return Ok(BuildOutcome::Skipped);
        }
        Err(e) => return Err(e),
    };

    let resolved = resolve_document(base, env);
    write_document(target, &resolved)?;
    info!(path = %target.display(), "Resolved environment placeholders");
    Ok(BuildOutcome::Written { layers: 1 })
}

fn run_population(
    target: &Path,
    manifest: &Path,
    sequences: SequencePolicy,
    env: &EnvironmentSnapshot,
) -> Result<BuildOutcome, BuildError> {
    let specs = load_population(manifest)?;
    let mut layers = resolve_fragments(&specs)?;

    match ConfigDocument::load(target) {
        Ok(base) => layers.push(base),
        Err(e) if e.is_not_found() => {
            warn!(
                path = %target.display(),
                "Base YAML file not found; proceeding with population configs only"
            );
        }
        Err(e) => return Err(e),
    }

    let layer_count = layers.len();
    let merged = merge_layers(layers, sequences);
    let resolved = resolve_document(merged, env);
    write_document(target, &resolved)?;

    info!(
        path = %target.display(),
        manifest = %manifest.display(),
        layers = layer_count,
        "Merged configuration written"
    );
    Ok(BuildOutcome::Written {
        layers: layer_count,
    })
}
