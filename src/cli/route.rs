//! CLI route: turns parsed arguments into a build request and runs it.

use crate::cli::Cli;
use crate::environment::EnvironmentSnapshot;
use crate::error::BuildError;
use crate::merge::SequencePolicy;
use crate::pipeline::{self, BuildOutcome, BuildRequest, PopulationSource};
use crate::settings::Settings;
use tracing::debug;

/// Everything a run needs besides its arguments
pub struct RunContext {
    settings: Settings,
    env: EnvironmentSnapshot,
}

impl RunContext {
    pub fn new(settings: Settings, env: EnvironmentSnapshot) -> Self {
        Self { settings, env }
    }

    /// Build the request for `cli`; the --dedupe-sequences flag overrides settings.
    pub fn request(&self, cli: &Cli) -> BuildRequest {
        let sequences = if cli.dedupe_sequences {
            SequencePolicy::ConcatenateUnique
        } else {
            self.settings.merge.sequences
        };
        BuildRequest {
            target: cli.target_yaml_file.clone(),
            source: PopulationSource::from_arg(&cli.population_source),
            sequences,
        }
    }

    /// Run the build. Returns the confirmation line to print, if any.
    pub fn execute(&self, cli: &Cli) -> Result<Option<String>, BuildError> {
        let request = self.request(cli);
        debug!(
            path = %request.target.display(),
            source = ?request.source,
            sequences = ?request.sequences,
            variables = self.env.len(),
            "Executing build"
        );

        let outcome = pipeline::run(&request, &self.env)?;
        Ok(match (&request.source, outcome) {
            (PopulationSource::Manifest(_), BuildOutcome::Written { .. }) => Some(format!(
                "Successfully processed {} with merged configurations and environment variables.",
                request.target.display()
            )),
            _ => None,
        })
    }
}
