//! Env-only builds: the target file is the only document.

use super::test_utils::{read_document, yaml, Workspace};
use prom_builder::environment::EnvironmentSnapshot;
use prom_builder::merge::SequencePolicy;
use prom_builder::pipeline::{run, BuildOutcome, BuildRequest, PopulationSource};
use std::path::Path;

fn request(target: &Path) -> BuildRequest {
    BuildRequest {
        target: target.to_path_buf(),
        source: PopulationSource::from_arg("-"),
        sequences: SequencePolicy::Concatenate,
    }
}

#[test]
fn test_resolves_target_in_place() {
    let ws = Workspace::new();
    let target = ws.write(
        "prometheus.yml",
        "global:\n  scrape_interval: ${INTERVAL:15s}\n  external_labels:\n    region: ${REGION}\n    cluster: ${CLUSTER}\nscrape_configs: [{job_name: node}]\n",
    );
    let env: EnvironmentSnapshot = [("REGION", "eu-west-1")].into_iter().collect();

    let outcome = run(&request(&target), &env).unwrap();

    assert_eq!(outcome, BuildOutcome::Written { layers: 1 });
    assert_eq!(
        read_document(&target),
        yaml(
            "global:\n  scrape_interval: 15s\n  external_labels:\n    region: eu-west-1\n    cluster: ${CLUSTER}\nscrape_configs: [{job_name: node}]\n"
        )
    );
}

#[test]
fn test_sequences_not_duplicated() {
    let ws = Workspace::new();
    let target = ws.write("prometheus.yml", "rule_files: [a.rules, b.rules]\n");

    run(&request(&target), &EnvironmentSnapshot::default()).unwrap();
    run(&request(&target), &EnvironmentSnapshot::default()).unwrap();

    assert_eq!(
        read_document(&target),
        yaml("rule_files: [a.rules, b.rules]\n")
    );
}

#[test]
fn test_missing_target_is_skipped() {
    let ws = Workspace::new();
    let target = ws.path("prometheus.yml");

    let outcome = run(&request(&target), &EnvironmentSnapshot::default()).unwrap();

    assert_eq!(outcome, BuildOutcome::Skipped);
    assert!(!target.exists());
}
