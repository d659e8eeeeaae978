//! Runs the prom-builder binary end to end.

use super::test_utils::{read_document, yaml, Workspace};
use std::process::Command;

fn prom_builder(ws: &Workspace) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_prom-builder"));
    command
        .current_dir(ws.dir.path())
        .env_remove("PROMBUILD_LOG")
        .env_remove("INTERVAL")
        .env_remove("SCRAPE_TARGET");
    command
}

#[test]
fn test_usage_error_without_population_source() {
    let ws = Workspace::new();
    let output = prom_builder(&ws).arg("prometheus.yml").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_population_mode_prints_confirmation() {
    let ws = Workspace::new();
    ws.write("a.yml", "scrape_configs:\n  - job_name: app\n");
    ws.write(
        "populate.json",
        r#"[{"skip_merge": false, "path": "a.yml"}, {"skip_merge": true, "path": "b.yml"}]"#,
    );
    ws.write(
        "prometheus.yml",
        "global:\n  scrape_interval: ${INTERVAL:15s}\nscrape_configs:\n  - job_name: base\n",
    );

    let output = prom_builder(&ws)
        .args(["prometheus.yml", "populate.json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Successfully processed prometheus.yml with merged configurations and environment variables."
    );
    assert_eq!(
        read_document(&ws.path("prometheus.yml")),
        yaml("global:\n  scrape_interval: 15s\nscrape_configs:\n  - job_name: app\n  - job_name: base\n")
    );
}

#[test]
fn test_dotenv_file_feeds_placeholders() {
    let ws = Workspace::new();
    ws.write(".env", "SCRAPE_TARGET=node-exporter:9100\n");
    ws.write(
        "prometheus.yml",
        "scrape_configs:\n  - static_configs:\n      - targets: ['${SCRAPE_TARGET}']\n",
    );

    let output = prom_builder(&ws)
        .args(["prometheus.yml", "-"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        read_document(&ws.path("prometheus.yml")),
        yaml("scrape_configs:\n  - static_configs:\n      - targets: ['node-exporter:9100']\n")
    );
}

#[test]
fn test_process_environment_beats_dotenv() {
    let ws = Workspace::new();
    ws.write(".env", "INTERVAL=1m\n");
    ws.write("prometheus.yml", "scrape_interval: ${INTERVAL}\n");

    let output = prom_builder(&ws)
        .env("INTERVAL", "")
        .args(["prometheus.yml", "-"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        read_document(&ws.path("prometheus.yml")),
        yaml("scrape_interval: ''\n")
    );
}

#[test]
fn test_env_only_missing_target_succeeds() {
    let ws = Workspace::new();
    let output = prom_builder(&ws)
        .args(["prometheus.yml", "-"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!ws.path("prometheus.yml").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_missing_manifest_fails() {
    let ws = Workspace::new();
    ws.write("prometheus.yml", "a: 1\n");
    let output = prom_builder(&ws)
        .args(["prometheus.yml", "populate.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("populate.json"));
}

#[test]
fn test_dedupe_flag() {
    let ws = Workspace::new();
    ws.write("a.yml", "rule_files: [a.rules]\n");
    ws.write("populate.json", r#"[{"skip_merge": false, "path": "a.yml"}]"#);
    ws.write("prometheus.yml", "rule_files: [a.rules, b.rules]\n");

    let output = prom_builder(&ws)
        .args(["--dedupe-sequences", "prometheus.yml", "populate.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        read_document(&ws.path("prometheus.yml")),
        yaml("rule_files: [a.rules, b.rules]\n")
    );
}
