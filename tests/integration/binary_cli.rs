//! Integration tests for the collect-specs binary: project root discovery,
//! exit status, and log output.

use crate::integration::test_utils::{descriptor, write_artifact, TestProject};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collect-specs"))
        .current_dir(cwd)
        .args(args)
        .env_remove("SPEC_COLLECTOR_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[cfg(unix)]
#[test]
fn test_collects_from_project_root() {
    let project = TestProject::new();
    let service = project.service_dir("orders");
    write_artifact(&service, "dist/swagger.json", r#"{"swagger":"2.0"}"#);
    project.write_sources(vec![descriptor("orders", &service, "typescript", "true")]);

    let output = run_in(&project.layout.root, &[]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        fs::read_to_string(project.output("orders.json")).unwrap(),
        r#"{"swagger":"2.0"}"#
    );
    let log = stderr(&output);
    assert!(log.contains("Starting API specification collection process..."));
    assert!(log.contains("Processing API: orders API"));
    assert!(log.contains("Successfully processed orders API"));
    assert!(log.contains("API specification collection completed"));
}

#[test]
fn test_root_discovered_from_scripts_and_docs_dirs() {
    let project = TestProject::new();
    project.write_sources(vec![]);
    let docs = project.layout.root.join("api-docs");
    let scripts = docs.join("scripts");
    fs::create_dir_all(&scripts).unwrap();

    for cwd in [&docs, &scripts] {
        let output = run_in(cwd, &[]);
        assert!(
            output.status.success(),
            "run from {} failed: {}",
            cwd.display(),
            stderr(&output)
        );
    }
    assert!(project.layout.output_dir.is_dir());
}

#[test]
fn test_unknown_directory_is_fatal() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unable to determine project root"));
}

#[test]
fn test_missing_sources_is_fatal() {
    let project = TestProject::new();
    let output = run_in(&project.layout.root, &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("sources.json"));
}

#[cfg(unix)]
#[test]
fn test_service_failures_exit_zero() {
    let project = TestProject::new();
    let service = project.service_dir("flaky");
    let mut skipped = descriptor("skipped", &service, "typescript", "true");
    skipped["localPath"] = serde_json::json!("");
    project.write_sources(vec![
        descriptor("flaky", &service, "typescript", "false"),
        descriptor("odd", &service, "python", "true"),
        skipped,
    ]);

    let output = run_in(&project.layout.root, &[]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let log = stderr(&output);
    assert!(log.contains("Error processing API flaky"));
    assert!(log.contains("unsupported generator type: python"));
    assert!(log.contains("Skipping skipped - no local path or generator command specified"));
    assert!(project.output_files().is_empty());
}

#[cfg(unix)]
#[test]
fn test_generator_stdout_passes_through() {
    let project = TestProject::new();
    let service = project.service_dir("noisy");
    write_artifact(&service, "dist/openapi.json", "{}");
    // printf writes without a trailing newline
    project.write_sources(vec![descriptor(
        "noisy",
        &service,
        "typescript",
        "printf generator-progress-marker",
    )]);

    let output = run_in(&project.layout.root, &[]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generator-progress-marker"));
}

#[test]
fn test_sample_subcommand_writes_placeholders() {
    let project = TestProject::new();
    project.write_sources(vec![serde_json::json!({
        "id": "platform",
        "name": "Platform API",
        "specPath": "/api-specs/platform-api.json",
        "localPath": "/nonexistent",
        "generatorCommand": "false"
    })]);

    let output = run_in(&project.layout.root, &["sample"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let written = fs::read_to_string(project.output("platform-api.json")).unwrap();
    let spec: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(spec["info"]["title"], "Platform API (Sample)");
}

#[cfg(unix)]
#[test]
fn test_invalid_logging_settings_are_not_fatal() {
    let project = TestProject::new();
    let service = project.service_dir("orders");
    write_artifact(&service, "dist/swagger.json", "{}");
    project.write_sources(vec![descriptor("orders", &service, "typescript", "true")]);

    for body in ["[logging]\nformat = \"xml\"\n", "[logging]\noutput = \"file\"\n"] {
        fs::write(&project.layout.settings_file, body).unwrap();
        let _ = fs::remove_file(project.output("orders.json"));

        let output = run_in(&project.layout.root, &[]);

        assert!(output.status.success(), "settings {body:?}: {}", stderr(&output));
        let log = stderr(&output);
        assert!(log.contains("Ignoring collector settings"), "{log}");
        assert!(log.contains("Successfully processed orders API"));
        assert!(project.output("orders.json").is_file());
    }
}

#[test]
fn test_unparsable_log_filter_is_ignored() {
    let project = TestProject::new();
    project.write_sources(vec![]);

    let output = Command::new(env!("CARGO_BIN_EXE_collect-specs"))
        .current_dir(&project.layout.root)
        .env("SPEC_COLLECTOR_LOG", "spec_collector=loud")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stderr(&output).contains("API specification collection completed"));
}
