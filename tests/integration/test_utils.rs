//! Shared test utilities for integration tests
//!
//! Builds throwaway projects with the `api-docs/` layout and service source
//! trees containing pre-generated artifacts.

use serde_json::{json, Value};
use spec_collector::workspace::ProjectLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root with `api-docs/config` in place
pub struct TestProject {
    pub temp_dir: TempDir,
    pub layout: ProjectLayout,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path().join("project"));
        fs::create_dir_all(layout.sources_file.parent().unwrap()).unwrap();
        Self { temp_dir, layout }
    }

    /// Write `sources.json` with the given descriptor objects
    pub fn write_sources(&self, apis: Vec<Value>) {
        let body = serde_json::to_string_pretty(&json!({ "apis": apis })).unwrap();
        fs::write(&self.layout.sources_file, body).unwrap();
    }

    /// Create a service tree outside the project and return its path
    pub fn service_dir(&self, name: &str) -> PathBuf {
        let dir = self.temp_dir.path().join("services").join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn output(&self, file_name: &str) -> PathBuf {
        self.layout.output_path(file_name)
    }

    pub fn output_files(&self) -> Vec<String> {
        if !self.layout.output_dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&self.layout.output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write `content` at `rel` under `root`, creating parents
pub fn write_artifact(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Descriptor JSON for a service in `dir`
pub fn descriptor(id: &str, dir: &Path, generator_type: &str, command: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{} API", id),
        "specPath": format!("{}.json", id),
        "localPath": dir.to_string_lossy(),
        "generatorType": generator_type,
        "generatorCommand": command,
    })
}
