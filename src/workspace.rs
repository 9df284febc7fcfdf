//! Project layout
//!
//! Locates the project root from the current directory and derives the fixed
//! locations the collector reads from and writes to:
//!
//! - `api-docs/config/sources.json`: service catalog
//! - `api-docs/config/collector.toml`: optional collector settings
//! - `api-docs/public/api-specs/`: output directory

use crate::error::BootstrapError;
use std::path::{Path, PathBuf};

const DOCS_DIR: &str = "api-docs";
const SCRIPTS_DIR: &str = "scripts";

/// Filesystem locations derived from a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub sources_file: PathBuf,
    pub settings_file: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let docs = root.join(DOCS_DIR);
        Self {
            sources_file: docs.join("config").join("sources.json"),
            settings_file: docs.join("config").join("collector.toml"),
            output_dir: docs.join("public").join("api-specs"),
            root,
        }
    }

    /// Layout for the project containing `cwd`
    pub fn discover(cwd: &Path) -> Result<Self, BootstrapError> {
        find_project_root(cwd).map(Self::new)
    }

    /// Layout for the project containing the process's current directory
    pub fn from_current_dir() -> Result<Self, BootstrapError> {
        let cwd = std::env::current_dir().map_err(BootstrapError::CurrentDir)?;
        Self::discover(dunce::simplified(&cwd))
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<(), BootstrapError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| BootstrapError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Destination for a published spec named `file_name`
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Resolve the project root from `cwd`:
///
/// 1. `.../api-docs/scripts` resolves to the grandparent
/// 2. `.../api-docs` resolves to the parent
/// 3. a directory containing `api-docs/` is the root itself
pub fn find_project_root(cwd: &Path) -> Result<PathBuf, BootstrapError> {
    if cwd.ends_with(Path::new(DOCS_DIR).join(SCRIPTS_DIR)) {
        if let Some(root) = cwd.parent().and_then(Path::parent) {
            return Ok(root.to_path_buf());
        }
    }

    if cwd.ends_with(DOCS_DIR) {
        if let Some(root) = cwd.parent() {
            return Ok(root.to_path_buf());
        }
    }

    if cwd.join(DOCS_DIR).exists() {
        return Ok(cwd.to_path_buf());
    }

    Err(BootstrapError::ProjectRootNotFound(cwd.to_path_buf()))
}
