//! Error types for the spec collector.
//!
//! Two families: `BootstrapError` stops the whole run before any service is
//! touched, `CollectError` is scoped to a single service and never escapes the
//! driver loop.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal errors raised while preparing a run
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("unable to determine project root from directory: {0}")]
    ProjectRootNotFound(PathBuf),

    #[error("unable to read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read sources configuration {path:?}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sources configuration {path:?} is not valid JSON: {source}")]
    ConfigNotJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("sources configuration {path:?} has an unexpected shape: {source}")]
    ConfigShape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for BootstrapError {
    fn from(err: config::ConfigError) -> Self {
        BootstrapError::Settings(err.to_string())
    }
}

/// Errors that fail a single service
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("local path does not exist: {0}")]
    WorkingDirMissing(PathBuf),

    #[error("generator command failed: {program}: {source}")]
    GeneratorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator command failed: {program}: {status}")]
    GeneratorExit { program: String, status: ExitStatus },

    #[error("unsupported generator type: {0}")]
    UnsupportedGeneratorType(String),

    #[error("could not find generated spec file for {0}")]
    ArtifactNotFound(String),

    #[error("spec path {0:?} has no file name")]
    InvalidSpecPath(String),

    #[error("error copying spec file: cannot read {path:?}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error copying spec file: cannot write {path:?}: {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read back published spec {path:?}: {source}")]
    DestinationUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error copying spec file to {path:?}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in spec file {path:?}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CollectError {
    /// Short machine-friendly tag used in structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CollectError::WorkingDirMissing(_) => "working_dir_missing",
            CollectError::GeneratorSpawn { .. } => "generator_spawn",
            CollectError::GeneratorExit { .. } => "generator_exit",
            CollectError::UnsupportedGeneratorType(_) => "unsupported_generator_type",
            CollectError::ArtifactNotFound(_) => "artifact_not_found",
            CollectError::InvalidSpecPath(_) => "invalid_spec_path",
            CollectError::SourceUnreadable { .. }
            | CollectError::DestinationUnwritable { .. }
            | CollectError::Copy { .. } => "copy_io",
            CollectError::DestinationUnreadable { .. } => "destination_unreadable",
            CollectError::InvalidJson { .. } => "invalid_json",
        }
    }
}
