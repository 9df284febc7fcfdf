//! Artifact discovery
//!
//! Each generator type emits its spec to one of a few conventional locations.
//! Candidates are probed in table order and the first regular file wins; the
//! contents are not inspected here.

use crate::error::CollectError;
use crate::generator::GeneratorType;
use std::path::{Path, PathBuf};
use tracing::debug;

const TYPESCRIPT_CANDIDATES: &[&[&str]] = &[
    &["dist", "swagger.json"],
    &["dist", "openapi.json"],
    &["build", "swagger.json"],
    &["build", "openapi.json"],
];

const KOTLIN_CANDIDATES: &[&[&str]] = &[
    &["build", "openapi", "openapi.json"],
    &["build", "swagger", "swagger.json"],
    &["build", "resources", "main", "openapi.json"],
];

/// Ordered candidate artifact paths, relative to the working directory.
pub fn candidate_paths(generator_type: &GeneratorType) -> Result<Vec<PathBuf>, CollectError> {
    let table = match generator_type {
        GeneratorType::TypeScript => TYPESCRIPT_CANDIDATES,
        GeneratorType::Kotlin => KOTLIN_CANDIDATES,
        GeneratorType::Unsupported(tag) => {
            return Err(CollectError::UnsupportedGeneratorType(tag.clone()))
        }
    };
    Ok(table
        .iter()
        .map(|segments| segments.iter().collect::<PathBuf>())
        .collect())
}

/// Locate the artifact a generator produced under `working_dir`.
///
/// `service_id` only labels the not-found error.
pub fn find_artifact(
    service_id: &str,
    generator_type: &GeneratorType,
    working_dir: &Path,
) -> Result<PathBuf, CollectError> {
    for candidate in candidate_paths(generator_type)? {
        let path = working_dir.join(&candidate);
        if path.is_file() {
            debug!(service = service_id, artifact = %path.display(), "Found generated spec");
            return Ok(path);
        }
    }
    Err(CollectError::ArtifactNotFound(service_id.to_string()))
}
