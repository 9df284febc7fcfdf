//! Settings file source: api-docs/config/collector.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Add the settings file at `path` to the builder.
///
/// A missing file contributes nothing.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        debug!(settings = %path.display(), "No collector settings file; using defaults");
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).required(false)))
}
