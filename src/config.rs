//! Collector settings
//!
//! Optional tool settings read from `api-docs/config/collector.toml`. These
//! only tune the collector itself (currently logging); the service catalog is
//! loaded separately by [`crate::catalog`].

use crate::error::BootstrapError;
use crate::logging::LoggingConfig;
use crate::workspace::ProjectLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod settings_file;
}

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectorSettings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads [`CollectorSettings`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for a project; a missing settings file yields defaults.
    pub fn load(layout: &ProjectLayout) -> Result<CollectorSettings, BootstrapError> {
        Self::build(&layout.settings_file)
    }

    fn build(path: &Path) -> Result<CollectorSettings, BootstrapError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::settings_file::add_to_builder(builder, path)?;
        Ok(builder.build()?.try_deserialize()?)
    }
}
