//! Service catalog
//!
//! Loads `sources.json`, the ordered list of services whose API specifications
//! are collected. The file is a JSON object with an `apis` array; each entry is
//! a service descriptor. Unknown fields are ignored and missing string fields
//! default to empty.

use crate::error::BootstrapError;
use crate::generator::{GeneratorCommand, GeneratorType};
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::collections::BTreeMap;
use std::path::Path;

/// One API to collect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Destination filename template; only the basename is used
    #[serde(default)]
    pub spec_path: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub source_repo: String,

    /// Service source tree (absolute or project-relative)
    #[serde(default)]
    pub local_path: String,

    /// Optional sub-path joined onto `local_path`
    #[serde(default)]
    pub service_path: String,

    #[serde(default)]
    pub generator_type: GeneratorType,

    /// Whitespace-separated command line, run without a shell
    #[serde(default)]
    pub generator_command: String,
}

impl ServiceDescriptor {
    /// A descriptor without a local path or a runnable command is skipped, not failed.
    pub fn is_skippable(&self) -> bool {
        self.local_path.is_empty() || self.command().is_none()
    }

    /// Parsed generator command, `None` when there is no executable token
    pub fn command(&self) -> Option<GeneratorCommand> {
        GeneratorCommand::parse(&self.generator_command)
    }
}

/// Ordered list of service descriptors, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub apis: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    /// Read and parse the catalog at `path`
    pub fn load(path: &Path) -> Result<Self, BootstrapError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            BootstrapError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&content).map_err(|source| match source.classify() {
            Category::Data => BootstrapError::ConfigShape {
                path: path.to_path_buf(),
                source,
            },
            Category::Io | Category::Syntax | Category::Eof => BootstrapError::ConfigNotJson {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.apis.iter()
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    /// Output filenames claimed by more than one processable descriptor,
    /// mapped to the ids that claim them in catalog order.
    pub fn output_collisions(&self) -> BTreeMap<String, Vec<String>> {
        let mut claims: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for api in self.apis.iter().filter(|api| !api.is_skippable()) {
            if let Some(name) = paths::output_file_name(&api.spec_path) {
                claims
                    .entry(name.to_string_lossy().into_owned())
                    .or_default()
                    .push(api.id.clone());
            }
        }
        claims.retain(|_, ids| ids.len() > 1);
        claims
    }
}
