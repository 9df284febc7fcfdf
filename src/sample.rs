//! Placeholder specifications
//!
//! Writes a small OpenAPI 3.0.0 document for every catalog entry so the
//! documentation site can be developed without running any generator.

use crate::catalog::{ServiceCatalog, ServiceDescriptor};
use crate::paths;
use crate::workspace::ProjectLayout;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{error, info};

/// Result of a sample run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<String>,
    /// Destination and error message
    pub errors: Vec<(PathBuf, String)>,
}

/// Build the placeholder document for one API
pub fn sample_spec(id: &str, name: &str) -> Value {
    let example_path = format!("/{}/example", id);
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": format!("{} (Sample)", name),
            "description": format!("Sample API specification for {}", name),
            "version": "1.0.0"
        },
        "servers": [
            { "url": "https://api.example.com/v1", "description": "Production server" }
        ],
        "paths": {
            "/hello": {
                "get": {
                    "summary": "Hello World endpoint",
                    "description": "Returns a simple greeting message",
                    "operationId": "getHello",
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HelloResponse" }
                                }
                            }
                        }
                    }
                }
            },
            (example_path): {
                "get": {
                    "summary": format!("Example {} endpoint", name),
                    "description": format!("Demonstrates a sample endpoint for {}", name),
                    "operationId": format!("get{}Example", capitalize(id)),
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ExampleResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "HelloResponse": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string", "example": "Hello, world!" },
                        "timestamp": { "type": "string", "format": "date-time" }
                    }
                },
                "ExampleResponse": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "format": "uuid" },
                        "name": { "type": "string", "example": "Example resource" },
                        "createdAt": { "type": "string", "format": "date-time" }
                    }
                }
            }
        }
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_sampleable(api: &ServiceDescriptor) -> bool {
    !api.id.is_empty() && !api.name.is_empty() && !api.spec_path.is_empty()
}

/// Write a placeholder spec for every entry with an id, name and spec path.
///
/// The output directory must already exist.
pub fn write_sample_specs(catalog: &ServiceCatalog, layout: &ProjectLayout) -> SampleReport {
    let mut report = SampleReport::default();

    for api in catalog.iter() {
        let file_name = match paths::output_file_name(&api.spec_path) {
            Some(name) if is_sampleable(api) => name,
            _ => {
                error!(service = %api.id, "Skipping invalid API entry: {}", api.id);
                report.skipped.push(api.id.clone());
                continue;
            }
        };

        let destination = layout.output_path(file_name);
        let written = serde_json::to_string_pretty(&sample_spec(&api.id, &api.name))
            .map_err(|e| e.to_string())
            .and_then(|body| std::fs::write(&destination, body).map_err(|e| e.to_string()));

        match written {
            Ok(()) => {
                info!(service = %api.id, "Created sample API spec: {}", destination.display());
                report.created.push(destination);
            }
            Err(e) => {
                error!(service = %api.id, "Failed to write sample spec {}: {}", destination.display(), e);
                report.errors.push((destination, e));
            }
        }
    }

    report
}
