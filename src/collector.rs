//! Collection driver
//!
//! Walks the catalog in order and runs each service through the pipeline:
//! resolve working directory, check it exists, run the generator, find the
//! artifact, publish it. A failing service is logged and the walk continues.

use crate::catalog::{ServiceCatalog, ServiceDescriptor};
use crate::error::CollectError;
use crate::generator::{self, CommandRunner, GeneratorCommand, SystemRunner};
use crate::paths;
use crate::publish;
use crate::workspace::ProjectLayout;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// What happened to one service
#[derive(Debug)]
pub enum ServiceOutcome {
    /// Spec written to the contained path
    Published(PathBuf),
    /// Descriptor had no local path or no generator command
    Skipped,
    Failed(CollectError),
}

/// Summary of a collection run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub processed: usize,
    pub published: Vec<String>,
    pub skipped: Vec<String>,
    /// Service id and error message, in catalog order
    pub failed: Vec<(String, String)>,
}

impl CollectionReport {
    fn record(&mut self, id: &str, outcome: &ServiceOutcome) {
        self.processed += 1;
        match outcome {
            ServiceOutcome::Published(_) => self.published.push(id.to_string()),
            ServiceOutcome::Skipped => self.skipped.push(id.to_string()),
            ServiceOutcome::Failed(e) => self.failed.push((id.to_string(), e.to_string())),
        }
    }
}

/// Runs services through the collection pipeline
pub struct Collector {
    layout: ProjectLayout,
    runner: Box<dyn CommandRunner>,
}

impl Collector {
    /// Collector that spawns real generator processes
    pub fn new(layout: ProjectLayout) -> Self {
        Self::with_runner(layout, Box::new(SystemRunner))
    }

    pub fn with_runner(layout: ProjectLayout, runner: Box<dyn CommandRunner>) -> Self {
        Self { layout, runner }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Process every catalog entry in order.
    ///
    /// The output directory must already exist.
    pub fn collect(&self, catalog: &ServiceCatalog) -> CollectionReport {
        for (file_name, ids) in catalog.output_collisions() {
            warn!(
                file = %file_name,
                services = ?ids,
                "Multiple services publish to the same file; the last one wins"
            );
        }

        let mut report = CollectionReport::default();
        for api in catalog.iter() {
            let outcome = self.collect_service(api);
            report.record(&api.id, &outcome);
        }

        info!(
            processed = report.processed,
            published = report.published.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Collected {} of {} API specifications",
            report.published.len(),
            report.processed
        );
        report
    }

    /// Process one descriptor, logging the outcome
    pub fn collect_service(&self, api: &ServiceDescriptor) -> ServiceOutcome {
        info!(service = %api.id, "Processing API: {}", api.name);

        let command = match api.command() {
            Some(command) if !api.is_skippable() => command,
            _ => {
                info!(
                    service = %api.id,
                    "Skipping {} - no local path or generator command specified", api.id
                );
                return ServiceOutcome::Skipped;
            }
        };

        match self.process_service(api, &command) {
            Ok(destination) => {
                info!(
                    service = %api.id,
                    destination = %destination.display(),
                    "Successfully processed {} API", api.id
                );
                ServiceOutcome::Published(destination)
            }
            Err(e) => {
                error!(
                    service = %api.id,
                    kind = e.kind(),
                    "Error processing API {}: {}", api.id, e
                );
                ServiceOutcome::Failed(e)
            }
        }
    }

    /// Run the pipeline for one service and return the published path
    fn process_service(
        &self,
        api: &ServiceDescriptor,
        command: &GeneratorCommand,
    ) -> Result<PathBuf, CollectError> {
        let working_dir = paths::anchor(
            &self.layout.root,
            &paths::resolve_working_dir(&api.local_path, &api.service_path),
        );
        generator::ensure_working_dir(&working_dir)?;

        info!(
            service = %api.id,
            command = %command,
            "Executing generator command for {} in {}",
            api.id,
            working_dir.display()
        );
        self.runner.run(command, &working_dir)?;

        let artifact = generator::find_artifact(&api.id, &api.generator_type, &working_dir)?;

        let file_name = paths::output_file_name(&api.spec_path)
            .ok_or_else(|| CollectError::InvalidSpecPath(api.spec_path.clone()))?;
        let destination = self.layout.output_path(file_name);
        publish::publish(&artifact, &destination)?;

        Ok(destination)
    }
}
