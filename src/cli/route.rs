//! CLI route: run context and the route table from commands to domain services.

use crate::catalog::ServiceCatalog;
use crate::cli::parse::Commands;
use crate::collector::{CollectionReport, Collector};
use crate::error::BootstrapError;
use crate::generator::CommandRunner;
use crate::sample::{self, SampleReport};
use crate::workspace::ProjectLayout;
use tracing::info;

/// What a command produced
#[derive(Debug)]
pub enum RunOutput {
    Collected(CollectionReport),
    Sampled(SampleReport),
}

/// Runtime context for CLI execution: the discovered project layout and the
/// runner used for generators.
pub struct RunContext {
    collector: Collector,
}

impl RunContext {
    /// Context that spawns real generator processes
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            collector: Collector::new(layout),
        }
    }

    /// Context with a substitute generator runner
    pub fn with_runner(layout: ProjectLayout, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            collector: Collector::with_runner(layout, runner),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        self.collector.layout()
    }

    /// Load the catalog, prepare the output directory, and run `command`.
    ///
    /// Only bootstrap failures are returned; per-service failures are in the report.
    pub fn execute(&self, command: Option<&Commands>) -> Result<RunOutput, BootstrapError> {
        let layout = self.layout();
        let catalog = ServiceCatalog::load(&layout.sources_file)?;
        info!(
            sources = %layout.sources_file.display(),
            services = catalog.len(),
            "Loaded sources configuration"
        );
        layout.ensure_output_dir()?;

        match command {
            None => Ok(RunOutput::Collected(self.collector.collect(&catalog))),
            Some(Commands::Sample) => {
                info!("Creating sample API specifications...");
                Ok(RunOutput::Sampled(sample::write_sample_specs(&catalog, layout)))
            }
        }
    }
}
