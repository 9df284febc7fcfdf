//! collect-specs binary
//!
//! Collects generated API specifications for every service listed in
//! api-docs/config/sources.json.

use clap::Parser;
use spec_collector::cli::{map_error, Cli, RunContext, RunOutput};
use spec_collector::config::ConfigLoader;
use spec_collector::error::BootstrapError;
use spec_collector::logging::{init_logging, LoggingConfig};
use spec_collector::workspace::ProjectLayout;
use std::process;
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse();

    let layout = ProjectLayout::from_current_dir();

    // Settings live under the project root, so logging falls back to defaults
    // when the root cannot be found.
    let (logging_config, settings_error) = build_logging_config(layout.as_ref().ok());

    // Logging problems are never fatal: fall back to defaults and keep going.
    let logging_error = match init_logging(Some(&logging_config)) {
        Ok(()) => None,
        Err(e) => {
            if let Err(fallback) = init_logging(None) {
                eprintln!("Failed to initialize logging: {}", fallback);
            }
            Some(e)
        }
    };

    info!("Starting API specification collection process...");
    if let Some(e) = settings_error {
        warn!("Ignoring collector settings: {}", e);
    }
    if let Some(e) = logging_error {
        warn!("Ignoring logging settings: {}", e);
    }

    let layout = match layout {
        Ok(layout) => layout,
        Err(e) => {
            error!("Error finding project root: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };
    info!(root = %layout.root.display(), "Project root found");

    let context = RunContext::new(layout);
    match context.execute(cli.command.as_ref()) {
        Ok(RunOutput::Collected(_)) => info!("API specification collection completed"),
        Ok(RunOutput::Sampled(_)) => info!("Sample API specifications created successfully"),
        Err(e) => {
            error!("Collection aborted: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Logging configuration from the settings file, or defaults plus the reason
/// the settings were rejected.
fn build_logging_config(layout: Option<&ProjectLayout>) -> (LoggingConfig, Option<BootstrapError>) {
    let loaded = match layout.map(ConfigLoader::load) {
        Some(Ok(settings)) => settings.logging.validate().map(|()| settings.logging),
        Some(Err(e)) => Err(e),
        None => Ok(LoggingConfig::default()),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (LoggingConfig::default(), Some(e)),
    }
}
