//! CLI parse: clap types for collect-specs. No behavior; definitions only.

use clap::{Parser, Subcommand};

/// Collect generated OpenAPI/Swagger specifications into api-docs/public/api-specs.
///
/// Run from the project root, from api-docs/, or from api-docs/scripts/.
/// Without a subcommand every service in api-docs/config/sources.json is
/// generated and published.
#[derive(Parser, Debug)]
#[command(name = "collect-specs", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write placeholder specs for every catalog entry without running generators
    Sample,
}
