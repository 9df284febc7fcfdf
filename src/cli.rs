//! CLI domain: parse, route and output only.
//! No collection logic; the route table dispatches to the collector and sample writer.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::{RunContext, RunOutput};
