//! CLI output: error mapping from bootstrap errors to the message shown on exit.

use crate::error::BootstrapError;

/// Map a fatal error to a single line for stderr.
pub fn map_error(e: &BootstrapError) -> String {
    format!("Error: {}", e)
}
