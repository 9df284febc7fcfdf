//! Merge rules: defaults applied beneath every settings source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with the collector's defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}
