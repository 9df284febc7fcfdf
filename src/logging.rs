//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from the `[logging]` table of the collector settings; the filter can be
//! overridden from the environment for quick debugging.
//!
//! The default destination is stderr: generator output is passed straight
//! through to the terminal and the collector's own lines interleave with it.

use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive that overrides the configured level
pub const LOG_ENV: &str = "SPEC_COLLECTOR_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format, only when the stream is a terminal)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Check level, format and destination without installing a subscriber.
    ///
    /// The log file itself is only opened by [`init_logging`].
    pub fn validate(&self) -> Result<(), BootstrapError> {
        config_filter(self)?;
        check_format(&self.format)?;
        parse_destination(&self.output, self.file.as_ref())?;
        Ok(())
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    Stderr,
    File(PathBuf),
}

/// Initialize the global subscriber.
///
/// A valid `SPEC_COLLECTOR_LOG` filter takes precedence over the configured
/// level and module directives. Format and destination come from config only.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), BootstrapError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let filter = build_env_filter(config)?;
    check_format(&config.format)?;
    let destination = parse_destination(&config.output, config.file.as_ref())?;

    let (writer, ansi) = match destination {
        Destination::Stdout => (
            BoxMakeWriter::new(std::io::stdout),
            config.color && std::io::stdout().is_terminal(),
        ),
        Destination::Stderr => (
            BoxMakeWriter::new(std::io::stderr),
            config.color && std::io::stderr().is_terminal(),
        ),
        Destination::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(&path)?)), false),
    };

    let base_subscriber = Registry::default().with(filter);
    let result = if config.format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| BootstrapError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn open_log_file(path: &std::path::Path) -> Result<std::fs::File, BootstrapError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            BootstrapError::Logging(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BootstrapError::Logging(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Build environment filter from the override variable or config.
///
/// An unset or unparsable override is ignored.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, BootstrapError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    config_filter(config)
}

fn config_filter(config: &LoggingConfig) -> Result<EnvFilter, BootstrapError> {
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| {
        BootstrapError::Logging(format!("Invalid log level {:?}: {}", config.level, e))
    })?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| BootstrapError::Logging(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn check_format(format: &str) -> Result<(), BootstrapError> {
    match format {
        "json" | "text" => Ok(()),
        other => Err(BootstrapError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn parse_destination(output: &str, file: Option<&PathBuf>) -> Result<Destination, BootstrapError> {
    match output {
        "stdout" => Ok(Destination::Stdout),
        "stderr" => Ok(Destination::Stderr),
        "file" => file.cloned().map(Destination::File).ok_or_else(|| {
            BootstrapError::Logging("Log output 'file' requires logging.file".to_string())
        }),
        _ => Err(BootstrapError::Logging(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
