//! Spec Collector: API specification aggregation
//!
//! Runs each service's OpenAPI/Swagger generator in its own source tree,
//! finds the emitted JSON artifact, and publishes it under a stable filename
//! in the documentation site's output directory.

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod paths;
pub mod publish;
pub mod sample;
pub mod workspace;
