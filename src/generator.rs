//! Generators
//!
//! A generator is a service-owned command that writes an OpenAPI/Swagger JSON
//! artifact somewhere under its working tree. This module types the
//! generator tag and command line; `runner` executes the command and
//! `artifact` locates what it produced.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod artifact;
pub mod runner;

pub use artifact::{candidate_paths, find_artifact};
pub use runner::{ensure_working_dir, CommandRunner, SystemRunner};

/// Generator tag selecting the artifact search policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeneratorType {
    TypeScript,
    Kotlin,
    /// Any other tag, kept verbatim so it can be reported
    Unsupported(String),
}

impl GeneratorType {
    pub fn as_str(&self) -> &str {
        match self {
            GeneratorType::TypeScript => "typescript",
            GeneratorType::Kotlin => "kotlin",
            GeneratorType::Unsupported(tag) => tag,
        }
    }
}

impl Default for GeneratorType {
    fn default() -> Self {
        GeneratorType::Unsupported(String::new())
    }
}

impl From<String> for GeneratorType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "typescript" => GeneratorType::TypeScript,
            "kotlin" => GeneratorType::Kotlin,
            _ => GeneratorType::Unsupported(tag),
        }
    }
}

impl From<GeneratorType> for String {
    fn from(generator_type: GeneratorType) -> Self {
        generator_type.as_str().to_string()
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator command line split on whitespace. No quoting, no shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl GeneratorCommand {
    /// Split `line` on whitespace; `None` if it has no tokens.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let program = tokens.next()?;
        Some(Self {
            program,
            args: tokens.collect(),
        })
    }
}

impl fmt::Display for GeneratorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
