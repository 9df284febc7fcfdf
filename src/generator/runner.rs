//! Generator execution
//!
//! Runs a generator as a child process in the service's working directory.
//! The child's stdout and stderr are the collector's own streams, so output
//! reaches the operator live and unbuffered. Stdin is closed. There is no
//! timeout.

use crate::error::CollectError;
use crate::generator::GeneratorCommand;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Executes generator commands.
pub trait CommandRunner {
    /// Run `command` in `working_dir`; `Ok` only for exit status zero.
    fn run(&self, command: &GeneratorCommand, working_dir: &Path) -> Result<(), CollectError>;
}

/// Fails with `WorkingDirMissing` unless `working_dir` is an existing directory.
pub fn ensure_working_dir(working_dir: &Path) -> Result<(), CollectError> {
    if working_dir.is_dir() {
        Ok(())
    } else {
        Err(CollectError::WorkingDirMissing(working_dir.to_path_buf()))
    }
}

/// Spawns real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &GeneratorCommand, working_dir: &Path) -> Result<(), CollectError> {
        ensure_working_dir(working_dir)?;

        debug!(
            program = %command.program,
            args = ?command.args,
            cwd = %working_dir.display(),
            "Spawning generator"
        );

        // status() waits for the child, so the handle never outlives this call.
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CollectError::GeneratorSpawn {
                program: command.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CollectError::GeneratorExit {
                program: command.program.clone(),
                status,
            })
        }
    }
}
