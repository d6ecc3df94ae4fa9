// ============================================================================
// mov2mp4-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interaction with the external transcoding tool
//
// This module encapsulates every subprocess interaction. Execution goes
// through the CommandExecutor trait so consumers and tests can inject their
// own implementation instead of spawning real processes; the default
// implementation uses std::process::Command with captured output.

use crate::error::{CoreError, CoreResult};

use std::ffi::OsString;
use std::io;
use std::process::{Command, Output};

/// Contains ffmpeg argument building and per-file invocation logic
pub mod ffmpeg;

/// Contains a scriptable executor for tests
pub mod mocks;

/// Trait for executing external commands.
///
/// Abstracts subprocess execution so the batch loop can be tested without a
/// real transcoding tool installed.
pub trait CommandExecutor {
    /// Runs `program` with `args`, blocking until it exits, with stdout and
    /// stderr captured.
    fn execute(&self, program: &str, args: &[OsString]) -> io::Result<Output>;
}

/// Production executor backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, program: &str, args: &[OsString]) -> io::Result<Output> {
        Command::new(program).args(args).output()
    }
}

/// Checks that the external transcoding tool is available and executable.
///
/// Runs the tool's version query (`<tool> -version`) and inspects the
/// result. This is a fail-fast precondition for the whole batch: without
/// the tool, no discovery or conversion is worth starting.
///
/// # Returns
///
/// * `Ok(())` - The tool ran and exited successfully
/// * `Err(CoreError::DependencyNotFound)` - The tool is not on PATH
/// * `Err(CoreError::CommandStart)` - The tool exists but failed to start
/// * `Err(CoreError::DependencyCheckFailed)` - The version query exited non-zero
pub fn check_tool_availability<S: CommandExecutor>(executor: &S, tool: &str) -> CoreResult<()> {
    let args = [OsString::from("-version")];
    match executor.execute(tool, &args) {
        Ok(output) if output.status.success() => {
            log::debug!("Found dependency: {tool}");
            Ok(())
        }
        Ok(_) => {
            log::warn!("Dependency '{tool}' version check exited non-zero.");
            Err(CoreError::DependencyCheckFailed(tool.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{tool}' not found.");
            Err(CoreError::DependencyNotFound(tool.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{tool}': {e}");
            Err(CoreError::CommandStart(tool.to_string(), e))
        }
    }
}
