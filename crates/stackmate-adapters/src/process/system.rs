//! Real subprocess execution using std::process.

use std::process::{Command, Stdio};

use tracing::debug;

use stackmate_core::{
    application::ApplicationError,
    application::ports::{CommandSpec, ProcessRunner, RunStatus},
    error::StackmateResult,
};

/// Production process runner.
///
/// Children inherit the parent's standard streams so interactive generators
/// can prompt the user directly. The call blocks until the child exits; no
/// timeout is applied.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> StackmateResult<RunStatus> {
        debug!(
            command = %command.display_line(),
            cwd = %command.cwd.display(),
            "spawning external command"
        );

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::GeneratorUnavailable {
                command: command.display_line(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(RunStatus::Success)
        } else {
            Ok(RunStatus::Failed {
                code: status.code(),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
