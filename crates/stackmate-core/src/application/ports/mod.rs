//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackmate-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory/file operations
//!   - `ProcessRunner`: blocking external command execution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::{Path, PathBuf};

use crate::error::StackmateResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackmate_adapters::filesystem::LocalFilesystem` (production)
/// - `stackmate_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds silently if
    /// the directory already exists.
    fn create_dir_all(&self, path: &Path) -> StackmateResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> StackmateResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the immediate subdirectories of `path`, sorted by file name.
    ///
    /// Files are excluded; the result is only directories. Sorting keeps
    /// frontend detection deterministic across platforms.
    fn list_dirs(&self, path: &Path) -> StackmateResult<Vec<PathBuf>>;
}

/// Port for running external commands.
///
/// Implemented by:
/// - `stackmate_adapters::process::SystemRunner` (production, inherited stdio)
/// - `stackmate_adapters::process::ScriptedRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run a command to completion and report how it exited.
    ///
    /// Blocks until the child exits; no timeout is applied. The child shares
    /// the parent's standard streams so interactive generators can prompt
    /// the user. `Err` means the command could not be run at all (e.g. the
    /// program is not installed); a non-zero exit is `Ok(RunStatus::Failed)`.
    fn run(&self, command: &CommandSpec) -> StackmateResult<RunStatus>;
}

/// An external command: program, fixed arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = &'static str>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(String::from).collect(),
            cwd: cwd.into(),
        }
    }

    /// The primary frontend generator, run inside the project root.
    pub fn primary_generator(cwd: &Path) -> Self {
        Self::new("npx", ["create-launcher"], cwd)
    }

    /// The non-interactive fallback: Vite with the React template, targeting
    /// a fixed `frontend` subdirectory.
    pub fn fallback_generator(cwd: &Path) -> Self {
        Self::new(
            "npm",
            ["create", "vite@latest", "frontend", "--", "--template", "react"],
            cwd,
        )
    }

    /// `program arg1 arg2 …` for logs and error messages.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// How an external command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit code 0.
    Success,
    /// Non-zero exit code, or killed by a signal (`code: None`).
    Failed { code: Option<i32> },
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
