//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during wizard orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The frontend generator (and its fallback) exited non-zero.
    #[error("frontend generator '{command}' failed{}", format_exit(.code))]
    GeneratorFailed { command: String, code: Option<i32> },

    /// The generator command could not be spawned at all.
    #[error("could not run '{command}': {reason}")]
    GeneratorUnavailable { command: String, reason: String },
}

fn format_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!(" with exit code {c}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::GeneratorFailed { command, .. } => vec![
                format!("'{}' exited with an error", command),
                "Check the generator output above for details".into(),
                "Ensure Node.js and npm are installed and up to date".into(),
            ],
            Self::GeneratorUnavailable { command, .. } => vec![
                format!("'{}' could not be started", command),
                "Ensure the command is installed and in your PATH".into(),
                "Install Node.js to get npm and npx: https://nodejs.org".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::GeneratorFailed { .. } => ErrorCategory::External,
            Self::GeneratorUnavailable { .. } => ErrorCategory::External,
        }
    }
}
