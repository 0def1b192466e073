//! Application layer for Stackmate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WizardService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FrontendStatus, WizardReport, WizardService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandSpec, Filesystem, ProcessRunner, RunStatus};

pub use error::ApplicationError;
