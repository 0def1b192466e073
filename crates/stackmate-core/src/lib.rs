//! Stackmate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stackmate
//! setup wizard, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         stackmate-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          WizardService                  │
//! │      Orchestrates the Setup Run         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, ProcessRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackmate-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemRunner, fakes)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (ProjectName, ProjectLayout, blobs)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackmate_core::{
//!     application::WizardService,
//!     domain::{ProjectLayout, ProjectName},
//! };
//!
//! // 1. Resolve the name and layout
//! let name = ProjectName::parse("demo").unwrap();
//! let layout = ProjectLayout::new(name, ".");
//!
//! // 2. Use the wizard service (with injected adapters)
//! let service = WizardService::new(filesystem, runner);
//! let report = service.run(&layout).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FrontendStatus, WizardReport, WizardService,
        ports::{CommandSpec, Filesystem, ProcessRunner, RunStatus},
    };
    pub use crate::domain::{
        BACKEND_DIR_NAME, DEFAULT_PROJECT_NAME, ProjectLayout, ProjectName, templates,
    };
    pub use crate::error::{StackmateError, StackmateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
