//! Core domain layer for Stackmate.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and subprocess concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod error;
pub mod project;
pub mod templates;

pub use error::{DomainError, ErrorCategory};
pub use project::{BACKEND_DIR_NAME, DEFAULT_PROJECT_NAME, ProjectLayout, ProjectName};
