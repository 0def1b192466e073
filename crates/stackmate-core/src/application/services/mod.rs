//! Application services.

pub mod wizard_service;

pub use wizard_service::{FrontendStatus, WizardReport, WizardService};
