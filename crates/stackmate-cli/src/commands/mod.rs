//! Command handlers.
//!
//! Each submodule owns one subcommand and exposes a single `execute`
//! function.  Handlers translate CLI arguments into core types, call the
//! wizard service, and render results — no scaffolding logic lives here.

pub mod completions;
pub mod new;
