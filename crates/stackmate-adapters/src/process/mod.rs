//! Process-execution adapters.

mod script;
mod system;

pub use script::ScriptedRunner;
pub use system::SystemRunner;
