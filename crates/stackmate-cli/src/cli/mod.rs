//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackmate",
    bin_name = "stackmate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FastAPI + React setup wizard",
    long_about = "Stackmate scaffolds a FastAPI backend, delegates the frontend \
                  to a generator, and wires the two together with a dev-server proxy.",
    after_help = "EXAMPLES:\n\
        \x20 stackmate new              # interactive: prompts for a name\n\
        \x20 stackmate new demo --yes   # non-interactive\n\
        \x20 stackmate completions bash > /usr/share/bash-completion/completions/stackmate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the setup wizard.
    #[command(
        visible_alias = "n",
        about = "Create a new FastAPI + React project",
        after_help = "EXAMPLES:\n\
            \x20 stackmate new\n\
            \x20 stackmate new my-shop\n\
            \x20 stackmate new --yes    # default name, no prompt"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackmate completions bash > ~/.local/share/bash-completion/completions/stackmate\n\
            \x20 stackmate completions zsh  > ~/.zfunc/_stackmate\n\
            \x20 stackmate completions fish > ~/.config/fish/completions/stackmate.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackmate new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Omit it to be prompted; an empty answer uses the
    /// built-in default.
    #[arg(value_name = "NAME", help = "Project name (prompted when omitted)")]
    pub name: Option<String>,

    /// Skip the interactive prompt.
    ///
    /// With no NAME this accepts the configured default name.
    #[arg(short = 'y', long = "yes", help = "Skip the name prompt")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackmate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_with_name() {
        let cli = Cli::parse_from(["stackmate", "new", "demo"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name.as_deref(), Some("demo"));
                assert!(!args.yes);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn parse_new_without_name() {
        let cli = Cli::parse_from(["stackmate", "new"]);
        match cli.command {
            Commands::New(args) => assert_eq!(args.name, None),
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_alias_works() {
        let cli = Cli::parse_from(["stackmate", "n", "demo", "--yes"]);
        match cli.command {
            Commands::New(args) => assert!(args.yes),
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stackmate", "--quiet", "--verbose", "new"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["stackmate"]).is_err());
    }
}
